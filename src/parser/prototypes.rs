use super::parameters::parse_parameters;
use super::type_map::map_complex_type;
use crate::error::ParseWarning;
use crate::library::FunctionDef;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `[qualifiers] RETTYPE NAME(PARAMS) [const] [override] [= 0];` starting a line.
static FREE_PROTOTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*([A-Za-z_~][^;{}()=#"\n]*?)\(([^;{}]*)\)\s*(?:const\s*)?(?:override\s*)?(?:=\s*0\s*)?;"#,
    )
    .expect("free prototype pattern")
});

/// Same grammar as [`FREE_PROTOTYPE`], not anchored to line starts.
static MEMBER_PROTOTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([A-Za-z_~][^;{}()=#"\n]*?)\(([^;{}]*)\)\s*(?:const\s*)?(?:override\s*)?(?:=\s*0\s*)?;"#,
    )
    .expect("member prototype pattern")
});

const LEADING_QUALIFIERS: [&str; 7] = [
    "static", "inline", "virtual", "extern", "explicit", "constexpr", "friend",
];

/// Words that open a statement rather than a declaration.
const STATEMENT_KEYWORDS: [&str; 12] = [
    "return", "else", "new", "delete", "throw", "case", "goto", "if", "while", "for", "switch",
    "sizeof",
];

/// A prototype-shaped match, split into its parts.
pub(super) struct Prototype {
    /// Return type with leading qualifiers removed. Empty for constructors.
    pub return_part: String,
    pub name: String,
    pub params: String,
    pub fragment: String,
}

enum Head {
    /// Not a declaration we report: destructors, operators, statements.
    Skip,
    Malformed,
    Decl { return_part: String, name: String },
}

fn split_head(head: &str) -> Head {
    let head = head.trim();
    if head.split_whitespace().any(|w| w.starts_with("operator")) {
        return Head::Skip;
    }

    let name_start = head
        .char_indices()
        .rev()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '~'))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let name = &head[name_start..];
    let bare_name = name.strip_prefix('~').unwrap_or(name);

    if bare_name.is_empty()
        || bare_name.starts_with(|c: char| c.is_ascii_digit())
        || bare_name.contains('~')
    {
        return Head::Malformed;
    }
    if name.starts_with('~') || STATEMENT_KEYWORDS.contains(&name) {
        return Head::Skip;
    }

    let mut words: Vec<&str> = head[..name_start].split_whitespace().collect();
    while words.first().is_some_and(|w| LEADING_QUALIFIERS.contains(w)) {
        words.remove(0);
    }
    let return_part = words.join(" ");

    if STATEMENT_KEYWORDS.contains(&return_part.as_str()) {
        return Head::Skip;
    }

    Head::Decl {
        return_part,
        name: name.to_string(),
    }
}

fn to_prototype(captures: &Captures, warnings: &mut Vec<ParseWarning>) -> Option<Prototype> {
    let fragment = captures[0].trim().to_string();
    match split_head(&captures[1]) {
        Head::Skip => None,
        Head::Malformed => {
            warnings.push(ParseWarning::MalformedDeclaration { fragment });
            None
        }
        Head::Decl { return_part, name } => Some(Prototype {
            return_part,
            name,
            params: captures[2].to_string(),
            fragment,
        }),
    }
}

/// Every prototype in `content`, in source order.
pub(super) fn scan_prototypes(
    content: &str,
    anchored: bool,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Prototype> {
    let pattern = if anchored { &*FREE_PROTOTYPE } else { &*MEMBER_PROTOTYPE };
    pattern
        .captures_iter(content)
        .filter_map(|captures| to_prototype(&captures, warnings))
        .collect()
}

/// Extracts free-function prototypes. Class bodies must already be masked out.
pub fn parse_functions(content: &str, warnings: &mut Vec<ParseWarning>) -> Vec<FunctionDef> {
    let mut functions = Vec::new();

    for proto in scan_prototypes(content, true, warnings) {
        if proto.return_part.is_empty() {
            warnings.push(ParseWarning::MalformedDeclaration {
                fragment: proto.fragment,
            });
            continue;
        }

        let parameters = parse_parameters(&proto.params, &proto.name, warnings);
        log::trace!("Found function '{}'", proto.name);
        functions.push(FunctionDef::free(
            proto.name,
            map_complex_type(&proto.return_part),
            parameters,
        ));
    }

    functions
}
