use super::parameters::parse_parameters;
use super::prototypes::scan_prototypes;
use super::source::{collapse_blocks, matching_brace, strip_initializer_lists};
use super::type_map::map_complex_type;
use crate::error::ParseWarning;
use crate::library::{ClassDef, FunctionDef};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `class NAME [: bases] {`
static CLASS_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+(\w+)\s*(?::[^{;]*)?\{").expect("class pattern"));

static ACCESS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(public|private|protected)\s*:").expect("access label pattern")
});

/// Result of scanning for classes: the classes found, and the source ranges they cover.
pub struct ClassScan {
    pub classes: Vec<ClassDef>,
    pub spans: Vec<Range<usize>>,
}

/// Extracts class declarations and their public members.
///
/// A class is only reported when it exposes at least one method or constructor.
pub fn parse_classes(content: &str, warnings: &mut Vec<ParseWarning>) -> ClassScan {
    let mut classes = Vec::new();
    let mut spans = Vec::new();

    for captures in CLASS_HEAD.captures_iter(content) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let class_name = name.as_str();
        let open = whole.end() - 1;

        let Some(close) = matching_brace(content, open) else {
            warnings.push(ParseWarning::UnterminatedClass {
                name: class_name.to_string(),
            });
            continue;
        };
        spans.push(whole.start()..close + 1);

        let body = collapse_blocks(&strip_initializer_lists(&content[open + 1..close]));
        let (methods, constructors) = parse_members(class_name, &body, warnings);

        log::debug!(
            "Class '{}': {} methods, {} constructors",
            class_name,
            methods.len(),
            constructors.len()
        );

        if !methods.is_empty() || !constructors.is_empty() {
            classes.push(ClassDef {
                name: class_name.to_string(),
                methods,
                constructors,
                description: None,
            });
        }
    }

    ClassScan { classes, spans }
}

fn parse_members(
    class_name: &str,
    body: &str,
    warnings: &mut Vec<ParseWarning>,
) -> (Vec<FunctionDef>, Vec<FunctionDef>) {
    let mut methods = Vec::new();
    let mut constructors = Vec::new();

    for section in public_sections(body) {
        for proto in scan_prototypes(section, false, warnings) {
            let parameters = parse_parameters(&proto.params, &proto.name, warnings);

            if proto.name == class_name {
                constructors.push(FunctionDef::constructor(class_name, parameters));
            } else if proto.return_part.is_empty() {
                warnings.push(ParseWarning::MalformedDeclaration {
                    fragment: proto.fragment,
                });
            } else {
                methods.push(FunctionDef::method(
                    class_name,
                    proto.name,
                    map_complex_type(&proto.return_part),
                    parameters,
                ));
            }
        }
    }

    (methods, constructors)
}

/// The parts of a class body that follow a `public:` label, up to the next
/// access label. A body without any label is public as a whole.
fn public_sections(body: &str) -> Vec<&str> {
    let labels: Vec<_> = ACCESS_LABEL.captures_iter(body).collect();
    if labels.is_empty() {
        return vec![body];
    }

    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| &label[1] == "public")
        .filter_map(|(i, label)| {
            let start = label.get(0)?.end();
            let end = labels
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(body.len(), |m| m.start());
            Some(&body[start..end])
        })
        .collect()
}
