use super::type_map::map_complex_type;
use crate::error::ParseWarning;
use crate::library::Parameter;
use itertools::Itertools;
use thiserror::Error;

/// Words that qualify a type but can never be a parameter name.
const QUALIFIER_KEYWORDS: [&str; 12] = [
    "const", "volatile", "static", "unsigned", "signed", "long", "short", "struct", "class",
    "enum", "typename", "template",
];

/// Built-in type names, never a parameter name.
const FUNDAMENTAL_TYPES: [&str; 6] = ["void", "int", "char", "float", "double", "bool"];

/// Qualifiers that do not name a type on their own (unlike `unsigned` or `long`).
const NON_TYPE_QUALIFIERS: [&str; 8] = [
    "const", "volatile", "static", "struct", "class", "enum", "typename", "template",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum ParameterError {
    #[error("variadic parameters are not supported")]
    Variadic,
    #[error("unbalanced brackets")]
    Unbalanced,
    #[error("missing default value after '='")]
    EmptyDefault,
    #[error("missing type")]
    EmptyType,
}

/// Scanner state shared by the splitting and default-value passes.
#[derive(Default)]
struct Nesting {
    depth: i32,
    quote: Option<char>,
    escaped: bool,
}

impl Nesting {
    /// Feeds one character. Returns true when the character sits at depth 0
    /// outside any quoted literal.
    fn feed(&mut self, c: char) -> bool {
        if let Some(q) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == q {
                self.quote = None;
            }
            return false;
        }
        match c {
            '"' | '\'' => {
                self.quote = Some(c);
                false
            }
            '<' | '(' => {
                self.depth += 1;
                false
            }
            '>' | ')' => {
                self.depth -= 1;
                false
            }
            _ => self.depth == 0,
        }
    }

    fn is_balanced(&self) -> bool {
        self.depth == 0 && self.quote.is_none()
    }
}

/// Splits a parameter list on top-level commas.
///
/// Commas nested in `<>` or `()` or inside string and character literals do
/// not split. Empty pieces are dropped.
pub fn split_parameters(params: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut nesting = Nesting::default();

    for c in params.chars() {
        let top_level = nesting.feed(c);
        if top_level && c == ',' {
            parts.push(current.trim().to_string());
            current.clear();
            continue;
        }
        current.push(c);
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }

    parts.retain(|p| !p.is_empty());
    parts
}

/// Parses a whole parameter list. Malformed parameters are dropped and
/// reported in `warnings`; the rest are kept.
pub fn parse_parameters(
    params: &str,
    function: &str,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Parameter> {
    let params = params.trim();
    if params.is_empty() || params == "void" {
        return Vec::new();
    }

    split_parameters(params)
        .into_iter()
        .enumerate()
        .filter_map(|(index, part)| match parse_parameter(&part, index) {
            Ok(param) => Some(param),
            Err(reason) => {
                log::debug!("Dropping parameter '{}' of '{}': {}", part, function, reason);
                warnings.push(ParseWarning::MalformedParameter {
                    function: function.to_string(),
                    fragment: part,
                    reason: reason.to_string(),
                });
                None
            }
        })
        .collect()
}

/// Parses one parameter such as `const char *label = "x"`.
///
/// `index` is the parameter's position, used to synthesize `argN` when the
/// declaration only names a type.
fn parse_parameter(part: &str, index: usize) -> Result<Parameter, ParameterError> {
    if part.contains("...") {
        return Err(ParameterError::Variadic);
    }

    let (declaration, default_value) = split_default(part)?;

    let spaced = declaration.replace('*', " * ").replace('&', " & ");
    let tokens: Vec<&str> = spaced.split_whitespace().collect();

    let named = (0..tokens.len()).rev().find_map(|i| {
        let (name, is_array) = name_candidate(tokens[i])?;
        let type_tokens = &tokens[..i];
        if is_qualifier(name) || !names_a_type(type_tokens) {
            return None;
        }
        let mut type_str = type_tokens.iter().join(" ");
        if is_array {
            type_str.push_str(" *");
        }
        Some((name.to_string(), type_str))
    });

    let (name, type_str) = match named {
        Some(found) => found,
        None => (format!("arg{}", index), tokens.iter().join(" ")),
    };

    if type_str.trim().is_empty() {
        return Err(ParameterError::EmptyType);
    }

    Ok(Parameter {
        name,
        value_type: map_complex_type(&type_str),
        default_value,
    })
}

/// Separates `TYPE NAME` from a default value after the first unguarded `=`.
fn split_default(part: &str) -> Result<(String, Option<String>), ParameterError> {
    let mut nesting = Nesting::default();
    let mut split_at = None;

    for (i, c) in part.char_indices() {
        let top_level = nesting.feed(c);
        if top_level && c == '=' && split_at.is_none() {
            split_at = Some(i);
        }
    }
    if !nesting.is_balanced() {
        return Err(ParameterError::Unbalanced);
    }

    match split_at {
        Some(i) => {
            let default = part[i + 1..].trim();
            if default.is_empty() {
                return Err(ParameterError::EmptyDefault);
            }
            Ok((part[..i].trim().to_string(), Some(default.to_string())))
        }
        None => Ok((part.trim().to_string(), None)),
    }
}

/// Returns the identifier in `token` and whether it carried an array suffix (`values[]`).
fn name_candidate(token: &str) -> Option<(&str, bool)> {
    let (ident, is_array) = match token.find('[') {
        Some(open) if token.ends_with(']') => (&token[..open], true),
        Some(_) => return None,
        None => (token, false),
    };
    is_identifier(ident).then_some((ident, is_array))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_qualifier(word: &str) -> bool {
    QUALIFIER_KEYWORDS.contains(&word) || FUNDAMENTAL_TYPES.contains(&word)
}

/// Whether the tokens before a candidate name spell out a type.
fn names_a_type(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .any(|t| *t != "*" && *t != "&" && !NON_TYPE_QUALIFIERS.contains(t))
}
