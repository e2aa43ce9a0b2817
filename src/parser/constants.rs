use super::type_map::{infer_literal_type, map_type};
use crate::error::ParseWarning;
use crate::library::ConstantDef;
use regex::Regex;
use std::sync::LazyLock;

/// `#define NAME VALUE`. Group 2 is set when the name is directly followed by `(`.
static DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+(\w+)(\()?(.*)$").expect("define pattern")
});

/// `const TYPE NAME = VALUE;`
static CONST_GLOBAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bconst\s+(\w+)\s+(\w+)\s*=\s*([^;()]+);").expect("const pattern")
});

/// Extracts object-like macros as constants.
///
/// Function-like macros, flag macros without a value and include guards are
/// skipped. Macros continued onto the next line are skipped with a warning.
pub fn parse_defines(content: &str, warnings: &mut Vec<ParseWarning>) -> Vec<ConstantDef> {
    let mut constants = Vec::new();

    for captures in DEFINE.captures_iter(content) {
        let name = &captures[1];
        if captures.get(2).is_some() {
            continue;
        }
        if is_include_guard(name) {
            continue;
        }

        let value = captures[3].trim();
        if value.is_empty() {
            continue;
        }
        if value.ends_with('\\') {
            warnings.push(ParseWarning::MultiLineMacro {
                name: name.to_string(),
            });
            continue;
        }

        constants.push(ConstantDef {
            name: name.to_string(),
            value: value.to_string(),
            value_type: infer_literal_type(value),
        });
    }

    constants
}

/// Extracts `const` globals, typed through the base mapping table.
pub fn parse_const_globals(content: &str) -> Vec<ConstantDef> {
    CONST_GLOBAL
        .captures_iter(content)
        .map(|captures| ConstantDef {
            name: captures[2].to_string(),
            value: captures[3].trim().to_string(),
            value_type: map_type(&captures[1]),
        })
        .collect()
}

fn is_include_guard(name: &str) -> bool {
    name.ends_with("_H") || name.ends_with("_H_")
}
