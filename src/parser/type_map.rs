use crate::types::ValueType;
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

static QUALIFIERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:const|volatile|static)\b").expect("qualifier pattern"));
static TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([\w:]+)\s*<.*>").expect("template pattern"));
static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+::").expect("namespace pattern"));

/// Base table from C/C++ spellings to value types.
fn base_type(name: &str) -> Option<ValueType> {
    let ty = match name {
        "void" => ValueType::Void,
        "int" => ValueType::Int,
        "long" => ValueType::Long,
        "float" => ValueType::Float,
        "double" => ValueType::Double,
        "bool" => ValueType::Bool,
        "boolean" => ValueType::Boolean,
        "byte" => ValueType::Byte,
        "char" => ValueType::Char,
        "String" => ValueType::String,
        "uint8_t" => ValueType::UInt8,
        "uint16_t" => ValueType::UInt16,
        "uint32_t" => ValueType::UInt32,
        "unsigned long" => ValueType::UnsignedLong,
        "unsigned int" => ValueType::UInt16,
        "unsigned char" => ValueType::UInt8,
        "size_t" => ValueType::UInt32,
        "word" => ValueType::UInt16,
        _ => return None,
    };
    Some(ty)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().join(" ")
}

/// Maps a plain type spelling through the base table.
///
/// Pointer-decorated `char` and `int` map to the dedicated pointer kinds, any
/// other pointer maps to `any`. References are looked up as their base type.
/// Anything unrecognized maps to `any`.
pub fn map_type(cpp_type: &str) -> ValueType {
    let is_pointer = cpp_type.contains('*');
    let clean = collapse_whitespace(&cpp_type.replace(['*', '&'], " "));

    if is_pointer {
        return match clean.as_str() {
            "char" => ValueType::CharPtr,
            "int" => ValueType::IntPtr,
            _ => ValueType::Any,
        };
    }

    base_type(&clean).unwrap_or(ValueType::Any)
}

/// Maps a full declared type, including qualifiers, namespaces and templates.
pub fn map_complex_type(cpp_type: &str) -> ValueType {
    let unqualified = QUALIFIERS.replace_all(cpp_type, "");
    let unqualified = unqualified.trim();

    if let Some(captures) = TEMPLATE.captures(unqualified) {
        let base = &captures[1];
        let container_like = ["vector", "list", "array", "pair", "tuple", "initializer_list"];
        if container_like.iter().any(|c| base.contains(c)) {
            return ValueType::Any;
        }
        if base.contains("string") || base == "String" {
            return ValueType::String;
        }
    }

    let without_namespaces = NAMESPACE.replace_all(unqualified, "");
    map_type(&without_namespaces)
}

/// Infers the type of a macro value from its lexical shape.
pub fn infer_literal_type(value: &str) -> ValueType {
    if value.starts_with('"') {
        ValueType::String
    } else if value.starts_with('\'') {
        ValueType::Char
    } else if value == "true" || value == "false" {
        ValueType::Bool
    } else if value.contains('.') {
        ValueType::Float
    } else {
        // Hex, decimal and anything else (expressions, other macros) read as int.
        ValueType::Int
    }
}
