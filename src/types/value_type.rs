use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of value kinds a port, parameter or constant can carry.
///
/// The serialized form (and `Display`) is the spelling used in generated
/// sketches, e.g. `unsigned long` or `char*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "byte")]
    Byte,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "String")]
    String,
    #[serde(rename = "uint8_t")]
    UInt8,
    #[serde(rename = "uint16_t")]
    UInt16,
    #[serde(rename = "uint32_t")]
    UInt32,
    #[serde(rename = "unsigned long")]
    UnsignedLong,
    #[serde(rename = "int*")]
    IntPtr,
    #[serde(rename = "char*")]
    CharPtr,
    #[serde(rename = "any")]
    Any,
}

impl ValueType {
    pub const ALL: [ValueType; 17] = [
        ValueType::Void,
        ValueType::Int,
        ValueType::Long,
        ValueType::Float,
        ValueType::Double,
        ValueType::Bool,
        ValueType::Boolean,
        ValueType::Byte,
        ValueType::Char,
        ValueType::String,
        ValueType::UInt8,
        ValueType::UInt16,
        ValueType::UInt32,
        ValueType::UnsignedLong,
        ValueType::IntPtr,
        ValueType::CharPtr,
        ValueType::Any,
    ];

    /// The C spelling of the type, as written into declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Void => "void",
            ValueType::Int => "int",
            ValueType::Long => "long",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Bool => "bool",
            ValueType::Boolean => "boolean",
            ValueType::Byte => "byte",
            ValueType::Char => "char",
            ValueType::String => "String",
            ValueType::UInt8 => "uint8_t",
            ValueType::UInt16 => "uint16_t",
            ValueType::UInt32 => "uint32_t",
            ValueType::UnsignedLong => "unsigned long",
            ValueType::IntPtr => "int*",
            ValueType::CharPtr => "char*",
            ValueType::Any => "any",
        }
    }

    /// The literal substituted for an input that has neither a connection nor a literal.
    pub fn zero_value(self) -> &'static str {
        match self {
            ValueType::String => "\"\"",
            ValueType::Bool | ValueType::Boolean => "false",
            ValueType::Float | ValueType::Double => "0.0",
            ValueType::Char => "'\\0'",
            _ => "0",
        }
    }

    pub fn is_void(self) -> bool {
        self == ValueType::Void
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not the spelling of any [`ValueType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown value type '{0}'")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ValueType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == trimmed)
            .ok_or_else(|| UnknownValueType(trimmed.to_string()))
    }
}
