use crate::types::ValueType;
use thiserror::Error;

/// Terminal failure of the declaration parser. No library is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse header '{source_id}': {message}")]
    Internal { source_id: String, message: String },
}

/// A non-fatal problem found while parsing a header.
///
/// The offending fragment is skipped, and the rest of the file is still parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("Skipped multi-line macro '{name}'")]
    MultiLineMacro { name: String },

    #[error("Could not parse declaration: {fragment}")]
    MalformedDeclaration { fragment: String },

    #[error("Could not parse parameter '{fragment}' of '{function}': {reason}")]
    MalformedParameter {
        function: String,
        fragment: String,
        reason: String,
    },

    #[error("Class '{name}' has an unterminated body and was skipped")]
    UnterminatedClass { name: String },

    #[error("{0}")]
    Advisory(LibraryIssue),
}

/// Advisory findings about a parsed library. They never block its use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryIssue {
    #[error("Library name is required")]
    MissingName,

    #[error("No functions or classes found in header")]
    NoCallables,
}

/// Why an edge cannot be added between two nodes of a sketch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Node '{0}' does not exist in the sketch")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no {direction} port '{port_id}'")]
    PortNotFound {
        node_id: String,
        port_id: String,
        direction: &'static str,
    },

    #[error("Type mismatch: {source_type} cannot connect to {target_type}")]
    TypeMismatch {
        source_type: ValueType,
        target_type: ValueType,
    },
}

/// Errors raised by the caller-owned library catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Library '{0}' already exists")]
    DuplicateLibrary(String),

    #[error("Library '{0}' is not registered")]
    UnknownLibrary(String),

    #[error("Core library '{0}' cannot be removed or deactivated")]
    CoreLibraryProtected(String),
}

/// Errors that can occur when converting a custom format into a `SketchGraph`.
#[derive(Error, Debug, Clone)]
pub enum SketchConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error("Node '{node_id}' has an unknown node type '{node_type}'")]
    UnknownNodeType { node_id: String, node_type: String },

    #[error("Node '{node_id}' declares an unknown value type '{type_name}'")]
    UnknownValueType { node_id: String, type_name: String },
}
