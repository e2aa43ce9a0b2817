//! Prelude module for convenient imports
//!
//! Re-exports the types needed to parse headers, build sketch graphs and
//! compile them.
//!
//! # Example
//!
//! ```rust,no_run
//! use sketchflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let header = std::fs::read_to_string("libraries/Servo.h")?;
//! let parsed = parse_header(&header, "Servo.h")?;
//!
//! let export = std::fs::read_to_string("sketch.json")?;
//! let graph = UiSketch::from_json(&export)?.into_sketch()?;
//!
//! println!("{} functions parsed", parsed.library.functions.len());
//! println!("{}", compile_sketch(&graph));
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CompiledSketch, Compiler, CompilerBuilder, compile_sketch};

// Parsing and library descriptors
pub use crate::library::{
    Catalog, ClassDef, ConstantDef, FunctionDef, Library, Parameter, core_library,
};
pub use crate::parser::{ParsedHeader, parse_header};

// Graph model
pub use crate::sketch::{
    Edge, EdgeKind, FunctionCall, IntoSketch, Node, NodeKind, Port, SketchGraph, VariableDecl,
};
pub use crate::types::{ValueType, is_compatible};
pub use crate::ui::UiSketch;

// Error types
pub use crate::error::{
    CatalogError, ConnectionError, ParseError, ParseWarning, SketchConversionError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
