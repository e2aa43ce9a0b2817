//! Lenient parser turning C/C++ header text into a [`Library`] descriptor.
//!
//! The parser is best-effort: it recognizes the declaration shapes commonly
//! found in Arduino library headers and skips everything else. A malformed
//! macro, declaration or parameter is dropped and reported as a
//! [`ParseWarning`]; it never aborts the rest of the file.

use crate::error::{ParseError, ParseWarning};
use crate::library::{Library, validate_library};
use std::panic::{self, AssertUnwindSafe};

mod classes;
mod constants;
pub mod parameters;
mod prototypes;
pub mod source;
pub mod type_map;

use classes::parse_classes;
use constants::{parse_const_globals, parse_defines};
use prototypes::parse_functions;

/// A successfully parsed header.
#[derive(Debug, Clone)]
pub struct ParsedHeader {
    pub library: Library,
    /// Non-fatal problems, including advisory findings about the library.
    pub warnings: Vec<ParseWarning>,
}

impl ParsedHeader {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Parses `content` into a library named after `source_id`.
///
/// `source_id` is the header's file name, e.g. `Servo.h`. It yields the library
/// name (`Servo`) and the include directive (`#include <Servo.h>`).
///
/// # Example
///
/// ```rust
/// use sketchflow::parser::parse_header;
///
/// let header = "#define LED_PIN 13\nvoid blink(int pin, int times = 1);";
/// let parsed = parse_header(header, "Blink.h").unwrap();
/// assert_eq!(parsed.library.include_statement, "#include <Blink.h>");
/// assert_eq!(parsed.library.functions[0].name, "blink");
/// ```
pub fn parse_header(content: &str, source_id: &str) -> Result<ParsedHeader, ParseError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(content, source_id)));

    outcome.map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown internal fault".to_string());
        log::error!("Parsing '{}' failed: {}", source_id, message);
        ParseError::Internal {
            source_id: source_id.to_string(),
            message,
        }
    })
}

fn run_pipeline(content: &str, source_id: &str) -> ParsedHeader {
    let mut warnings = Vec::new();
    let clean = source::strip_comments(content);

    let mut library = Library::new(library_name(source_id), format!("#include <{}>", source_id));

    library.constants = parse_defines(&clean, &mut warnings);
    library.constants.extend(parse_const_globals(&clean));

    let class_scan = parse_classes(&clean, &mut warnings);
    let free_source = source::mask_ranges(&clean, &class_scan.spans);
    library.functions = parse_functions(&free_source, &mut warnings);
    library.classes = class_scan.classes;

    log::debug!(
        "Parsed '{}': {} constants, {} functions, {} classes, {} warnings",
        source_id,
        library.constants.len(),
        library.functions.len(),
        library.classes.len(),
        warnings.len()
    );

    warnings.extend(validate_library(&library).into_iter().map(ParseWarning::Advisory));
    for warning in &warnings {
        log::warn!("{}: {}", source_id, warning);
    }

    ParsedHeader { library, warnings }
}

/// `Servo.h` → `Servo`. Only a trailing `.h` or `.hpp` is removed.
fn library_name(source_id: &str) -> String {
    let lower = source_id.to_ascii_lowercase();
    [".hpp", ".h"]
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .map_or(source_id, |ext| &source_id[..source_id.len() - ext.len()])
        .to_string()
}
