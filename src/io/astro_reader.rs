//! Reader for astronomical component frequency files.
//!
//! Parses simple text files mapping constituent names to angular
//! frequencies, for use when the host supplies its own component table
//! instead of the built-in one.
//!
//! # File Format
//!
//! ```text
//! # Astronomical components for the flow module
//! # columns: name frequency(deg/h)
//! A0 0.0
//! M2 28.9841042
//! S2 30.0
//! K1 15.0410686
//! ```
//!
//! Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::astro::AstroComponentTable;

/// Error type for component file parsing.
#[derive(Debug, Error)]
pub enum AstroFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// The same constituent appears twice
    #[error("Duplicate component at line {line}: {name}")]
    DuplicateComponent { line: usize, name: String },
}

/// Parse component data from a string.
///
/// Same format as the file reader, useful for testing or embedded data.
pub fn parse_components(content: &str) -> Result<AstroComponentTable, AstroFileError> {
    let mut table = AstroComponentTable::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(AstroFileError::ParseError {
                line: line_num + 1,
                message: "Expected: name frequency".into(),
            });
        }

        let name = parts[0].to_uppercase();
        let frequency: f64 = parts[1].parse().map_err(|_| AstroFileError::ParseError {
            line: line_num + 1,
            message: "Invalid frequency value".into(),
        })?;

        if table.contains(&name) {
            return Err(AstroFileError::DuplicateComponent {
                line: line_num + 1,
                name,
            });
        }
        table.insert(&name, frequency);
    }

    Ok(table)
}

/// Read an astronomical component file.
pub fn read_component_file(path: &Path) -> Result<AstroComponentTable, AstroFileError> {
    let mut content = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut content)?;
    parse_components(&content)
}
