//! File readers for externally supplied tables.

mod astro_reader;

pub use astro_reader::{parse_components, read_component_file, AstroFileError};
