pub mod output;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use writers::{JsonWriter, MarkdownWriter, TerminalWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
