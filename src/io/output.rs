use std::fs::File;
use std::path::Path;

use crate::core::{Member, MembershipSummary};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Sink for rendered reports. Writers receive already-computed data and only
/// decide presentation.
pub trait OutputWriter {
    fn write_summary(&mut self, summary: &MembershipSummary) -> anyhow::Result<()>;
    fn write_members(&mut self, members: &[Member]) -> anyhow::Result<()>;
    fn write_member(&mut self, member: &Member) -> anyhow::Result<()>;
}

/// Build a writer for the requested format, directed at `output` when given.
/// The terminal format only makes sense on an actual terminal.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => {
            anyhow::bail!("terminal output cannot be written to a file; use json or markdown")
        }
    }
}
