//! Output formatting module

use anyhow::Result;
use copymatch_engine::{MatchReport, SourceReport};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the matches of one source
    fn format_source(&mut self, source: &SourceReport) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self, report: &MatchReport) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per matched span
    Text,
    /// The full match report as JSON
    Json,
    /// Suspect text with highlighted spans and source footnotes
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per matched span with an excerpt",
            OutputFormat::Json => "full match report as JSON",
            OutputFormat::Markdown => "suspect text with ==highlights== and source footnotes",
        }
    }

    /// Look up a format by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }
}

/// Options shared by the formatters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Longest excerpt in text output (0 = no limit)
    pub context_chars: usize,
}

/// Create the formatter for a format, writing to `writer`
///
/// `suspect_text` is the raw suspect document the report's byte ranges
/// point into.
pub fn create_formatter<'t, W>(
    format: OutputFormat,
    writer: W,
    suspect_text: &'t str,
    options: FormatOptions,
) -> Box<dyn OutputFormatter + 't>
where
    W: Write + Send + Sync + 't,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(
            writer,
            suspect_text,
            options.context_chars,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(
            writer,
            suspect_text,
            options.pretty_json,
        )),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, suspect_text)),
    }
}

/// Write a whole report through a formatter
pub fn write_report<F>(formatter: &mut F, report: &MatchReport) -> Result<()>
where
    F: OutputFormatter + ?Sized,
{
    for source in &report.sources {
        formatter.format_source(source)?;
    }
    formatter.finish(report)
}
