//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use copymatch_engine::{MatchReport, ProcessingMetadata, SourceReport, TextToken};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the whole report as one document
pub struct JsonFormatter<'t, W: Write> {
    writer: W,
    suspect_text: &'t str,
    pretty: bool,
    sources: Vec<SourceData>,
}

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    /// Suspect label
    pub suspect: &'a str,
    /// Number of suspect tokens
    pub suspect_tokens: usize,
    /// Share of suspect tokens matched by any source
    pub total_coverage: f64,
    /// Processing metadata
    pub metadata: &'a ProcessingMetadata,
    /// Per-source results, in input order
    pub sources: &'a [SourceData],
}

/// One source in the JSON document
#[derive(Debug, Serialize)]
pub struct SourceData {
    /// Source label
    pub label: String,
    /// Number of source tokens
    pub source_tokens: usize,
    /// Number of matched suspect tokens
    pub matched_tokens: usize,
    /// Share of suspect tokens matched by this source
    pub coverage: f64,
    /// Contiguous matched spans
    pub spans: Vec<SpanData>,
    /// Matched suspect tokens
    pub matches: Vec<TextToken>,
}

/// One span in the JSON document
#[derive(Debug, Serialize)]
pub struct SpanData {
    /// First token position
    pub first_position: usize,
    /// Last token position
    pub last_position: usize,
    /// First line (1-based)
    pub start_line: usize,
    /// Last line (1-based)
    pub end_line: usize,
    /// Byte offset of the span start
    pub byte_start: usize,
    /// Byte offset one past the span end
    pub byte_end: usize,
    /// Raw suspect text covered by the span
    pub text: String,
}

impl<'t, W: Write> JsonFormatter<'t, W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, suspect_text: &'t str, pretty: bool) -> Self {
        Self {
            writer,
            suspect_text,
            pretty,
            sources: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<'_, W> {
    fn format_source(&mut self, source: &SourceReport) -> Result<()> {
        let spans = source
            .spans
            .iter()
            .map(|span| SpanData {
                first_position: span.first_position,
                last_position: span.last_position,
                start_line: span.start_line,
                end_line: span.end_line,
                byte_start: span.bytes.start,
                byte_end: span.bytes.end,
                text: span.excerpt(self.suspect_text).to_string(),
            })
            .collect();
        self.sources.push(SourceData {
            label: source.label.clone(),
            source_tokens: source.source_tokens,
            matched_tokens: source.matched_tokens(),
            coverage: source.coverage,
            spans,
            matches: source.matches.clone(),
        });
        Ok(())
    }

    fn finish(&mut self, report: &MatchReport) -> Result<()> {
        let document = ReportData {
            suspect: &report.suspect,
            suspect_tokens: report.suspect_tokens,
            total_coverage: report.total_coverage(),
            metadata: &report.metadata,
            sources: &self.sources,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
