//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use copymatch_engine::{MatchReport, SourceReport};
use std::io::Write;

/// Plain text formatter - outputs one line per matched span
pub struct TextFormatter<'t, W: Write> {
    writer: W,
    suspect_text: &'t str,
    context_chars: usize,
}

impl<'t, W: Write> TextFormatter<'t, W> {
    /// Create a new text formatter; `context_chars` of 0 disables truncation
    pub fn new(writer: W, suspect_text: &'t str, context_chars: usize) -> Self {
        Self {
            writer,
            suspect_text,
            context_chars,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<'_, W> {
    fn format_source(&mut self, source: &SourceReport) -> Result<()> {
        for span in &source.spans {
            let excerpt = shorten(span.excerpt(self.suspect_text), self.context_chars);
            writeln!(
                self.writer,
                "{}: lines {}-{}, positions {}-{}: \"{}\"",
                source.label,
                span.start_line,
                span.end_line,
                span.first_position,
                span.last_position,
                excerpt
            )?;
        }
        Ok(())
    }

    fn finish(&mut self, _report: &MatchReport) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collapse whitespace and cut to `limit` characters
fn shorten(excerpt: &str, limit: usize) -> String {
    let flat = excerpt.split_whitespace().collect::<Vec<_>>().join(" ");
    if limit == 0 || flat.chars().count() <= limit {
        return flat;
    }
    let mut cut: String = flat.chars().take(limit).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{report, SUSPECT};
    use crate::output::write_report;

    fn render(context_chars: usize) -> String {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, SUSPECT, context_chars);
        write_report(&mut formatter, &report()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_line_per_span() {
        let output = render(0);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "hamlet.txt: lines 1-1, positions 0-5: \"Brevity is the soul of wit,\"",
                "hamlet.txt: lines 2-2, positions 15-20: \"brevity is the soul of wit,\"",
                "ending.txt: lines 2-2, positions 21-24: \"I will be brief.\"",
            ]
        );
    }

    #[test]
    fn test_excerpts_are_shortened() {
        let output = render(10);
        assert!(output.contains("positions 0-5: \"Brevity is…\""));
    }

    #[test]
    fn test_shorten_flattens_line_breaks() {
        assert_eq!(shorten("well-\n  known", 0), "well- known");
        assert_eq!(shorten("abc", 3), "abc");
        assert_eq!(shorten("abcd", 3), "abc…");
    }
}
