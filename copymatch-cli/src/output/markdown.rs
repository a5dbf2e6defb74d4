//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use copymatch_engine::{MatchReport, SourceReport};
use std::io::Write;

/// Markdown formatter - reprints the suspect text with matched spans
/// highlighted and a footnote per span naming its source
pub struct MarkdownFormatter<'t, W: Write> {
    writer: W,
    suspect_text: &'t str,
    notes: Vec<Note>,
}

/// A highlighted byte range and the source it came from
#[derive(Debug, Clone)]
struct Note {
    start: usize,
    end: usize,
    label: String,
    first_position: usize,
    last_position: usize,
}

impl<'t, W: Write> MarkdownFormatter<'t, W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, suspect_text: &'t str) -> Self {
        Self {
            writer,
            suspect_text,
            notes: Vec::new(),
        }
    }

    /// The suspect text with highlight marks and footnote references
    fn annotated(&self) -> String {
        let text = self.suspect_text;
        let mut order: Vec<usize> = (0..self.notes.len()).collect();
        order.sort_by_key(|&i| (self.notes[i].start, self.notes[i].end));

        let mut out = String::with_capacity(text.len() + self.notes.len() * 16);
        let mut cursor = 0;
        let mut iter = order.into_iter().peekable();

        while let Some(first) = iter.next() {
            // Overlapping spans from different sources share one highlight
            let start = self.notes[first].start.max(cursor);
            let mut end = self.notes[first].end;
            let mut refs = vec![first];
            while let Some(&next) = iter.peek() {
                if self.notes[next].start >= end {
                    break;
                }
                end = end.max(self.notes[next].end);
                refs.push(next);
                iter.next();
            }
            if end <= start {
                continue;
            }

            out.push_str(text.get(cursor..start).unwrap_or_default());
            out.push_str(&highlight(text.get(start..end).unwrap_or_default()));
            refs.sort_unstable();
            for index in refs {
                out.push_str(&format!("[^{}]", index + 1));
            }
            cursor = end;
        }
        out.push_str(text.get(cursor..).unwrap_or_default());
        out
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<'_, W> {
    fn format_source(&mut self, source: &SourceReport) -> Result<()> {
        self.notes.extend(source.spans.iter().map(|span| Note {
            start: span.bytes.start,
            end: span.bytes.end,
            label: source.label.clone(),
            first_position: span.first_position,
            last_position: span.last_position,
        }));
        Ok(())
    }

    fn finish(&mut self, report: &MatchReport) -> Result<()> {
        writeln!(self.writer, "# {}", report.suspect)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.annotated().trim_end())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Matched sources: {} of {}, coverage {:.1}%*",
            report.matched_sources().count(),
            report.sources.len(),
            report.total_coverage() * 100.0
        )?;
        if !self.notes.is_empty() {
            writeln!(self.writer)?;
        }
        for (index, note) in self.notes.iter().enumerate() {
            writeln!(
                self.writer,
                "[^{}]: {}, positions {}-{}",
                index + 1,
                note.label,
                note.first_position,
                note.last_position
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Wrap each line of `region` in `==` marks; highlights cannot span lines
fn highlight(region: &str) -> String {
    region
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                line.to_string()
            } else {
                let lead = &line[..line.len() - line.trim_start().len()];
                let tail = &line[lead.len() + trimmed.len()..];
                format!("{lead}=={trimmed}=={tail}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{report, SUSPECT};
    use crate::output::write_report;

    #[test]
    fn test_highlights_and_footnotes() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer, SUSPECT);
        write_report(&mut formatter, &report()).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# suspect\n"));
        assert!(output.contains("==Brevity is the soul of wit,==[^1] and tediousness"));
        assert!(output.contains(
            "Therefore, since ==brevity is the soul of wit,==[^2] ==I will be brief.==[^3]"
        ));
        assert!(output.contains("*Matched sources: 2 of 3, coverage 64.0%*"));
        assert!(output.contains("[^1]: hamlet.txt, positions 0-5"));
        assert!(output.contains("[^3]: ending.txt, positions 21-24"));
    }

    #[test]
    fn test_overlapping_spans_share_a_highlight() {
        let text = "one two three four five";
        let mut formatter = MarkdownFormatter::new(Vec::new(), text);
        formatter.notes = vec![
            Note {
                start: 0,
                end: 13,
                label: "a".into(),
                first_position: 0,
                last_position: 2,
            },
            Note {
                start: 8,
                end: 18,
                label: "b".into(),
                first_position: 2,
                last_position: 3,
            },
        ];
        assert_eq!(
            formatter.annotated(),
            "==one two three four==[^1][^2] five"
        );
    }

    #[test]
    fn test_highlight_per_line() {
        assert_eq!(highlight("well-\nknown"), "==well-==\n==known==");
        assert_eq!(highlight("a\n\n  b"), "==a==\n\n  ==b==");
    }
}
