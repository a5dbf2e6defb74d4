//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use log::warn;
use std::path::{Path, PathBuf};

/// Extensions treated as plain text
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve source patterns, keeping plain-text files only
pub fn resolve_sources(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let (sources, skipped): (Vec<PathBuf>, Vec<PathBuf>) = resolve_patterns(patterns)?
        .into_iter()
        .partition(|path| is_plain_text(path));

    for path in &skipped {
        warn!("skipping {}: not a plain-text file", path.display());
    }
    if sources.is_empty() {
        return Err(CliError::NoTextSources {
            skipped: skipped.len(),
        }
        .into());
    }
    Ok(sources)
}

/// Whether the file extension marks a plain-text document
pub fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
