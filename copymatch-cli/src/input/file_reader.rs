//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use copymatch_engine::Vocabulary;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.to_path_buf()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of stdin as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    }

    /// Load a newline-separated word list
    pub fn read_vocabulary(path: &Path) -> Result<Vocabulary> {
        let list = Self::read_text(path)
            .with_context(|| format!("Failed to load vocabulary: {}", path.display()))?;
        Ok(Vocabulary::from_word_list(&list))
    }
}
