//! Input abstraction for suspect and source documents
//!
//! Provides a unified interface for reading text from various sources.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to process as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Default label: the file name for files, a generic name otherwise
    pub fn default_label(&self) -> String {
        match self {
            Input::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Input::Text(_) | Input::Bytes(_) => "<text>".to_string(),
            Input::Reader(_) => "<stream>".to_string(),
        }
    }

    /// Convert the input to a text string
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                String::from_utf8(buffer).map_err(|e| {
                    EngineError::EncodingError(format!("Invalid UTF-8 from stream: {e}"))
                })
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// A source document together with the label used in reports
#[derive(Debug)]
pub struct SourceInput {
    /// Human-readable name, e.g. the file name
    pub label: String,
    /// Where the text comes from
    pub input: Input,
}

impl SourceInput {
    /// Label the input with its default label
    pub fn new(input: Input) -> Self {
        Self {
            label: input.default_label(),
            input,
        }
    }

    /// Label the input explicitly
    pub fn labeled(label: impl Into<String>, input: Input) -> Self {
        Self {
            label: label.into(),
            input,
        }
    }
}

impl From<PathBuf> for SourceInput {
    fn from(path: PathBuf) -> Self {
        SourceInput::new(Input::File(path))
    }
}
