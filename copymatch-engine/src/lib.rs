//! Application orchestration for passage detection
//!
//! This crate reads documents, prepares their tokens, compiles the suspect
//! document into an automaton and scans any number of sources against it,
//! sequentially or on a rayon pool.

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod executor;
pub mod index;
pub mod input;
pub mod processor;
pub mod report;

// Re-export key types
pub use config::{MatchConfig, MatchConfigBuilder, DEFAULT_PARALLEL_THRESHOLD};
pub use document::{PreparedDocument, TextPreparer};
pub use error::{ApiError, ApiResult, EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use index::{LoadedSource, SuspectIndex};
pub use input::{Input, SourceInput};
pub use processor::{MatchProcessor, MatchProcessorBuilder};
pub use report::{MatchReport, ProcessingMetadata, SourceReport};

// Re-export from core for convenience
pub use copymatch_core::text::{NormalizationOptions, TextToken, Vocabulary, WordSpan};
pub use copymatch_core::{Equivalence, MatchSpan, DEFAULT_WINDOW_SIZE};
