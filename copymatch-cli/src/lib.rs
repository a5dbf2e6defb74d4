//! copymatch CLI library
//!
//! This library provides the command-line interface for finding passages a
//! suspect document shares with a set of source documents.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
