//! corefmerge CLI library
//!
//! This library provides the command-line interface for merging two
//! coreference annotations of the same documents.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
