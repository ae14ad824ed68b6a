//! # Sug - Markdown out of source comments
//!
//! Turns a source file into a Markdown document: line comments become prose,
//! everything else becomes fenced code blocks tagged with the language name.
//!
//! Sug provides:
//! - A registry of language descriptors, built by deriving from base definitions
//! - A line classifier and block assimilator that fold a file into prose/code blocks
//! - A renderer that turns the merged blocks back into Markdown
//! - Batch conversion with per-file error isolation for the CLI

pub mod block;
pub mod config;
pub mod convert;
pub mod language;
pub mod output;
pub mod parse;
pub mod render;
pub mod ui;

use std::path::PathBuf;

// Re-exports for convenient access
pub use block::{Block, BlockKind};
pub use language::{Language, LanguageRegistry, languages};
pub use parse::parse;
pub use render::{RenderOptions, render, render_with};

/// Result type alias for Sug operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that only affect the file being converted.
///
/// A batch reports these per file and moves on to the next input.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Language <{0}> not supported.")]
    UnsupportedLanguage(String),

    #[error("Does not know how to handle: {}", .0.display())]
    UnhandledFile(PathBuf),
}

/// Error types for Sug operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),
}
