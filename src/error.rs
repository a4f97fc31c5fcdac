//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a document.
///
/// Markdown and HTML handling never error; malformed input degrades to
/// best-effort output. Only the file system and the PDF writer can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist. Nothing has been written.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// I/O error when reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing a font file supplied for text measurement.
    #[error("font error: {0}")]
    Font(String),

    /// Error during PDF assembly.
    #[error("PDF generation error: {0}")]
    Pdf(String),
}
