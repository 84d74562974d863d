// src/utils/error.rs

use thiserror::Error;

/// The error type for every fallible operation in the table generator.
#[derive(Error, Debug)]
pub enum TableError {
    /// Interpolation was asked to run over a sequence with no points.
    #[error("Cannot interpolate an empty position sequence")]
    EmptySource,

    /// The output count does not split evenly into one run per source segment.
    #[error("Output count {output} is not a multiple of the source length {input}")]
    UnevenSegments { input: usize, output: usize },

    /// A rendered listing failed the structural check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Writing the listing to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering into an in-memory buffer failed.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// A specialized `Result` type for table generation.
pub type Result<T> = std::result::Result<T, TableError>;
