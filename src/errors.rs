/*!
 * Error types for the archdocx application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while building or writing a Word document
#[derive(Error, Debug)]
pub enum DocxError {
    /// A paragraph or table referenced a style that is not registered
    #[error("Style not found: {0}")]
    UnknownStyle(String),

    /// A style with the same id is already registered
    #[error("Style already exists: {0}")]
    DuplicateStyle(String),

    /// A table cell was addressed outside of the table grid
    #[error("Cell ({row}, {col}) is outside of a {rows}x{cols} table")]
    CellOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows in the table
        rows: usize,
        /// Number of columns in the table
        cols: usize,
    },

    /// Error while serializing a package part
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error while writing the zip container
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error while writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from document generation
    #[error("Document error: {0}")]
    Document(#[from] DocxError),
}

// Utility functions for error conversion
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
