//! Error types for the exporter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the exporter library.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Input workbook does not exist.
    #[error("Workbook not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Required worksheet is missing from the workbook.
    #[error("Sheet '{sheet}' not found in {file}")]
    SheetMissing { sheet: String, file: String },

    /// Invalid base IRI passed on the command line.
    #[error("Invalid base IRI: '{0}'. Expected an absolute http(s) IRI (e.g., https://dds.schiphol.nl/asset/)")]
    InvalidBaseIri(String),

    /// Workbook could not be opened or read.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;
