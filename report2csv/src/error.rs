//! Error types for the report to CSV conversion pipeline.
//!
//! One error type per pipeline stage:
//!
//! - [`ConfigError`] - Command line configuration
//! - [`DecodeError`] - Input byte decoding
//! - [`HeaderError`] - Header specification loading
//! - [`ReportError`] - Report document loading
//! - [`ResolveError`] - Column label resolution
//! - [`WriteError`] - CSV output
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Text Decoding Errors
// =============================================================================

/// Errors while turning raw file bytes into text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Bytes are not valid UTF-8 and no fallback was allowed.
    #[error("Invalid UTF-8 content")]
    InvalidUtf8,

    /// Detected encoding has no decoder.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Decoding with the detected encoding produced replacement characters.
    #[error("Content is not valid {0}")]
    Malformed(String),

    /// No candidate encoding decoded the bytes cleanly.
    #[error("Could not decode content (tried {0})")]
    NoMatchingEncoding(String),
}

// =============================================================================
// Header Specification Errors
// =============================================================================

/// Errors while loading the header specification file.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Failed to read file.
    #[error("Failed to read header file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File bytes could not be decoded.
    #[error("Failed to decode header file: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid CSV content.
    #[error("Invalid header CSV: {0}")]
    Csv(#[from] csv::Error),

    /// File has no record at all.
    #[error("Header file is empty")]
    Empty,
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while loading the report document.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to read file.
    #[error("Failed to read report '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File bytes could not be decoded.
    #[error("Failed to decode report: {0}")]
    Decode(#[from] DecodeError),

    /// JSON parsing or shape error.
    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A key listed in `detailColumns` has no entry in `detailColumnInfo`.
    #[error("Detail column '{0}' has no entry in detailColumnInfo")]
    MissingColumnInfo(String),

    /// A column descriptor has no `label`.
    #[error("Detail column '{0}' has no label")]
    MissingColumnLabel(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building the run configuration from the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// More positional arguments than report, header and output paths.
    #[error("Expected at most 3 positional arguments, got {0}")]
    TooManyArguments(usize),

    /// Output delimiter must be a single ASCII character.
    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
}

// =============================================================================
// Resolution Errors
// =============================================================================

/// Errors while resolving header labels against the report columns.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A requested label does not exist in the report.
    #[error("Column label not found in report: {label}\nAvailable: {}", .available.join(", "))]
    MissingColumn {
        label: String,
        available: Vec<String>,
    },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// CSV serialization failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush the CSV buffer.
    #[error("Failed to finish CSV buffer: {0}")]
    Flush(String),

    /// Failed to write file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the error type returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Header specification error.
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// Report loading error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Column resolution error.
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Output error.
    #[error("Output error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for text decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for header specification loading.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Result type for report loading.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for column resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type for output writing.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
