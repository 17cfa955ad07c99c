//! # report2csv - Analytics report export to CSV
//!
//! report2csv flattens an analytics report export (JSON with detail column
//! metadata and grouped detail rows) into a CSV whose columns, and their
//! order, come from a separate header specification file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ report.json │────▶│  Resolver   │────▶│  Extractor  │────▶│ output.csv  │
//! │ header.csv  │     │ label→index │     │  rows→cells │     │  (BOM+CRLF) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use report2csv::{run, RunConfig};
//!
//! let summary = run(&RunConfig::default())?;
//! println!("Output written: {}", summary.output.display());
//! # Ok::<(), report2csv::PipelineError>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per pipeline stage
//! - [`models`] - Typed report records (ReportDocument, Row, Cell)
//! - [`normalize`] - Label normalization
//! - [`parser`] - Report and header specification loaders
//! - [`transform`] - Resolver, extractor and pipeline
//! - [`writer`] - CSV output
//! - [`config`] - Run configuration
//! - [`logging`] - Tracing subscriber setup

// Core modules
pub mod error;
pub mod models;
pub mod normalize;

// Input
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Runtime
pub mod config;
pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, DecodeError, HeaderError, PipelineError, ReportError, ResolveError, WriteError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, ColumnInfo, FactGroup, ReportDocument, ReportMetadata, Row, SkipReason};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use normalize::normalize;
pub use parser::{load_header_spec, load_report, parse_header_spec, parse_report, HeaderSpec};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    build_column_index, convert, extract_rows, resolve_targets, run, CellValuePolicy,
    ColumnIndex, Conversion, ExtractResult, RunSummary, SkippedRow,
};

// =============================================================================
// Re-exports - Output and configuration
// =============================================================================

pub use config::RunConfig;
pub use writer::{render_csv, write_csv};
