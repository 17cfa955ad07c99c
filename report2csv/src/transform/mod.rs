//! Transformation module.
//!
//! This module handles report to CSV conversion:
//! - Resolver: Column labels to cell positions
//! - Extractor: Detail rows to output rows
//! - Pipeline: Main conversion pipeline

pub mod extractor;
pub mod pipeline;
pub mod resolver;

pub use extractor::{extract_row, extract_rows, CellValuePolicy, ExtractResult, Field, SkippedRow};
pub use pipeline::{convert, run, Conversion, RunSummary};
pub use resolver::{build_column_index, resolve_targets, ColumnIndex};
