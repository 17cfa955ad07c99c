//! Report document loader.
//!
//! Reads the report export as UTF-8 JSON and deserializes it into
//! [`ReportDocument`]. Missing top-level sections are reported here;
//! row-level shape problems are left to the extractor.

use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::models::ReportDocument;
use crate::parser::text::decode_utf8;

/// Read and parse a report export file.
pub fn load_report<P: AsRef<Path>>(path: P) -> ReportResult<ReportDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_utf8(&bytes)?;
    parse_report(&text)
}

/// Parse report JSON text.
pub fn parse_report(text: &str) -> ReportResult<ReportDocument> {
    Ok(serde_json::from_str(text)?)
}
