//! CSV output.
//!
//! Output is UTF-8 with a leading BOM and CRLF record terminators so that
//! spreadsheet tools open it with the right encoding. Quoting is minimal:
//! only fields containing the delimiter, a quote, CR or LF are quoted, and
//! embedded quotes are doubled.
//!
//! The document is rendered into memory and written with one call, so a
//! failure while rendering never leaves a half-written file behind.

use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::transform::extractor::Field;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Default output delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Render header and rows into BOM-prefixed CSV bytes.
pub fn render_csv(header: &[String], rows: &[Vec<Field>], delimiter: u8) -> WriteResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(UTF8_BOM.to_vec());

    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.iter().map(|field| field.as_deref().unwrap_or("")))?;
    }

    wtr.into_inner()
        .map_err(|e| WriteError::Flush(e.to_string()))
}

/// Render and write the CSV file, replacing any existing file at `path`.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    header: &[String],
    rows: &[Vec<Field>],
    delimiter: u8,
) -> WriteResult<()> {
    let path = path.as_ref();
    let bytes = render_csv(header, rows, delimiter)?;

    std::fs::write(path, bytes).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
