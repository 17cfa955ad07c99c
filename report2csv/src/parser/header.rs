//! Header specification loader.
//!
//! The header file is a delimited text file whose first record lists the
//! desired output column labels, in output order. Any further records are
//! ignored.

use std::path::Path;

use crate::error::{HeaderError, HeaderResult};
use crate::normalize::normalize;
use crate::parser::text::decode_auto;

/// Loaded header specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Normalized labels in output order.
    pub labels: Vec<String>,
    /// Encoding the file was decoded with.
    pub encoding: String,
}

/// Read and decode a header specification file.
pub fn load_header_spec<P: AsRef<Path>>(path: P) -> HeaderResult<HeaderSpec> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| HeaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, encoding) = decode_auto(&bytes)?;
    let labels = parse_header_spec(&text)?;

    Ok(HeaderSpec { labels, encoding })
}

/// Parse the first record of already-decoded header text into normalized labels.
///
/// Blank lines before the first record are skipped, so a header file that
/// starts with an empty line still yields its labels instead of an empty
/// header.
pub fn parse_header_spec(text: &str) -> HeaderResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let record = rdr.records().next().ok_or(HeaderError::Empty)??;

    Ok(record.iter().map(normalize).collect())
}
