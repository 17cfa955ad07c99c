//! Input loaders.
//!
//! - [`text`] - Byte decoding with BOM removal and encoding fallback
//! - [`report`] - Report JSON into typed records
//! - [`header`] - Header specification (first CSV record)

pub mod header;
pub mod report;
pub mod text;

pub use header::{load_header_spec, parse_header_spec, HeaderSpec};
pub use report::{load_report, parse_report};
pub use text::{decode_auto, decode_utf8, decode_with_label, detect_encoding};
