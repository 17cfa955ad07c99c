//! Label normalization.
//!
//! Labels from the header specification and from the report metadata go
//! through [`normalize`] before any comparison, so a stray byte-order mark
//! or padding whitespace never causes a mismatch. Case and punctuation are
//! left untouched.

/// Byte-order mark as it shows up in decoded text.
pub const BOM: char = '\u{feff}';

/// Remove byte-order-mark characters and trim surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    if raw.contains(BOM) {
        raw.replace(BOM, "").trim().to_string()
    } else {
        raw.trim().to_string()
    }
}
