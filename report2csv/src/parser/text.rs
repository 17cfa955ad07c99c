//! Byte decoding for input files.
//!
//! Both inputs are expected to be UTF-8, possibly with a leading BOM as
//! written by spreadsheet tools. The header specification may also come
//! from a spreadsheet saved in a legacy code page, so [`decode_auto`] falls
//! back to encoding detection when the bytes are not UTF-8.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8, WINDOWS_1252};

use crate::error::{DecodeError, DecodeResult};

/// chardet guesses below this confidence are ignored.
const MIN_CONFIDENCE: f32 = 0.5;

/// Decode strict UTF-8, dropping a leading BOM.
pub fn decode_utf8(bytes: &[u8]) -> DecodeResult<String> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(DecodeError::InvalidUtf8);
    }
    Ok(text.into_owned())
}

/// Detect the encoding of raw bytes using chardet.
///
/// Returns `None` when chardet has no confident guess or names an encoding
/// `encoding_rs` does not know. Short inputs often end up here.
pub fn detect_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let (charset, confidence, _) = chardet::detect(bytes);
    if charset.is_empty() || confidence < MIN_CONFIDENCE {
        return None;
    }

    let label = match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "shift_jis" | "sjis" | "cp932" => "shift_jis".to_string(),
        _ => chardet::charset2encoding(&charset).to_string(),
    };
    Encoding::for_label(label.as_bytes())
}

/// Decode bytes with an explicit encoding label, dropping a leading BOM.
pub fn decode_with_label(bytes: &[u8], label: &str) -> DecodeResult<String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| DecodeError::UnsupportedEncoding(label.to_string()))?;

    decode_clean(bytes, encoding).ok_or_else(|| DecodeError::Malformed(encoding.name().to_string()))
}

/// Decode without replacement characters, or `None`.
fn decode_clean(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    (!had_errors).then(|| text.into_owned())
}

/// Decode UTF-8 when possible, otherwise the detected encoding, otherwise
/// the first of Shift_JIS and windows-1252 that decodes cleanly.
///
/// Returns the text and the name of the encoding that was used.
pub fn decode_auto(bytes: &[u8]) -> DecodeResult<(String, String)> {
    if let Ok(text) = decode_utf8(bytes) {
        return Ok((text, UTF_8.name().to_string()));
    }

    let candidates = detect_encoding(bytes)
        .into_iter()
        .chain([SHIFT_JIS, WINDOWS_1252]);

    let mut tried = vec![UTF_8.name()];
    for encoding in candidates {
        if tried.contains(&encoding.name()) {
            continue;
        }
        tried.push(encoding.name());

        if let Some(text) = decode_clean(bytes, encoding) {
            tracing::debug!(encoding = encoding.name(), "input is not UTF-8, using fallback encoding");
            return Ok((text, encoding.name().to_string()));
        }
    }

    Err(DecodeError::NoMatchingEncoding(tried.join(", ")))
}
