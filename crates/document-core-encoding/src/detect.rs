//! Automatic encoding detection for freshly read files.
//!
//! Detection order mirrors what text editors conventionally do: trust a BOM
//! when one is present, then accept strictly valid UTF-8, then fall back to a
//! byte-oriented encoding that can absorb arbitrary 8-bit data.

use encoding_rs::Encoding;

use crate::codec::{EncodingError, decode};

/// Byte-oriented encodings tried, in order, when the input is neither
/// BOM-marked nor valid UTF-8. windows-1252 decodes any byte sequence, so it
/// doubles as the catch-all; anything more ambitious (Shift-JIS, KOI8-R)
/// belongs in the interactive picker, not in silent detection.
static FALLBACK_CANDIDATES: [&Encoding; 1] = [&encoding_rs::WINDOWS_1252_INIT];

/// Decode `bytes` with automatic encoding detection.
///
/// Returns the decoded text together with the encoding that produced it.
/// Empty input is an empty UTF-8 document. A BOM-marked stream whose payload
/// is malformed in the BOM's encoding is an error; there is no second guess
/// once a BOM has committed the stream to an encoding.
pub fn decode_auto(bytes: &[u8]) -> Result<(String, &'static Encoding), EncodingError> {
    if bytes.is_empty() {
        return Ok((String::new(), encoding_rs::UTF_8));
    }

    if let Some((encoding, _bom_length)) = Encoding::for_bom(bytes) {
        let text = decode(bytes, encoding)?;
        return Ok((text, encoding));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_owned(), encoding_rs::UTF_8));
    }

    let mut last_error = EncodingError::Malformed {
        encoding: encoding_rs::UTF_8.name(),
    };
    for &candidate in &FALLBACK_CANDIDATES {
        match decode(bytes, candidate) {
            Ok(text) => return Ok((text, candidate)),
            Err(error) => last_error = error,
        }
    }
    Err(last_error)
}
