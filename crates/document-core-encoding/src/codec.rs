//! Strict transcoding between Rust strings and encoded byte streams.
//!
//! "Strict" means lossless: a byte stream that is not well-formed in the
//! requested encoding fails to decode, and a string containing characters
//! outside the target repertoire fails to encode. Nothing here ever inserts
//! U+FFFD or numeric character references behind the caller's back.

use encoding_rs::Encoding;
use thiserror::Error;

/// Errors produced by strict transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("byte stream is not well-formed {encoding}")]
    /// The input bytes cannot be decoded under the named encoding.
    Malformed {
        /// Label of the encoding that rejected the bytes.
        encoding: &'static str,
    },

    #[error("text contains characters not representable in {encoding}")]
    /// The text contains at least one character outside the target
    /// encoding's repertoire.
    Unmappable {
        /// Label of the encoding that cannot represent the text.
        encoding: &'static str,
    },
}

/// Decode `bytes` as `encoding`, strictly.
///
/// A BOM belonging to `encoding` itself is stripped; a BOM of a *different*
/// encoding is treated as ordinary content and will usually fail validation,
/// which is what a user forcing an explicit encoding wants to see.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String, EncodingError> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(EncodingError::Malformed {
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

/// Encode `text` as `encoding`, strictly.
///
/// UTF-16LE and UTF-16BE are assembled by hand, BOM included, because
/// `encoding_rs` only emits ASCII-compatible output encodings. Every other
/// encoding goes through `encoding_rs`, and any unmappable character turns
/// into [`EncodingError::Unmappable`] instead of a silent substitution.
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, EncodingError> {
    if encoding == encoding_rs::UTF_16LE {
        return Ok(encode_utf16(text, u16::to_le_bytes, [0xFF, 0xFE]));
    }
    if encoding == encoding_rs::UTF_16BE {
        return Ok(encode_utf16(text, u16::to_be_bytes, [0xFE, 0xFF]));
    }

    let (bytes, used, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(EncodingError::Unmappable {
            encoding: used.name(),
        });
    }
    Ok(bytes.into_owned())
}

/// Serialize UTF-16 code units with the given byte order, BOM first.
fn encode_utf16(text: &str, to_bytes: fn(u16) -> [u8; 2], bom: [u8; 2]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    out.extend_from_slice(&bom);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&to_bytes(unit));
    }
    out
}
