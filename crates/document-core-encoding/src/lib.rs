#![warn(missing_docs)]
//! `document-core-encoding` - character encoding support for `document-core`.
//!
//! # Overview
//!
//! This crate intentionally stays lightweight: it wraps `encoding_rs` with the
//! small surface the document persistence layer needs and nothing more.
//!
//! - **Identifiers**: an encoding is a `&'static encoding_rs::Encoding`.
//!   Identity comparison works, and `.name()` is the human-readable label.
//! - **Strict transcoding**: [`decode`] and [`encode`] refuse lossy
//!   conversions instead of substituting replacement characters.
//! - **Automatic detection**: [`decode_auto`] resolves an encoding from the
//!   raw bytes of a file (BOM, then UTF-8 validation, then a byte-oriented
//!   fallback).
//! - **Interactive port**: [`EncodingPicker`] abstracts the "ask the user for
//!   an encoding" dialog so the retry loop in `document-core` is ordinary
//!   control flow.
//!
//! # Example
//!
//! ```rust
//! use document_core_encoding::{decode_auto, encode};
//!
//! let (text, encoding) = decode_auto("café".as_bytes()).unwrap();
//! assert_eq!(text, "café");
//! assert_eq!(encoding, encoding_rs::UTF_8);
//!
//! let bytes = encode(&text, encoding_rs::WINDOWS_1252).unwrap();
//! assert_eq!(bytes, b"caf\xe9");
//! ```

mod codec;
mod detect;
mod picker;

pub use codec::{EncodingError, decode, encode};
pub use detect::decode_auto;
pub use picker::{EncodingPicker, picker_choices};

/// The encoding a fresh, never-loaded document starts with.
pub fn default_encoding() -> &'static encoding_rs::Encoding {
    encoding_rs::UTF_8
}
