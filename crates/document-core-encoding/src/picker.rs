//! The interactive encoding-picker port.
//!
//! The host application owns the actual dialog; this crate only defines the
//! seam. Returning `Option` keeps cancellation explicit: `None` means the
//! user dismissed the picker, and the caller must abort without touching any
//! document state.

use encoding_rs::Encoding;

/// A source of user-chosen encodings.
///
/// Implementations typically present a modal list; tests use scripted stubs.
/// The document layer calls this repeatedly from its reopen loop, so an
/// implementation must be prepared to be asked again after a failed decode.
pub trait EncodingPicker {
    /// Ask the user to choose an encoding. `None` means cancelled.
    fn pick_encoding(&mut self) -> Option<&'static Encoding>;
}

/// Encodings offered by a picker dialog, in menu order.
static PICKER_CHOICES: [&Encoding; 12] = [
    &encoding_rs::UTF_8_INIT,
    &encoding_rs::UTF_16LE_INIT,
    &encoding_rs::UTF_16BE_INIT,
    &encoding_rs::WINDOWS_1252_INIT,
    &encoding_rs::ISO_8859_2_INIT,
    &encoding_rs::ISO_8859_7_INIT,
    &encoding_rs::ISO_8859_15_INIT,
    &encoding_rs::KOI8_R_INIT,
    &encoding_rs::SHIFT_JIS_INIT,
    &encoding_rs::EUC_JP_INIT,
    &encoding_rs::GBK_INIT,
    &encoding_rs::EUC_KR_INIT,
];

/// The fixed list of encodings an interactive picker should offer.
pub fn picker_choices() -> &'static [&'static Encoding] {
    &PICKER_CHOICES
}
