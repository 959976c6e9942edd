#![warn(missing_docs)]
//! Document persistence kernel for a plain-text editor.
//!
//! # Overview
//!
//! `document-core` is the persistence side of an editing application: it
//! loads a file into memory while detecting its character encoding, writes it
//! back out, and lets the user force a different encoding for either
//! direction. Everything visual (window chrome, text rendering, undo
//! mechanics, dialogs) stays on the host's side of a handful of narrow
//! ports.
//!
//! The interesting part is the negotiation between the host's generic
//! save/load lifecycle and the user-driven encoding override: a "save with
//! new encoding" action queues two single-use directives (a message for the
//! save dialog, a pending encoding swap) that the save pipeline consumes
//! exactly once, and a failed write rolls the encoding back so the in-memory
//! model never claims an encoding that was not durably written.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  TextDocument (model + lifecycle hooks)      │  ← host framework drives
//! ├───────────────┬──────────────┬───────────────┤
//! │ DirectiveQueue│ Load/Save    │ PrintJob /    │
//! │ (one slot per │ pipelines    │ SavePanel     │
//! │  kind)        │              │               │
//! ├───────────────┴──────────────┴───────────────┤
//! │  Ports: Storage · PresentationSurface ·      │
//! │         ChangeTracker · EncodingPicker       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Encoding identification, detection, and strict transcoding live in the
//! companion crate [`document_core_encoding`].
//!
//! # Module Description
//!
//! - [`document`] - the [`TextDocument`] model and its lifecycle operations
//! - [`directive`] - single-use directives and the per-kind pending queue
//! - [`storage`] - the [`Storage`] port, filesystem and in-memory backends
//! - [`location`] - durable vs transient storage locations
//! - [`ports`] - presentation surface and change-tracking seams
//! - [`panel`] - the save-dialog accessory surface
//! - [`line_ending`] - newline convention detection and restoration
//! - [`print`] - print job construction
//! - [`error`] - the failure taxonomy

pub mod directive;
pub mod document;
pub mod error;
pub mod line_ending;
pub mod location;
pub mod panel;
pub mod ports;
pub mod print;
pub mod storage;

pub use directive::{Directive, DirectiveKind, DirectiveQueue};
pub use document::TextDocument;
pub use error::{DocumentError, LoadFailure};
pub use line_ending::LineEnding;
pub use location::Location;
pub use panel::{AccessoryLabel, SavePanel};
pub use ports::{ChangeTracker, NullChangeTracker, PresentationSurface, TrackingSuspension};
pub use print::PrintJob;
pub use storage::{FsStorage, MemoryStorage, Storage, StorageConfig};

pub use document_core_encoding::{
    EncodingError, EncodingPicker, decode, decode_auto, default_encoding, encode, picker_choices,
};
