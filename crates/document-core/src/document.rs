//! The document model: the long-lived entity behind one open file.
//!
//! # Overview
//!
//! [`TextDocument`] owns the authoritative encoding, the transiently buffered
//! loaded text, and the pending-directive queue. The host framework drives it
//! through the lifecycle hooks (`load`, `write`, `revert`, panel preparation,
//! printing); the user drives it through the two interactive flows
//! ([`TextDocument::reopen_with_encoding`] and
//! [`TextDocument::save_with_encoding_override`]).
//!
//! The one real correctness property lives in [`TextDocument::write`]: an
//! encoding override is applied to the in-memory model *before* the bytes go
//! out, and rolled back if the write fails, so the model never claims an
//! encoding that was not durably written.
//!
//! # Example
//!
//! ```rust
//! use document_core::{Location, MemoryStorage, TextDocument};
//!
//! let mut storage = MemoryStorage::new();
//! let location = Location::transient("greeting");
//! storage.insert(location.clone(), "hello".into());
//!
//! let mut doc = TextDocument::with_storage(Box::new(storage));
//! doc.load(&location).unwrap();
//! assert_eq!(doc.buffered_text(), Some("hello"));
//! assert_eq!(doc.encoding(), encoding_rs::UTF_8);
//! ```

use encoding_rs::Encoding;

use document_core_encoding::{EncodingPicker, decode, decode_auto, default_encoding};

use crate::directive::{Directive, DirectiveQueue};
use crate::error::{DocumentError, LoadFailure};
use crate::line_ending::LineEnding;
use crate::location::Location;
use crate::panel::{AccessoryLabel, SavePanel};
use crate::ports::{ChangeTracker, NullChangeTracker, PresentationSurface, TrackingSuspension};
use crate::print::PrintJob;
use crate::storage::{FsStorage, Storage};

/// Callback invoked after a durably successful write that applied an
/// encoding override.
type EncodingCallback = Box<dyn FnMut(&'static Encoding)>;

/// One open plain-text document.
pub struct TextDocument {
    /// Text decoded during load, not yet pushed to the presentation layer.
    /// Non-empty only between a completed load and the next [`Self::flush`].
    buffered_text: Option<String>,
    /// Encoding of the last successful load or save.
    active_encoding: &'static Encoding,
    /// Newline convention of the file on disk.
    line_ending: LineEnding,
    directives: DirectiveQueue,
    location: Option<Location>,
    display_name: Option<String>,
    surface: Option<Box<dyn PresentationSurface>>,
    tracker: Box<dyn ChangeTracker>,
    storage: Box<dyn Storage>,
    encoding_callbacks: Vec<EncodingCallback>,
}

impl TextDocument {
    /// A blank document backed by the filesystem.
    pub fn new() -> Self {
        Self::with_storage(Box::new(FsStorage::new()))
    }

    /// A blank document over an explicit storage backend.
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        TextDocument {
            buffered_text: None,
            active_encoding: default_encoding(),
            line_ending: LineEnding::default(),
            directives: DirectiveQueue::new(),
            location: None,
            display_name: None,
            surface: None,
            tracker: Box::new(NullChangeTracker),
            storage,
            encoding_callbacks: Vec::new(),
        }
    }

    /// Attach the text view this document presents into.
    pub fn attach_surface(&mut self, surface: Box<dyn PresentationSurface>) {
        self.surface = Some(surface);
    }

    /// Replace the change tracker (undo recording + dirty state owner).
    pub fn set_change_tracker(&mut self, tracker: Box<dyn ChangeTracker>) {
        self.tracker = tracker;
    }

    /// Give the document an explicit display name.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Register a callback fired after a durably successful write that
    /// included an encoding override. The new encoding is passed in.
    pub fn observe_encoding_change<F>(&mut self, callback: F)
    where
        F: FnMut(&'static Encoding) + 'static,
    {
        self.encoding_callbacks.push(Box::new(callback));
    }

    /// The encoding used for the last successful load or save.
    pub fn encoding(&self) -> &'static Encoding {
        self.active_encoding
    }

    /// The newline convention the document will be saved with.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Loaded text awaiting a [`Self::flush`], if any.
    pub fn buffered_text(&self) -> Option<&str> {
        self.buffered_text.as_deref()
    }

    /// Where this document was last loaded from or durably saved to.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The pending-directive queue (read-only).
    pub fn pending_directives(&self) -> &DirectiveQueue {
        &self.directives
    }

    /// Name shown in window titles and print jobs: the explicit name if one
    /// was set, else the file name of the current location, else "Untitled".
    pub fn display_name(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.location.as_ref().and_then(Location::short_name))
            .unwrap_or_else(|| "Untitled".to_string())
    }

    // --- Load pipeline -----------------------------------------------------

    /// Read and decode `location` with automatic encoding detection.
    ///
    /// On success the decoded text (LF-normalized) is buffered for the next
    /// [`Self::flush`], the detected encoding and newline convention are
    /// adopted, and the location is remembered. On failure nothing changes.
    pub fn load(&mut self, location: &Location) -> Result<(), DocumentError> {
        let bytes = self.storage.read(location).map_err(LoadFailure::Io)?;
        let (text, encoding) = decode_auto(&bytes).map_err(LoadFailure::Decode)?;
        tracing::debug!(
            encoding = encoding.name(),
            bytes = bytes.len(),
            "loaded document"
        );
        self.adopt_text(text, encoding);
        self.location = Some(location.clone());
        Ok(())
    }

    /// Push buffered loaded text to the presentation surface.
    ///
    /// The push runs with change tracking suspended: loading is not a user
    /// edit and must not land on the undo stack. Idempotent; with nothing
    /// buffered (or no surface attached yet) this is a no-op.
    pub fn flush(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Some(text) = self.buffered_text.take() {
            let _suspended = TrackingSuspension::new(self.tracker.as_mut());
            surface.set_text(&text);
        }
    }

    /// Reload the document from durable storage, discarding unsaved changes.
    ///
    /// Only meaningful against a durable location; reverting to a transient
    /// target fails with [`DocumentError::RevertNonDurable`] and mutates
    /// nothing.
    pub fn revert(&mut self, location: &Location) -> Result<(), DocumentError> {
        if !location.is_durable() {
            return Err(DocumentError::RevertNonDurable);
        }
        self.load(location)?;
        self.flush();
        self.tracker.mark_clean();
        Ok(())
    }

    /// Re-decode the document's stored location with a user-chosen encoding.
    ///
    /// Presents the picker in a loop: cancellation aborts with no state
    /// change; a chosen encoding that fails to decode the stored bytes (or a
    /// read error) re-presents the picker; the first successful decode is
    /// adopted, flushed, and marks the document clean. The loop terminates
    /// only through cancellation or success. Without a stored location this
    /// is a no-op.
    pub fn reopen_with_encoding(&mut self, picker: &mut dyn EncodingPicker) {
        let Some(location) = self.location.clone() else {
            return;
        };

        loop {
            let Some(encoding) = picker.pick_encoding() else {
                return;
            };

            let bytes = match self.storage.read(&location) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::debug!(%error, "reopen read failed, asking again");
                    continue;
                }
            };
            match decode(&bytes, encoding) {
                Ok(text) => {
                    tracing::debug!(encoding = encoding.name(), "reopened with forced encoding");
                    self.adopt_text(text, encoding);
                    self.flush();
                    self.tracker.mark_clean();
                    return;
                }
                Err(error) => {
                    tracing::debug!(
                        encoding = encoding.name(),
                        %error,
                        "forced encoding does not decode, asking again"
                    );
                }
            }
        }
    }

    fn adopt_text(&mut self, text: String, encoding: &'static Encoding) {
        self.line_ending = LineEnding::detect_in_text(&text);
        self.buffered_text = Some(LineEnding::normalize_to_lf(&text));
        self.active_encoding = encoding;
    }

    // --- Save pipeline -----------------------------------------------------

    /// Serialize the current text in the active encoding, with the on-disk
    /// newline convention restored.
    ///
    /// The text comes from the presentation surface when one is attached;
    /// a headless document serializes its buffered text (or nothing).
    pub fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        let text = self.line_ending.apply_to_text(&self.current_text());
        document_core_encoding::encode(&text, self.active_encoding)
            .map_err(DocumentError::Serialize)
    }

    /// Serialize and persist the document to `location`.
    ///
    /// A pending [`Directive::EncodingOverride`] is consumed first and the
    /// active encoding switched to it before serialization. If serialization
    /// or the storage write fails, the previous encoding is restored before
    /// the failure propagates; the consumed override is *not* re-queued (its
    /// paired accessory message is already gone, so a silent re-application
    /// on a later plain save would have no user-visible cue, and the user
    /// re-issues the override instead). After a durably successful write
    /// that applied an override, the registered encoding observers fire.
    pub fn write(&mut self, location: &Location) -> Result<(), DocumentError> {
        let previous_encoding = self.active_encoding;
        let applied_override = self.directives.take_encoding_override();
        if let Some(encoding) = applied_override {
            self.active_encoding = encoding;
        }

        let outcome = self.serialize().and_then(|bytes| {
            self.storage
                .write(location, &bytes)
                .map_err(DocumentError::Write)
        });

        match outcome {
            Ok(()) => {
                if location.is_durable() {
                    self.location = Some(location.clone());
                }
                if applied_override.is_some() {
                    let new_encoding = self.active_encoding;
                    tracing::debug!(
                        from = previous_encoding.name(),
                        to = new_encoding.name(),
                        "encoding override applied"
                    );
                    for callback in &mut self.encoding_callbacks {
                        callback(new_encoding);
                    }
                }
                Ok(())
            }
            Err(error) => {
                if applied_override.is_some() {
                    tracing::warn!(
                        restored = previous_encoding.name(),
                        "write failed, encoding rolled back"
                    );
                }
                self.active_encoding = previous_encoding;
                Err(error)
            }
        }
    }

    /// Decorate the save dialog before the host presents it.
    ///
    /// Consumes a pending [`Directive::AccessoryMessage`] into a
    /// non-editable, non-selectable label; with no message pending the panel
    /// is left untouched. The host's save flow calls this once, strictly
    /// before [`Self::write`].
    pub fn prepare_save_panel(&mut self, panel: &mut SavePanel) {
        if let Some(message) = self.directives.take_message() {
            panel.set_accessory(AccessoryLabel::informational(message));
        }
    }

    /// Queue an encoding override for the next save and run the host's
    /// "save as" flow.
    ///
    /// Enqueues, in order, an accessory message naming the target encoding
    /// and the override itself, then hands control to `run_save_as`, which
    /// stands in for the host interaction that will eventually call
    /// [`Self::prepare_save_panel`] and [`Self::write`].
    pub fn save_with_encoding_override<F>(
        &mut self,
        encoding: &'static Encoding,
        run_save_as: F,
    ) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut TextDocument) -> Result<(), DocumentError>,
    {
        self.directives.enqueue(Directive::AccessoryMessage(format!(
            "Saving file with new encoding: {}",
            encoding.name()
        )));
        self.directives.enqueue(Directive::EncodingOverride(encoding));
        run_save_as(self)
    }

    /// The "save as with encoding" menu action: ask the user for an encoding
    /// first, then queue the override and run the save flow. Cancelling the
    /// picker aborts before anything is enqueued.
    pub fn save_as_with_encoding<F>(
        &mut self,
        picker: &mut dyn EncodingPicker,
        run_save_as: F,
    ) -> Result<(), DocumentError>
    where
        F: FnOnce(&mut TextDocument) -> Result<(), DocumentError>,
    {
        match picker.pick_encoding() {
            Some(encoding) => self.save_with_encoding_override(encoding, run_save_as),
            None => Ok(()),
        }
    }

    // --- Printing ----------------------------------------------------------

    /// Build a print job over the presented content.
    ///
    /// Fails with [`DocumentError::NoPrintContent`] when no presentation
    /// surface is attached.
    pub fn prepare_print_job(&self) -> Result<PrintJob, DocumentError> {
        let surface = self.surface.as_ref().ok_or(DocumentError::NoPrintContent)?;
        Ok(PrintJob {
            content: surface.text(),
            job_title: self.display_name(),
            vertically_centered: false,
        })
    }

    fn current_text(&self) -> String {
        if let Some(surface) = &self.surface {
            return surface.text();
        }
        self.buffered_text.clone().unwrap_or_default()
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}
