//! Load, flush, revert, and round-trip behavior on the public API.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use document_core::{
    ChangeTracker, DocumentError, FsStorage, LineEnding, Location, MemoryStorage,
    PresentationSurface, TextDocument,
};

struct SharedSurface(Rc<RefCell<String>>);

impl PresentationSurface for SharedSurface {
    fn text(&self) -> String {
        self.0.borrow().clone()
    }
    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

#[derive(Clone, Default)]
struct SharedTracker(Rc<RefCell<Vec<&'static str>>>);

impl ChangeTracker for SharedTracker {
    fn suspend_tracking(&mut self) {
        self.0.borrow_mut().push("suspend");
    }
    fn resume_tracking(&mut self) {
        self.0.borrow_mut().push("resume");
    }
    fn mark_clean(&mut self) {
        self.0.borrow_mut().push("clean");
    }
    fn mark_dirty(&mut self) {
        self.0.borrow_mut().push("dirty");
    }
}

fn presented_document(
    location: &Location,
    bytes: &[u8],
) -> (TextDocument, Rc<RefCell<String>>, SharedTracker) {
    let mut storage = MemoryStorage::new();
    storage.insert(location.clone(), bytes.to_vec());

    let mut doc = TextDocument::with_storage(Box::new(storage));
    let shown = Rc::new(RefCell::new(String::new()));
    doc.attach_surface(Box::new(SharedSurface(shown.clone())));
    let tracker = SharedTracker::default();
    doc.set_change_tracker(Box::new(tracker.clone()));
    (doc, shown, tracker)
}

#[test]
fn test_load_then_flush_scenario() {
    let location = Location::transient("a");
    let (mut doc, shown, tracker) = presented_document(&location, b"hello");

    doc.load(&location).unwrap();
    assert_eq!(doc.buffered_text(), Some("hello"));
    assert_eq!(doc.encoding(), encoding_rs::UTF_8);

    doc.flush();
    assert_eq!(*shown.borrow(), "hello");
    assert_eq!(doc.buffered_text(), None);

    // Tracking was suspended for the push and resumed afterwards.
    assert_eq!(*tracker.0.borrow(), ["suspend", "resume"]);
}

#[test]
fn test_revert_non_durable_fails_and_mutates_nothing() {
    let location = Location::transient("scratch");
    let (mut doc, shown, _tracker) = presented_document(&location, b"content");
    doc.load(&location).unwrap();
    doc.flush();

    let error = doc.revert(&Location::transient("scratch")).unwrap_err();
    assert!(matches!(error, DocumentError::RevertNonDurable));
    assert_eq!(doc.buffered_text(), None);
    assert_eq!(doc.encoding(), encoding_rs::UTF_8);
    assert_eq!(*shown.borrow(), "content");
}

#[test]
fn test_revert_reloads_and_marks_clean() {
    let location = Location::file("/virtual/notes.txt");
    let (mut doc, shown, tracker) = presented_document(&location, b"original");
    doc.load(&location).unwrap();
    doc.flush();

    // User edits, then discards.
    *shown.borrow_mut() = "edited".to_string();
    doc.revert(&location).unwrap();

    assert_eq!(*shown.borrow(), "original");
    assert_eq!(doc.buffered_text(), None);
    assert!(tracker.0.borrow().contains(&"clean"));
}

#[test]
fn test_round_trip_preserves_text_and_encoding() {
    let cases: [(&'static encoding_rs::Encoding, &str); 4] = [
        (encoding_rs::UTF_8, "héllo wörld"),
        (encoding_rs::UTF_16LE, "unicode: 𝄞 and é"),
        (encoding_rs::UTF_16BE, "unicode: 𝄞 and é"),
        (encoding_rs::WINDOWS_1252, "héllo wörld"),
    ];

    for (encoding, text) in cases {
        let dir = tempfile::tempdir().unwrap();
        let location = Location::file(dir.path().join("roundtrip.txt"));

        let mut doc = TextDocument::new();
        let shown = Rc::new(RefCell::new(text.to_string()));
        doc.attach_surface(Box::new(SharedSurface(shown)));
        doc.save_with_encoding_override(encoding, |doc| doc.write(&location))
            .unwrap();
        assert_eq!(doc.encoding(), encoding, "save adopted {}", encoding.name());

        let mut reloaded = TextDocument::new();
        reloaded.load(&location).unwrap();
        assert_eq!(reloaded.buffered_text(), Some(text));
        assert_eq!(
            reloaded.encoding(),
            encoding,
            "detection recovered {}",
            encoding.name()
        );
    }
}

#[test]
fn test_crlf_file_stays_crlf_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let location = Location::file(dir.path().join("crlf.txt"));
    std::fs::write(dir.path().join("crlf.txt"), b"one\r\ntwo\r\n").unwrap();

    let mut doc = TextDocument::new();
    let shown = Rc::new(RefCell::new(String::new()));
    doc.attach_surface(Box::new(SharedSurface(shown.clone())));
    doc.load(&location).unwrap();
    doc.flush();

    // In memory the text is LF-only.
    assert_eq!(*shown.borrow(), "one\ntwo\n");
    assert_eq!(doc.line_ending(), LineEnding::Crlf);

    // Saving restores the on-disk convention.
    doc.write(&location).unwrap();
    assert_eq!(std::fs::read(dir.path().join("crlf.txt")).unwrap(), b"one\r\ntwo\r\n");
}

#[test]
fn test_fs_storage_load_of_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = TextDocument::with_storage(Box::new(FsStorage::new()));
    let error = doc
        .load(&Location::file(dir.path().join("absent.txt")))
        .unwrap_err();
    assert!(matches!(error, DocumentError::Load(_)));
}
