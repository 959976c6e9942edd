//! Ports onto the surrounding application.
//!
//! The persistence core never talks to a text view, an undo manager, or a
//! window directly; it sees them through these narrow traits. The host
//! composes concrete adapters; tests plug in recording stubs.

/// The text view (or headless buffer) a document presents into.
pub trait PresentationSurface {
    /// The full text currently shown.
    fn text(&self) -> String;
    /// Replace the full text.
    fn set_text(&mut self, text: &str);
}

/// Change tracking (undo recording + dirty state) owned by the host.
///
/// `suspend_tracking`/`resume_tracking` must be paired; use
/// [`TrackingSuspension`] rather than calling them by hand so the pair
/// survives early returns.
pub trait ChangeTracker {
    /// Stop recording changes (e.g. disable undo registration).
    fn suspend_tracking(&mut self);
    /// Resume recording changes.
    fn resume_tracking(&mut self);
    /// Mark the document as having no unsaved changes.
    fn mark_clean(&mut self);
    /// Mark the document as having unsaved changes.
    fn mark_dirty(&mut self);
}

/// A tracker for headless documents: every operation is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChangeTracker;

impl ChangeTracker for NullChangeTracker {
    fn suspend_tracking(&mut self) {}
    fn resume_tracking(&mut self) {}
    fn mark_clean(&mut self) {}
    fn mark_dirty(&mut self) {}
}

/// Scoped suspension of change tracking.
///
/// Suspends on construction, resumes on drop, so tracking is re-enabled on
/// every exit path including failure.
pub struct TrackingSuspension<'a> {
    tracker: &'a mut dyn ChangeTracker,
}

impl<'a> TrackingSuspension<'a> {
    /// Suspend tracking until the returned guard is dropped.
    pub fn new(tracker: &'a mut dyn ChangeTracker) -> Self {
        tracker.suspend_tracking();
        Self { tracker }
    }
}

impl Drop for TrackingSuspension<'_> {
    fn drop(&mut self) {
        self.tracker.resume_tracking();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTracker {
        events: Vec<&'static str>,
    }

    impl ChangeTracker for RecordingTracker {
        fn suspend_tracking(&mut self) {
            self.events.push("suspend");
        }
        fn resume_tracking(&mut self) {
            self.events.push("resume");
        }
        fn mark_clean(&mut self) {
            self.events.push("clean");
        }
        fn mark_dirty(&mut self) {
            self.events.push("dirty");
        }
    }

    #[test]
    fn test_suspension_resumes_on_drop() {
        let mut tracker = RecordingTracker::default();
        {
            let _guard = TrackingSuspension::new(&mut tracker);
        }
        assert_eq!(tracker.events, ["suspend", "resume"]);
    }

    #[test]
    fn test_suspension_resumes_on_early_exit() {
        fn push_then_bail(tracker: &mut RecordingTracker) -> Result<(), ()> {
            let _guard = TrackingSuspension::new(tracker);
            Err(())
        }

        let mut tracker = RecordingTracker::default();
        assert!(push_then_bail(&mut tracker).is_err());
        assert_eq!(tracker.events, ["suspend", "resume"]);
    }
}
