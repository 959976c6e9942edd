//! Print job construction.

/// A print job over a document's presented content.
///
/// The host's print machinery consumes this; the document only decides what
/// goes into it: the surface text, the window title, and the layout flags it
/// cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    /// The text to print.
    pub content: String,
    /// Job title shown in the print queue; the document's display name.
    pub job_title: String,
    /// Whether the content is centered vertically on the page. Documents
    /// always disable this so short files print at the top of the page.
    pub vertically_centered: bool,
}
