//! Line ending helpers.
//!
//! Document text is held internally with LF (`'\n'`) newlines. The newline
//! convention of the file on disk is detected on load and restored on save,
//! so a CRLF file stays a CRLF file across an edit session.

/// The newline sequence a document uses on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
    /// Classic Mac CR (`'\r'`).
    Cr,
}

impl LineEnding {
    /// Detect the dominant line ending of a source text.
    ///
    /// Policy: any CRLF makes the text CRLF; otherwise any lone CR makes it
    /// CR; otherwise LF.
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else if text.contains('\r') {
            Self::Cr
        } else {
            Self::Lf
        }
    }

    /// Normalize `text` to LF-only newlines.
    pub fn normalize_to_lf(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
            Self::Cr => text.replace('\n', "\r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("a\rb"), LineEnding::Cr);
        assert_eq!(LineEnding::detect_in_text("mixed\r\nand\rcr"), LineEnding::Crlf);
    }

    #[test]
    fn test_normalize_and_restore_round_trip() {
        let original = "one\r\ntwo\r\n";
        let ending = LineEnding::detect_in_text(original);
        let normalized = LineEnding::normalize_to_lf(original);
        assert_eq!(normalized, "one\ntwo\n");
        assert_eq!(ending.apply_to_text(&normalized), original);
    }

    #[test]
    fn test_cr_round_trip() {
        let original = "one\rtwo";
        let ending = LineEnding::detect_in_text(original);
        assert_eq!(
            ending.apply_to_text(&LineEnding::normalize_to_lf(original)),
            original
        );
    }
}
