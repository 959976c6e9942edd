//! Pending directives: single-use instructions queued by a user action and
//! consumed exactly once by the save pipeline.
//!
//! The queue holds at most one directive of each kind, so it is not a list at
//! all: it is one optional slot per kind, giving O(1) typed retrieval with no
//! runtime type inspection. Taking a directive removes it.

use encoding_rs::Encoding;

/// A single-use instruction for the next save interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Informational text to render in the save dialog's accessory area.
    AccessoryMessage(String),
    /// An encoding to adopt for the next successful write.
    EncodingOverride(&'static Encoding),
}

impl Directive {
    /// The kind of this directive.
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::AccessoryMessage(_) => DirectiveKind::AccessoryMessage,
            Directive::EncodingOverride(_) => DirectiveKind::EncodingOverride,
        }
    }
}

/// Discriminant used to address one slot of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Slot for [`Directive::AccessoryMessage`].
    AccessoryMessage,
    /// Slot for [`Directive::EncodingOverride`].
    EncodingOverride,
}

/// Holds at most one pending directive per kind.
#[derive(Debug, Default)]
pub struct DirectiveQueue {
    message: Option<String>,
    encoding_override: Option<&'static Encoding>,
}

impl DirectiveQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a directive, replacing any pending directive of the same kind.
    ///
    /// Normal flows never enqueue into an occupied slot: the only producer
    /// enqueues both kinds together, exactly once, immediately before a save.
    pub fn enqueue(&mut self, directive: Directive) {
        match directive {
            Directive::AccessoryMessage(text) => self.message = Some(text),
            Directive::EncodingOverride(encoding) => self.encoding_override = Some(encoding),
        }
    }

    /// Take and remove the pending directive of `kind`, if any.
    pub fn take_first(&mut self, kind: DirectiveKind) -> Option<Directive> {
        match kind {
            DirectiveKind::AccessoryMessage => {
                self.message.take().map(Directive::AccessoryMessage)
            }
            DirectiveKind::EncodingOverride => self
                .encoding_override
                .take()
                .map(Directive::EncodingOverride),
        }
    }

    /// Take and remove the pending accessory message, if any.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    /// Take and remove the pending encoding override, if any.
    pub fn take_encoding_override(&mut self) -> Option<&'static Encoding> {
        self.encoding_override.take()
    }

    /// The pending accessory message, without removing it.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The pending encoding override, without removing it.
    pub fn encoding_override(&self) -> Option<&'static Encoding> {
        self.encoding_override
    }

    /// `true` when no directive of any kind is pending.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.encoding_override.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_removes_only_the_requested_kind() {
        let mut queue = DirectiveQueue::new();
        queue.enqueue(Directive::AccessoryMessage("note".to_string()));
        queue.enqueue(Directive::EncodingOverride(encoding_rs::WINDOWS_1252));

        let taken = queue.take_first(DirectiveKind::AccessoryMessage);
        assert_eq!(taken, Some(Directive::AccessoryMessage("note".to_string())));

        // Second take of the same kind finds nothing pending.
        assert_eq!(queue.take_first(DirectiveKind::AccessoryMessage), None);

        // The override stays available until taken.
        assert_eq!(queue.encoding_override(), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(
            queue.take_first(DirectiveKind::EncodingOverride),
            Some(Directive::EncodingOverride(encoding_rs::WINDOWS_1252))
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_replaces_same_kind() {
        let mut queue = DirectiveQueue::new();
        queue.enqueue(Directive::EncodingOverride(encoding_rs::UTF_8));
        queue.enqueue(Directive::EncodingOverride(encoding_rs::UTF_16LE));
        assert_eq!(queue.take_encoding_override(), Some(encoding_rs::UTF_16LE));
        assert_eq!(queue.take_encoding_override(), None);
    }

    #[test]
    fn test_kind_accessor() {
        assert_eq!(
            Directive::AccessoryMessage(String::new()).kind(),
            DirectiveKind::AccessoryMessage
        );
        assert_eq!(
            Directive::EncodingOverride(encoding_rs::UTF_8).kind(),
            DirectiveKind::EncodingOverride
        );
    }
}
