//! The save-dialog surface the save pipeline decorates.
//!
//! The host framework owns the actual dialog; it hands the document a
//! [`SavePanel`] before presenting it, and renders whatever accessory label
//! the document attached.

/// A static informational label for a dialog's accessory area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryLabel {
    /// The label text.
    pub text: String,
    /// Whether the user can edit the label. Always `false` for labels the
    /// save pipeline attaches.
    pub editable: bool,
    /// Whether the user can select the label text. Always `false` for labels
    /// the save pipeline attaches.
    pub selectable: bool,
}

impl AccessoryLabel {
    /// A non-editable, non-selectable informational label.
    pub fn informational(text: impl Into<String>) -> Self {
        AccessoryLabel {
            text: text.into(),
            editable: false,
            selectable: false,
        }
    }
}

/// The save dialog as the document sees it.
#[derive(Debug, Default)]
pub struct SavePanel {
    accessory: Option<AccessoryLabel>,
}

impl SavePanel {
    /// A panel with no accessory attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an accessory label, replacing any previous one.
    pub fn set_accessory(&mut self, label: AccessoryLabel) {
        self.accessory = Some(label);
    }

    /// The attached accessory label, if any.
    pub fn accessory(&self) -> Option<&AccessoryLabel> {
        self.accessory.as_ref()
    }
}
