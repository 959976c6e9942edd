//! Storage locations a document can be read from or written to.

use std::path::{Path, PathBuf};

/// Where a document's bytes live.
///
/// Only [`Location::File`] is durable: it can be re-read later, which is the
/// precondition for reverting. Transient locations name in-memory targets
/// such as autosave scratch buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A file on disk.
    File(PathBuf),
    /// A named non-durable target (autosave scratch, in-memory buffer).
    Transient(String),
}

impl Location {
    /// Convenience constructor for a file location.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Location::File(path.as_ref().to_path_buf())
    }

    /// Convenience constructor for a transient location.
    pub fn transient(name: impl Into<String>) -> Self {
        Location::Transient(name.into())
    }

    /// `true` when the location can be re-read later.
    pub fn is_durable(&self) -> bool {
        matches!(self, Location::File(_))
    }

    /// A short name suitable for window titles: the file name for files,
    /// the target name for transient locations.
    pub fn short_name(&self) -> Option<String> {
        match self {
            Location::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Location::Transient(name) => Some(name.clone()),
        }
    }
}
