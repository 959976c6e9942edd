//! Storage backends behind the load and save pipelines.
//!
//! The document model reads and writes whole byte buffers through the
//! [`Storage`] port. [`FsStorage`] is the production backend: real files get
//! atomic temp-file-then-rename writes, while transient locations live in an
//! in-memory table (they are autosave scratch targets, not durable storage).
//! [`MemoryStorage`] backs headless documents and tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::location::Location;

/// Whole-buffer read/write access to document locations.
pub trait Storage {
    /// Read all bytes stored at `location`.
    fn read(&self, location: &Location) -> io::Result<Vec<u8>>;
    /// Replace the bytes stored at `location`.
    fn write(&mut self, location: &Location, bytes: &[u8]) -> io::Result<()>;
}

/// Configuration for [`FsStorage`].
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Write through a temp file and rename into place.
    pub atomic_writes: bool,
    /// Suffix appended to the target file name for the temp file.
    pub temp_suffix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            atomic_writes: true,
            temp_suffix: ".tmp".to_string(),
        }
    }
}

/// Filesystem-backed storage.
#[derive(Debug, Default)]
pub struct FsStorage {
    config: StorageConfig,
    transient: HashMap<String, Vec<u8>>,
}

impl FsStorage {
    /// Create a storage backend with default configuration.
    pub fn new() -> Self {
        Self::with_config(StorageConfig::default())
    }

    /// Create a storage backend with explicit configuration.
    pub fn with_config(config: StorageConfig) -> Self {
        FsStorage {
            config,
            transient: HashMap::new(),
        }
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if !self.config.atomic_writes {
            return fs::write(path, bytes);
        }

        let temp_path = temp_path_for(path, &self.config.temp_suffix);
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path).inspect_err(|_| {
            // The target was never touched; just drop the temp file.
            let _ = fs::remove_file(&temp_path);
        })
    }
}

impl Storage for FsStorage {
    fn read(&self, location: &Location) -> io::Result<Vec<u8>> {
        match location {
            Location::File(path) => fs::read(path),
            Location::Transient(name) => self.transient.get(name).cloned().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no transient target named {name:?}"),
                )
            }),
        }
    }

    fn write(&mut self, location: &Location, bytes: &[u8]) -> io::Result<()> {
        match location {
            Location::File(path) => {
                self.write_file(path, bytes)?;
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
                Ok(())
            }
            Location::Transient(name) => {
                self.transient.insert(name.clone(), bytes.to_vec());
                Ok(())
            }
        }
    }
}

fn temp_path_for(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Purely in-memory storage, treating every location as a table key.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<Location, Vec<u8>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a location, as if it had been written earlier.
    pub fn insert(&mut self, location: Location, bytes: Vec<u8>) {
        self.entries.insert(location, bytes);
    }

    /// The bytes currently stored at `location`, if any.
    pub fn get(&self, location: &Location) -> Option<&[u8]> {
        self.entries.get(location).map(Vec::as_slice)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, location: &Location) -> io::Result<Vec<u8>> {
        self.entries.get(location).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("nothing stored at {location:?}"))
        })
    }

    fn write(&mut self, location: &Location, bytes: &[u8]) -> io::Result<()> {
        self.entries.insert(location.clone(), bytes.to_vec());
        Ok(())
    }
}
