//! Storage layer
//!
//! Abstracts file access for testability. Provides:
//! - Storage trait: read/write/exists plus bundled resources
//! - FsStorage: real filesystem, resources under a resource root
//! - MemoryStorage: in-process map for unit tests
//!
//! Writes are not atomic: a failed write may leave a partial file behind.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// File and resource access used by load and save
pub trait Storage: Send + Sync {
    /// Read a whole file
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file with `bytes`
    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a bundled resource; `Ok(None)` when it is not packaged
    fn read_resource(&self, id: &str) -> io::Result<Option<Vec<u8>>>;

    /// Copy a bundled resource to `path`
    fn copy_resource_to_path(&self, id: &str, path: &Path) -> io::Result<()> {
        let bytes = self.read_resource(id)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("resource not found: {}", id))
        })?;
        self.write_all(path, &bytes)
    }
}

/// Filesystem storage; resources are files below `resource_root`
#[derive(Debug, Clone)]
pub struct FsStorage {
    resource_root: PathBuf,
}

impl FsStorage {
    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: resource_root.into(),
        }
    }

    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }
}

impl Storage for FsStorage {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_resource(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.resource_root.join(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory storage for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundled resource
    pub fn with_resource(mut self, id: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(id.into(), contents.into());
        self
    }

    /// Add an existing file
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.write_files().insert(path.into(), contents.into());
        self
    }

    /// Current contents of a file as text
    pub fn read_string(&self, path: &Path) -> Option<String> {
        self.read_files()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_files(&self) -> std::sync::RwLockReadGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        self.files.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_files(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        self.files.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.read_files().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.write_files().insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_files().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn read_resource(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.resources.get(id).cloned())
    }
}
