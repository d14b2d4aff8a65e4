use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Durable storage for a single serialized snapshot under a fixed key
///
/// Backends move opaque text; parsing, versioning and the fallback to an
/// empty catalog are handled by the store.
pub trait SnapshotBackend {
    /// Stored snapshot text, or `None` if nothing has been written yet
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored snapshot
    fn write(&mut self, contents: &str) -> io::Result<()>;

    /// Set aside a snapshot that could not be hydrated
    fn quarantine(&mut self) {}

    /// Human-readable location for logs and errors
    fn location(&self) -> String;
}

/// JSON snapshot file, replaced atomically on every write
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        if !self.path.exists() {
            debug!("Snapshot file {:?} does not exist", self.path);
            return Ok(None);
        }
        std::fs::read_to_string(&self.path).map(Some)
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, contents)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn quarantine(&mut self) {
        let backup_path = self.backup_path();
        match std::fs::copy(&self.path, &backup_path) {
            Ok(_) => info!("Backed up unreadable snapshot to {:?}", backup_path),
            Err(e) => warn!("Failed to back up unreadable snapshot {:?}: {}", self.path, e),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-process backend. Clones share the same slot, so a second store opened
/// on a clone sees what the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().contents = Some(contents.into());
        backend
    }

    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make subsequent writes fail with an I/O error
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.state.borrow().contents.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "memory backend write disabled"));
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("nested").join("content-store.json"));

        assert_eq!(backend.read().unwrap(), None);
        backend.write("{\"items\":[]}").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("{\"items\":[]}"));
        assert!(!backend.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_backend_quarantine() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("content-store.json"));
        backend.write("not json").unwrap();
        backend.quarantine();

        let backup = std::fs::read_to_string(backend.backup_path()).unwrap();
        assert_eq!(backup, "not json");
    }

    #[test]
    fn test_memory_backend_shared_between_clones() {
        let backend = MemoryBackend::new();
        let mut writer = backend.clone();
        writer.write("snapshot").unwrap();
        assert_eq!(backend.contents().as_deref(), Some("snapshot"));
        assert_eq!(backend.writes(), 1);

        backend.set_fail_writes(true);
        assert!(writer.write("again").is_err());
        assert_eq!(backend.contents().as_deref(), Some("snapshot"));
    }
}
