use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Where a persisted artifact ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactInfo {
    /// Final location (a filesystem path for [`FileSink`], the bare file name in memory).
    pub location: PathBuf,
    /// Size read back after persisting.
    pub size_bytes: u64,
}

/// Destination for encoded artifacts.
///
/// Sinks are shared across worker threads when batches run in parallel; each call persists one
/// complete artifact and overwrites any previous artifact of the same name.
pub trait ArtifactSink: Send + Sync {
    /// Store `bytes` under `file_name` and report the stored size.
    fn persist(&self, file_name: &str, bytes: &[u8]) -> SpriteResult<ArtifactInfo>;
}

/// Writes artifacts into a directory via temp file + rename, so readers never observe a
/// partially written image.
#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Sink over an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink over `dir`, creating it (and parents) if missing.
    pub fn create(dir: impl Into<PathBuf>) -> SpriteResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| SpriteError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FileSink {
    fn persist(&self, file_name: &str, bytes: &[u8]) -> SpriteResult<ArtifactInfo> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(SpriteError::validation(format!(
                "artifact name '{file_name}' must be a bare file name"
            )));
        }
        let path = self.dir.join(file_name);
        let tmp = self
            .dir
            .join(format!(".{file_name}.{}.tmp", std::process::id()));

        std::fs::write(&tmp, bytes).map_err(|e| SpriteError::io(&tmp, e))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(SpriteError::io(&path, e));
        }

        let size_bytes = std::fs::metadata(&path)
            .map_err(|e| SpriteError::io(&path, e))?
            .len();
        tracing::debug!(path = %path.display(), size_bytes, "persisted artifact");
        Ok(ArtifactInfo {
            location: path,
            size_bytes,
        })
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemorySink {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the bytes stored under `file_name`.
    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.lock().get(file_name).cloned()
    }

    /// Stored file names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArtifactSink for InMemorySink {
    fn persist(&self, file_name: &str, bytes: &[u8]) -> SpriteResult<ArtifactInfo> {
        self.lock().insert(file_name.to_owned(), bytes.to_vec());
        Ok(ArtifactInfo {
            location: PathBuf::from(file_name),
            size_bytes: bytes.len() as u64,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
