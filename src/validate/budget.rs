use std::fmt;
use std::path::Path;

use crate::foundation::error::{SpriteError, SpriteResult};

/// Minimum artifact size, in bytes, for a sprite to count as detailed enough.
pub const MIN_ARTIFACT_BYTES: u64 = 20 * 1024;

/// `true` when `size_bytes` is strictly above [`MIN_ARTIFACT_BYTES`].
pub fn passes(size_bytes: u64) -> bool {
    size_bytes > MIN_ARTIFACT_BYTES
}

/// Read an artifact's size from disk.
pub fn inspect(path: &Path) -> SpriteResult<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| SpriteError::io(path, e))
}

/// Outcome of the size gate for one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetCheck {
    /// Artifact file name, e.g. `cultist.webp`.
    pub file_name: String,
    /// Observed size.
    pub size_bytes: u64,
    /// Whether the size gate passed.
    pub passed: bool,
}

impl BudgetCheck {
    /// Evaluate the gate for an already-known size.
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            passed: passes(size_bytes),
        }
    }

    /// Evaluate the gate for a file on disk.
    pub fn from_file(path: &Path) -> SpriteResult<Self> {
        let size = inspect(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, size))
    }
}

/// `cultist.webp: 34.2KB ✓` or `cultist.webp: 12.0KB ✗ (below 20KB)`.
impl fmt::Display for BudgetCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kb = self.size_bytes as f64 / 1024.0;
        let status = if self.passed { "✓" } else { "✗ (below 20KB)" };
        write!(f, "{}: {kb:.1}KB {status}", self.file_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/validate/budget.rs"]
mod tests;
