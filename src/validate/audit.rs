//! Placeholder-rate audit over asset directories.
//!
//! Image files below [`PLACEHOLDER_BYTES`] are assumed to be placeholders. The overall rate
//! decides the status: above [`FAIL_RATE`] fails, above [`WARN_RATE`] warns.

use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Files smaller than this count as placeholders.
pub const PLACEHOLDER_BYTES: u64 = 5 * 1024;
/// Placeholder rate above which the audit warns.
pub const WARN_RATE: f64 = 0.05;
/// Placeholder rate above which the audit fails.
pub const FAIL_RATE: f64 = 0.20;

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Counts for one labelled directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirAudit {
    /// Display label, e.g. `Enemies`.
    pub label: String,
    /// Scanned root.
    pub dir: PathBuf,
    /// Image files found.
    pub total: usize,
    /// Image files below the placeholder threshold.
    pub placeholders: usize,
}

/// Audit verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditStatus {
    /// Placeholder rate at or below [`WARN_RATE`].
    Pass,
    /// Placeholder rate above [`WARN_RATE`].
    Warn,
    /// Placeholder rate above [`FAIL_RATE`].
    Fail,
}

impl AuditStatus {
    /// Classify a placeholder rate.
    pub fn from_rate(rate: f64) -> Self {
        if rate > FAIL_RATE {
            Self::Fail
        } else if rate > WARN_RATE {
            Self::Warn
        } else {
            Self::Pass
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN (>5% placeholders)",
            Self::Fail => "FAIL",
        })
    }
}

/// Aggregate audit over several directories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Per-directory counts in input order.
    pub dirs: Vec<DirAudit>,
}

impl AuditReport {
    /// Image files across all directories.
    pub fn total(&self) -> usize {
        self.dirs.iter().map(|d| d.total).sum()
    }

    /// Placeholders across all directories.
    pub fn placeholders(&self) -> usize {
        self.dirs.iter().map(|d| d.placeholders).sum()
    }

    /// Placeholder fraction; `0` when no images were found.
    pub fn rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.placeholders() as f64 / total as f64,
        }
    }

    /// Verdict for the overall rate.
    pub fn status(&self) -> AuditStatus {
        AuditStatus::from_rate(self.rate())
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .dirs
            .iter()
            .map(|d| d.label.len())
            .max()
            .unwrap_or(0)
            + 2;

        writeln!(f, "Asset Validation Report")?;
        writeln!(f, "========================")?;
        for d in &self.dirs {
            writeln!(
                f,
                "{:<width$}{} images found, {} placeholders (<5KB)",
                format!("{}:", d.label),
                d.total,
                d.placeholders
            )?;
        }
        writeln!(f)?;
        let total = self.total();
        writeln!(
            f,
            "{:<width$}{}/{} real assets ({:.1}% placeholder rate)",
            "Overall:",
            total - self.placeholders(),
            total,
            self.rate() * 100.0
        )?;
        write!(f, "{:<width$}{}", "Status:", self.status())
    }
}

/// Recursively count images under `dir`. A missing directory counts as empty; unreadable entries
/// are skipped.
pub fn scan_dir(label: impl Into<String>, dir: &Path) -> DirAudit {
    let mut out = DirAudit {
        label: label.into(),
        dir: dir.to_path_buf(),
        total: 0,
        placeholders: 0,
    };
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "audit dir missing; counting as empty");
        return out;
    }

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() || !is_image(entry.path()) {
            continue;
        }
        out.total += 1;
        match entry.metadata() {
            Ok(m) if m.len() < PLACEHOLDER_BYTES => out.placeholders += 1,
            Ok(_) => {}
            Err(e) => tracing::warn!(path = %entry.path().display(), error = %e, "cannot stat image"),
        }
    }
    out
}

/// Audit each `(label, dir)` pair.
pub fn audit<'a>(targets: impl IntoIterator<Item = (&'a str, &'a Path)>) -> AuditReport {
    AuditReport {
        dirs: targets
            .into_iter()
            .map(|(label, dir)| scan_dir(label, dir))
            .collect(),
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

#[cfg(test)]
#[path = "../../tests/unit/validate/audit.rs"]
mod tests;
