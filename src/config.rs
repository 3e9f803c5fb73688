//! Optional JSON config file supplying defaults for the generator.
//!
//! Every field is optional. Values here override built-in defaults; explicit CLI flags override
//! values here.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::encode::codec::{Effort, ImageFormat};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::pipeline::batch::{BatchOpts, FailurePolicy};

/// On-disk generator defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Output directory for artifacts.
    pub out_dir: Option<PathBuf>,
    /// Output container.
    pub format: Option<ImageFormat>,
    /// Compression effort.
    pub effort: Option<Effort>,
    /// Base seed.
    pub seed: Option<u64>,
    /// Creature ids to generate; empty or missing means all.
    pub only: Option<Vec<String>>,
    /// Run creatures in parallel.
    pub parallel: Option<bool>,
    /// Worker count for parallel runs.
    pub threads: Option<usize>,
    /// Per-artifact raster + encode budget in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Continue past failing creatures.
    pub keep_going: Option<bool>,
    /// Exit non-zero when an artifact is below the size budget.
    pub require_budget: Option<bool>,
    /// Scene canvas edge.
    pub canvas_px: Option<u32>,
    /// Supersampled render edge.
    pub supersample_px: Option<u32>,
    /// Final artifact edge.
    pub target_px: Option<u32>,
}

impl ForgeConfig {
    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpriteResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpriteError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| SpriteError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Batch options with these values laid over the defaults.
    pub fn batch_opts(&self) -> BatchOpts {
        let mut opts = BatchOpts::default();
        if let Some(v) = self.format {
            opts.encode.format = v;
        }
        if let Some(v) = self.effort {
            opts.encode.effort = v;
        }
        if let Some(v) = self.canvas_px {
            opts.scene.canvas_px = v;
        }
        if let Some(v) = self.supersample_px {
            opts.raster.supersample_px = v;
        }
        if let Some(v) = self.target_px {
            opts.raster.target_px = v;
        }
        if self.keep_going == Some(true) {
            opts.failure_policy = FailurePolicy::KeepGoing;
        }
        opts.seed = self.seed;
        opts.parallel = self.parallel.unwrap_or(false);
        opts.threads = self.threads;
        opts.timeout = self.timeout_ms.map(Duration::from_millis);
        opts
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
