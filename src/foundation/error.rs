use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Errors surfaced by the sprite pipeline.
///
/// Geometry degeneracy never appears here: primitives degrade to empty or degenerate output
/// instead of failing. Budget shortfalls are not errors either; they are reported through
/// [`crate::GenerationResult::passed_size_gate`].
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Invalid options or catalog content.
    #[error("validation error: {0}")]
    Validation(String),

    /// The scene document could not be rasterized or the raster could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Artifact could not be written or read back.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Raster/encode exceeded the per-artifact wall-clock budget.
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The batch was cancelled before this stage ran.
    #[error("cancelled before {0}")]
    Cancelled(&'static str),

    /// Failure attributed to a single creature.
    #[error("creature '{id}': {source}")]
    Creature {
        /// Creature id from the catalog.
        id: String,
        /// Underlying failure.
        #[source]
        source: Box<SpriteError>,
    },

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse failure taxonomy used by batch reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Bad options or catalog content.
    Invalid,
    /// Rasterization or encoding failed.
    Encoding,
    /// Filesystem failure.
    Io,
    /// Per-artifact timeout elapsed.
    Timeout,
    /// Batch cancelled.
    Cancelled,
    /// Unclassified.
    Other,
}

impl FailureKind {
    /// Short stable label used in report output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Encoding => "encoding",
            Self::Io => "io",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::Other => "other",
        }
    }
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`SpriteError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attribute this error to a creature. Already-attributed errors are returned unchanged.
    pub fn for_creature(self, id: &str) -> Self {
        match self {
            e @ Self::Creature { .. } => e,
            other => Self::Creature {
                id: id.to_owned(),
                source: Box::new(other),
            },
        }
    }

    /// Classify into a [`FailureKind`], looking through creature attribution.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Invalid,
            Self::Encoding(_) => FailureKind::Encoding,
            Self::Io { .. } => FailureKind::Io,
            Self::Timeout(_) => FailureKind::Timeout,
            Self::Cancelled(_) => FailureKind::Cancelled,
            Self::Creature { source, .. } => source.kind(),
            Self::Other(_) => FailureKind::Other,
        }
    }
}
