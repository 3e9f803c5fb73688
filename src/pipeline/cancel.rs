use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Cooperative cancellation flag shared across threads.
///
/// Checked between generation stages only; a raster already in flight runs to completion.
/// A [`child`](Self::child) token observes its parent but cancelling it leaves the parent alone.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    flag: AtomicBool,
    parent: Option<CancelToken>,
}

impl CancelToken {
    /// Fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that reports cancelled once either it or `self` is cancelled.
    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(Inner {
                flag: AtomicBool::new(false),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.inner.flag.store(true, Ordering::Release);
    }

    /// Whether this token or any ancestor was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.inner.flag.load(Ordering::Acquire)
            || self.inner.parent.as_ref().is_some_and(Self::is_cancelled)
    }

    /// `Err(Cancelled(stage))` once cancelled.
    pub fn check(&self, stage: &'static str) -> SpriteResult<()> {
        if self.is_cancelled() {
            return Err(SpriteError::Cancelled(stage));
        }
        Ok(())
    }
}
