//! Options shared by all traversal engines

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{GrafError, Result};

/// Cooperative cancellation flag checked once per traversal step.
///
/// Clones share the same flag, so a signal handler can hold one clone
/// while a traversal polls another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns whether it was already requested.
    pub fn cancel(&self) -> bool {
        self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the token can be reused
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Fail with [`GrafError::Interrupted`] if cancellation was requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            tracing::info!("traversal interrupted");
            return Err(GrafError::Interrupted);
        }
        Ok(())
    }
}

/// Per-call traversal options
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Record a step log (BFS/DFS) of the run
    pub verbose: bool,
    /// Optional cancellation flag
    pub cancel: Option<CancelToken>,
}

impl SearchOptions {
    pub fn verbose(verbose: bool) -> Self {
        Self {
            verbose,
            ..Default::default()
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(token) => token.check(),
            None => Ok(()),
        }
    }
}
