//! Generation counter guarding views against stale fetch results.
//!
//! In-flight requests have no cancel path: when the user navigates away the
//! response simply arrives late. A view takes a [`FetchGuard`] before
//! starting a request and bumps the counter on teardown; a completed fetch
//! is applied only while its guard is still current.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared generation counter for one view slot.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    generation: Arc<AtomicU64>,
}

impl GenerationCounter {
    /// Create a counter at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current generation for a fetch about to start.
    #[must_use]
    pub fn guard(&self) -> FetchGuard {
        FetchGuard {
            generation: Arc::clone(&self.generation),
            captured: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate all outstanding guards (view torn down or superseded).
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// The generation a fetch was started under.
#[derive(Debug, Clone)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
    captured: u64,
}

impl FetchGuard {
    /// Whether the result of this fetch should still be applied.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.captured
    }
}
