//! Page scroll suppression while the menu is open.
//!
//! Suppression is modelled as a scoped resource: [`ScrollGuard::acquire`]
//! suppresses scrolling and dropping the guard releases it, so a controller
//! torn down while open cannot leave the page locked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Something that can stop the page behind an overlay from scrolling.
pub trait ScrollSuppressor: Send + Sync {
    fn suppress(&self);
    fn release(&self);
}

/// In-process stand-in for the document body's overflow style.
///
/// Counts outstanding suppressions; the page is locked while any are held.
#[derive(Debug, Default)]
pub struct BodyScrollLock {
    holders: AtomicUsize,
}

impl BodyScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

impl ScrollSuppressor for BodyScrollLock {
    fn suppress(&self) {
        self.holders.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        // Saturate at zero so an unbalanced release cannot underflow
        let _ = self
            .holders
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

/// Held while scrolling is suppressed.
pub struct ScrollGuard {
    suppressor: Arc<dyn ScrollSuppressor>,
}

impl ScrollGuard {
    pub fn acquire(suppressor: Arc<dyn ScrollSuppressor>) -> Self {
        suppressor.suppress();
        tracing::trace!("Page scroll suppressed");
        Self { suppressor }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.suppressor.release();
        tracing::trace!("Page scroll released");
    }
}

impl std::fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollGuard").finish_non_exhaustive()
    }
}
