//! Auto-dismissing toast notifications.
//!
//! A [`ToastNotifier`] owns one toast slot. Showing a toast schedules a
//! dismissal task on the Tokio runtime; showing another toast, clearing, or
//! cancelling aborts the pending dismissal so an old timer can never hide a
//! newer toast.

use crate::models::{Toast, ToastKind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct Slot {
    toast: Toast,
    /// Bumped on every show/clear; a dismissal only applies to its own generation.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A toast slot with a fixed visibility window.
///
/// Clones share the same slot.
#[derive(Clone)]
pub struct ToastNotifier {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
}

impl ToastNotifier {
    /// Create a notifier whose toasts stay visible for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            duration,
        }
    }

    /// Show a toast and restart the dismissal window.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime, which runs the dismissal task.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let mut slot = lock(&self.slot);
        slot.cancel_pending();
        slot.generation += 1;
        slot.toast = Toast::shown(kind, message);

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let duration = self.duration;

        slot.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;

            let mut slot = lock(&shared);
            if slot.generation == generation {
                slot.toast.visible = false;
                slot.pending = None;
                tracing::debug!("Toast dismissed");
            }
        }));

        tracing::debug!(?kind, "Toast shown");
    }

    /// Hide and empty the toast immediately.
    pub fn clear(&self) {
        let mut slot = lock(&self.slot);
        slot.cancel_pending();
        slot.generation += 1;
        slot.toast = Toast::hidden();
    }

    /// Abort any pending dismissal, leaving the toast as it is.
    pub fn cancel(&self) {
        let mut slot = lock(&self.slot);
        slot.cancel_pending();
        slot.generation += 1;
    }

    /// Snapshot of the current toast.
    pub fn current(&self) -> Toast {
        lock(&self.slot).toast.clone()
    }

    /// Whether a dismissal is scheduled.
    pub fn has_pending_dismissal(&self) -> bool {
        lock(&self.slot).pending.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl std::fmt::Debug for ToastNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastNotifier")
            .field("duration", &self.duration)
            .field("toast", &self.current())
            .finish()
    }
}
