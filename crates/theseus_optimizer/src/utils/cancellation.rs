use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cooperative stop signal shared between a running search and its host.
///
/// The search polls it before starting each pass, a pass that is already
/// being applied always completes.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag {
    is_cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.is_cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.is_cancelled.store(false, Ordering::Relaxed);
    }
}
