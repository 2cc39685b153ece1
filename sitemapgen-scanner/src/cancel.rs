use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Shared stop flag for a crawl run. Clones observe the same flag; once set
/// it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    stopped: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// Printed by front ends the first time a stop is requested.
    pub const NOTICE: &'static str = "Future crawl processes will be canceled, however all current \
        tasks must finish first before this application could finish.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Returns `true` only for the call that actually flipped
    /// it, so callers can show [`Self::NOTICE`] exactly once.
    pub fn request_stop(&self) -> bool {
        let first = !self.stopped.swap(true, Ordering::SeqCst);
        if first {
            warn!("Stop requested; in-flight fetch will finish, no new fetches will start");
        }
        first
    }

    pub fn should_stop(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_running() {
        assert!(!CancellationFlag::new().should_stop());
    }

    #[test]
    fn test_request_stop_is_idempotent() {
        let flag = CancellationFlag::new();
        assert!(flag.request_stop());
        assert!(!flag.request_stop());
        assert!(flag.should_stop());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = CancellationFlag::new();
        let handle = flag.clone();
        handle.request_stop();
        assert!(flag.should_stop());
    }
}
