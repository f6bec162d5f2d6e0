use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::models::CaptureError;
use crate::global_constants::LOG_TAG_PIPELINE;

/// Process-wide single-flight latch for capture attempts.
///
/// Two near-simultaneous hotkey activations must never interleave two screen
/// grabs - the second attempt is rejected immediately, not queued. The claim
/// token releases the latch when dropped, which covers every exit path out
/// of the pipeline: success, error, or panic.
#[derive(Clone)]
pub struct CaptureGuard {
    in_progress: Arc<AtomicBool>,
}

impl CaptureGuard {
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the latch, or fails fast if a capture is already mid-flight.
    pub fn begin_capture(&self) -> Result<CaptureClaim, CaptureError> {
        let was_free = self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if !was_free {
            log::warn!(
                "{} capture already in progress, rejecting new attempt",
                LOG_TAG_PIPELINE
            );
            return Err(CaptureError::CaptureInProgress);
        }

        Ok(CaptureClaim {
            in_progress: Arc::clone(&self.in_progress),
        })
    }

    pub fn is_capture_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}

impl Default for CaptureGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Held for the duration of one capture attempt.
pub struct CaptureClaim {
    in_progress: Arc<AtomicBool>,
}

impl Drop for CaptureClaim {
    fn drop(&mut self) {
        self.in_progress.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_capture_claims_free_guard() {
        let guard = CaptureGuard::new();

        let claim = guard.begin_capture();

        assert!(claim.is_ok());
        assert!(guard.is_capture_in_progress());
    }

    #[test]
    fn test_begin_capture_rejects_while_claim_is_held() {
        let guard = CaptureGuard::new();
        let _claim = guard.begin_capture().unwrap();

        let second_attempt = guard.begin_capture();

        assert!(matches!(
            second_attempt,
            Err(CaptureError::CaptureInProgress)
        ));
    }

    #[test]
    fn test_dropping_claim_frees_guard() {
        let guard = CaptureGuard::new();

        {
            let _claim = guard.begin_capture().unwrap();
            assert!(guard.is_capture_in_progress());
        }

        assert!(!guard.is_capture_in_progress());
        assert!(guard.begin_capture().is_ok());
    }

    #[test]
    fn test_claim_releases_even_when_holder_panics() {
        let guard = CaptureGuard::new();
        let guard_for_panic = guard.clone();

        let panic_result = std::panic::catch_unwind(move || {
            let _claim = guard_for_panic.begin_capture().unwrap();
            panic!("simulated failure mid-capture");
        });

        assert!(panic_result.is_err());
        assert!(!guard.is_capture_in_progress());
    }
}
