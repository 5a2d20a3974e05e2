//! Double-submission guard
//!
//! One guard per form or action. While a submission is in flight any further
//! attempt fails with [`AppError::AlreadySubmitting`]; nothing is queued.
//! The flag clears when the submission finishes, whatever the outcome.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the guard; it is released when the ticket drops
    pub fn try_begin(&self) -> AppResult<SubmitTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::AlreadySubmitting)?;
        Ok(SubmitTicket {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Run `submission` while holding the guard
    pub async fn run<F, T>(&self, submission: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let _ticket = self.try_begin().inspect_err(|_| {
            tracing::debug!("submission rejected, another is in flight");
        })?;
        submission.await
    }
}

/// Held for the duration of one submission
#[derive(Debug)]
pub struct SubmitTicket {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[test]
    fn test_second_claim_rejected_until_release() {
        let guard = SubmitGuard::new();
        let ticket = guard.try_begin().unwrap();
        assert!(guard.is_submitting());
        assert!(matches!(guard.try_begin(), Err(AppError::AlreadySubmitting)));
        drop(ticket);
        assert!(!guard.is_submitting());
        assert!(guard.try_begin().is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_submit_is_rejected() {
        let guard = SubmitGuard::new();
        let (tx, rx) = oneshot::channel::<()>();

        let first = {
            let guard = guard.clone();
            tokio::spawn(async move {
                guard
                    .run(async move {
                        rx.await.ok();
                        Ok::<_, AppError>(1)
                    })
                    .await
            })
        };
        while !guard.is_submitting() {
            tokio::task::yield_now().await;
        }

        let second = guard.run(async { Ok::<_, AppError>(2) }).await;
        assert!(matches!(second, Err(AppError::AlreadySubmitting)));

        tx.send(()).unwrap();
        assert_eq!(first.await.unwrap().unwrap(), 1);
        assert!(!guard.is_submitting());
    }

    #[tokio::test]
    async fn test_released_after_failure() {
        let guard = SubmitGuard::new();
        let failed: AppResult<()> = guard
            .run(async { Err(AppError::Payment("Card declined".into())) })
            .await;
        assert!(failed.is_err());
        assert!(!guard.is_submitting());

        let retried = guard.run(async { Ok::<_, AppError>("ok") }).await.unwrap();
        assert_eq!(retried, "ok");
    }
}
