use std::{future::Future, time::Duration};

use scoreboard_domain::config::ResiliencySettings;
use tokio_util::sync::CancellationToken;

use crate::classify::{ErrorClass, classify};

/// Data-driven retry parameters; there are no hidden defaults, so tests
/// can inject a zero-retry policy for deterministic failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(settings: &ResiliencySettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            backoff: Duration::from_millis(settings.backoff_ms),
        }
    }
}

/// How a retried operation ultimately failed. `Store` carries the last
/// error together with its classification so callers can map
/// constraint violations to domain outcomes.
#[derive(Debug)]
pub enum StoreFailure {
    Cancelled,
    Store(sqlx::Error, ErrorClass),
}

/// Runs `operation` until it succeeds, fails non-transiently, or the
/// retry budget is spent. Each attempt is raced against the token, and
/// the inter-attempt sleep is too, so a cancelled caller never pays for
/// another attempt. Nothing is held across the sleep; every attempt
/// acquires its own connection from the pool.
pub async fn with_retry<T, F, Fut>(
    policy: RetryPolicy,
    cancel: &CancellationToken,
    mut operation: F,
) -> Result<T, StoreFailure>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut attempt: u32 = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(StoreFailure::Cancelled);
        }
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return Err(StoreFailure::Cancelled),
            outcome = operation() => outcome,
        };
        match outcome {
            Ok(value) => return Ok(value),
            Err(err) => {
                let class = classify(&err);
                if class != ErrorClass::Transient || attempt >= policy.max_retries {
                    return Err(StoreFailure::Store(err, class));
                }
                attempt += 1;
                log::warn!(
                    "transient store error, retrying (attempt {attempt} of {}): {err}",
                    policy.max_retries
                );
                tokio::select! {
                    _ = cancel.cancelled() => return Err(StoreFailure::Cancelled),
                    _ = tokio::time::sleep(policy.backoff) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use super::*;

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy::new(&ResiliencySettings {
            max_retries,
            backoff_ms: 10,
        })
    }

    fn transient_error() -> sqlx::Error {
        sqlx::Error::PoolTimedOut
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let counter = calls.clone();
        let result = with_retry(policy(3), &cancel, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, sqlx::Error>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_errors_are_retried_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let counter = calls.clone();
        let result = with_retry(policy(3), &cancel, move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(transient_error())
                } else {
                    Ok(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_retry_policy_fails_after_one_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let counter = calls.clone();
        let result: Result<(), _> = with_retry(policy(0), &cancel, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(transient_error())
            }
        })
        .await;
        assert!(matches!(
            result,
            Err(StoreFailure::Store(_, ErrorClass::Transient))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_budget_exhaustion() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let counter = calls.clone();
        let result: Result<(), _> = with_retry(policy(2), &cancel, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(transient_error())
            }
        })
        .await;
        assert!(matches!(
            result,
            Err(StoreFailure::Store(_, ErrorClass::Transient))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_transient_errors_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let counter = calls.clone();
        let result: Result<(), _> = with_retry(policy(5), &cancel, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(sqlx::Error::RowNotFound)
            }
        })
        .await;
        assert!(matches!(
            result,
            Err(StoreFailure::Store(_, ErrorClass::Unrecoverable))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_prevents_any_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let counter = calls.clone();
        let result: Result<(), _> = with_retry(policy(3), &cancel, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .await;
        assert!(matches!(result, Err(StoreFailure::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_during_backoff_stops_retrying() {
        let calls = Arc::new(AtomicU32::new(0));
        let cancel = CancellationToken::new();
        let long_backoff = RetryPolicy {
            max_retries: 5,
            backoff: Duration::from_secs(3600),
        };
        let counter = calls.clone();
        let token = cancel.clone();
        let result: Result<(), _> = with_retry(long_backoff, &cancel, move || {
            let counter = counter.clone();
            let token = token.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                // Caller gives up while the first attempt is failing.
                token.cancel();
                Err(transient_error())
            }
        })
        .await;
        assert!(matches!(result, Err(StoreFailure::Cancelled)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
