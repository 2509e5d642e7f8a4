//! Response classification, retry policy, and backoff timing.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::SubmitError;

use super::transport::HttpResponse;

/// Configuration: 3 total attempts, base delay 1s, doubling per attempt.
pub const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY_MS: u64 = 1000;

/// Delay before the attempt after `attempt` (1-indexed): 1s, 2s, 4s, ...
///
/// No jitter, so the schedule is exact.
pub fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    Duration::from_millis(BASE_DELAY_MS << exponent)
}

/// Map a non-success response to its error kind.
///
/// Returns `None` for 2xx.
pub fn classify_response(response: &HttpResponse) -> Option<SubmitError> {
    match response.status {
        401 => Some(SubmitError::Unauthorized),
        429 => Some(SubmitError::RateLimited),
        _ if response.is_success() => None,
        status => Some(SubmitError::Service {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Retry policy table.
///
/// Only rate limiting and transport failures are retried. Other statuses,
/// 5xx included, are terminal.
pub fn is_retryable(error: &SubmitError) -> bool {
    match error {
        SubmitError::RateLimited | SubmitError::Transient(_) => true,
        SubmitError::Unauthorized
        | SubmitError::Service { .. }
        | SubmitError::RetriesExhausted { .. }
        | SubmitError::InvalidResponse(_)
        | SubmitError::Serialization(_) => false,
    }
}

/// Suspension between attempts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
