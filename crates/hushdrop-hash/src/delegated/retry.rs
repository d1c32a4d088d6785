//! Exponential backoff for transient hashing service failures.

use std::time::Duration;

use tracing::warn;

use crate::delegated::config::ValidatedDelegatedHasherConfig;
use crate::delegated::error::HashServiceError;

/// delay = `base_delay` × (`backoff_factor` ^ `attempt`), capped at `max_delay`.
fn calculate_backoff_delay(
    attempt: u32,
    base_delay: Duration,
    max_delay: Duration,
    backoff_factor: u32,
) -> Duration {
    let delay = base_delay
        .checked_mul(backoff_factor.saturating_pow(attempt))
        .unwrap_or(max_delay);

    delay.min(max_delay)
}

/// Retries a request with exponential backoff.
///
/// Only errors for which [`HashServiceError::is_retryable`] holds are retried, at most
/// `max_retry_attempts` times. With the default of zero attempts the first error is returned.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "`attempt` is always less than `max_retry_attempts`, so it can not overflow."
)]
pub async fn retry_with_backoff<F, Fut, T>(
    config: &ValidatedDelegatedHasherConfig,
    mut operation: F,
) -> Result<T, HashServiceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HashServiceError>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(error) if attempt < config.max_retry_attempts && error.is_retryable() => {
                let delay = calculate_backoff_delay(
                    attempt,
                    config.initial_retry_delay,
                    config.max_retry_delay,
                    config.backoff_factor,
                );
                warn!(%error, attempt, ?delay, "Hash service request failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
