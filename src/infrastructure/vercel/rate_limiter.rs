//! Request pacing

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::errors::VercelError;

/// Token bucket rate limiter for outbound API requests
///
/// One token is released per `interval` and the bucket holds a single token,
/// so requests are spaced at least `interval` apart no matter how many tasks
/// share the limiter. Backed by governor's lock-free GCRA state.
pub struct TokenBucketRateLimiter {
    limiter: DefaultDirectRateLimiter,
    interval: Duration,
}

impl TokenBucketRateLimiter {
    /// Create a limiter releasing one token per `interval`
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use vercel_provider::infrastructure::vercel::TokenBucketRateLimiter;
    ///
    /// let rate_limiter = TokenBucketRateLimiter::new(Duration::from_millis(800)).unwrap();
    /// assert_eq!(rate_limiter.interval(), Duration::from_millis(800));
    /// ```
    pub fn new(interval: Duration) -> Result<Self, VercelError> {
        let quota = Quota::with_period(interval)
            .ok_or_else(|| {
                VercelError::InvalidConfig("rate limit interval must be non-zero".to_string())
            })?
            .allow_burst(NonZeroU32::MIN);

        Ok(Self {
            limiter: RateLimiter::direct(quota),
            interval,
        })
    }

    /// Interval between admitted requests
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Acquire a token, waiting until one is available
    ///
    /// Returns `VercelError::Cancelled` if `cancel` fires first. A token that
    /// is already cancelled never consumes from the bucket.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<(), VercelError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(VercelError::Cancelled),
            _ = self.limiter.until_ready() => Ok(()),
        }
    }

    /// Take a token only if one is available right now
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}
