use std::time::Duration;
use tokio::time::sleep;

/// Spaces out requests and backs off between retries
pub struct RateLimiter {
    delay: Duration,
    backoff: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64, backoff_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            backoff: Duration::from_millis(backoff_ms),
            request_count: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.should_wait() {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }

    /// Linear backoff before retry number `attempt` (1-based)
    pub async fn backoff(&self, attempt: u32) {
        sleep(self.backoff_for(attempt)).await;
    }

    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0
    }
}
