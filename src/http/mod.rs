mod client;
#[cfg(test)]
pub(crate) mod test_server;

pub use client::{describe_status, is_retryable, retry_decision, RateLimitedClient, RetryDecision};
