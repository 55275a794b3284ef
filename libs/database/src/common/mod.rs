//! Common utilities shared across database code

pub mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
