//! Shared database utilities.

pub mod retry;

pub use retry::{RetryConfig, retry, retry_with_backoff};
