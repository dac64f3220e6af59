//! Database connectivity library.
//!
//! Provides MongoDB connection management with configuration, health checks,
//! and retry support for transient startup failures.
//!
//! # Features
//!
//! - `mongodb` (default): MongoDB connector, config, and health checks
//! - `config`: environment-based configuration via `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
