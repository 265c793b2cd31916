//! Vortex Client - TTL-cached configuration client
//!
//! This crate provides the [`ConfigFetcher`] capability trait and
//! [`CachedClient`], a read-through TTL cache that sits in front of any
//! fetcher implementation. Transport, wire decoding, and authentication
//! belong to the fetcher; this crate only decides when to call it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use vortex_client::{CacheConfig, CachedClient, ConfigFetcher, ConfigResponse, FetchError};
//!
//! struct MyFetcher;
//!
//! #[async_trait]
//! impl ConfigFetcher for MyFetcher {
//!     async fn fetch(
//!         &self,
//!         application: &str,
//!         profile: &str,
//!         _label: &str,
//!     ) -> Result<ConfigResponse, FetchError> {
//!         Ok(ConfigResponse::empty(application, vec![profile.to_string()]))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "my-fetcher"
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), FetchError> {
//! let client = CachedClient::new(Arc::new(MyFetcher), CacheConfig::default());
//!
//! // Primera llamada: fetch. Segunda: cache hit.
//! let config = client.get_config("myapp", "dev", "master").await?;
//! let again = client.get_config("myapp", "dev", "master").await?;
//! assert_eq!(config.name, again.name);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod metrics;

// Re-exports
pub use cache::{CacheConfig, CacheKey, CachedClient, DEFAULT_TTL};
pub use error::FetchError;
pub use fetcher::ConfigFetcher;
pub use metrics::{CacheMetrics, register_cache_metrics};

// Domain model from the core crate
pub use vortex_client_core::{Application, ConfigResponse, Label, Profile, PropertySource};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
