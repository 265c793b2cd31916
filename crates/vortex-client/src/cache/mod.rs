//! Cache module for the Vortex Config client.
//!
//! This module provides a read-through TTL cache in front of a
//! [`ConfigFetcher`](crate::ConfigFetcher): live entries are served from
//! memory, misses and expired entries trigger a fetch, and callers can
//! force refresh through invalidation.

pub mod cached_client;
pub mod keys;

// Re-exports
pub use cached_client::{CacheConfig, CachedClient, DEFAULT_TTL};
pub use keys::CacheKey;
