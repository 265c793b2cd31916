//! Vortex Client Core - Domain types for the Vortex Config client
//!
//! This crate provides the identity newtypes and the configuration
//! artifact model shared by the client crates.

pub mod error;
pub mod response;
pub mod types;

// Re-exports
pub use error::{ConfigError, Result};
pub use response::{ConfigResponse, PropertySource};
pub use types::{Application, Label, Profile};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
