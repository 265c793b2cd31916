//! Configuration fetcher trait definition.

use async_trait::async_trait;

use crate::error::FetchError;
use vortex_client_core::ConfigResponse;

/// A capability that retrieves fresh configuration for an identity.
///
/// This trait abstracts over how configuration is actually obtained (HTTP
/// config server, local files, a test double) so the cache layer can decide
/// *when* to fetch without knowing *how*.
///
/// Implementors own every transport concern: request building,
/// authentication, wire decoding, timeouts. A timeout surfaces as an
/// ordinary [`FetchError`].
///
/// # Example
///
/// ```ignore
/// use vortex_client::{ConfigFetcher, ConfigResponse, FetchError};
///
/// struct MyFetcher;
///
/// #[async_trait]
/// impl ConfigFetcher for MyFetcher {
///     async fn fetch(
///         &self,
///         application: &str,
///         profile: &str,
///         label: &str,
///     ) -> Result<ConfigResponse, FetchError> {
///         // Implementation here
///     }
///
///     fn name(&self) -> &str {
///         "my-fetcher"
///     }
/// }
/// ```
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    /// Fetches configuration for the given identity triple.
    ///
    /// # Arguments
    ///
    /// * `application` - The application name (e.g. "myapp")
    /// * `profile` - The profile (e.g. "dev", "prod")
    /// * `label` - The label (branch/tag, e.g. "master")
    ///
    /// The triple is passed through verbatim; defaults for empty fields
    /// ("default" profile, "master" label) are this trait's implementors'
    /// convention, not the caller's.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] if the identity doesn't exist upstream
    /// - [`FetchError::SourceUnavailable`] if the source is not reachable
    /// - [`FetchError::Timeout`] if the source did not answer in time
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError>;

    /// Returns the name of this fetcher.
    ///
    /// This is used for logging and identification purposes.
    fn name(&self) -> &str;
}
