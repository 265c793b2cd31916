//! Identity newtypes for the Vortex Config client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application identifier.
///
/// Represents the name of the application whose configuration is being
/// fetched. This is typically the service name and is matched verbatim by
/// the config server.
///
/// # Example
///
/// ```
/// use vortex_client_core::Application;
///
/// let app = Application::new("payment-service");
/// assert_eq!(app.as_str(), "payment-service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Application(String);

impl Application {
    /// Creates a new Application identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the application name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Application {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Application {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Execution profile for configuration selection.
///
/// Profiles select environment-specific configuration. Common profiles:
/// "default", "dev", "staging", "prod". A fetcher that receives an empty
/// profile conventionally substitutes [`Profile::default_profile`].
///
/// # Example
///
/// ```
/// use vortex_client_core::Profile;
///
/// let profile = Profile::new("prod");
/// assert_eq!(profile.as_str(), "prod");
/// assert_eq!(Profile::default_profile().as_str(), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(String);

impl Profile {
    /// Creates a new Profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the profile name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the default profile.
    pub fn default_profile() -> Self {
        Self::new("default")
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Profile {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Profile {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Configuration version or branch label.
///
/// Labels identify specific versions of configuration, typically Git
/// branches or tags on the server side. A fetcher that receives an empty
/// label conventionally substitutes [`Label::master`].
///
/// # Example
///
/// ```
/// use vortex_client_core::Label;
///
/// let label = Label::new("v1.0.0");
/// assert_eq!(label.as_str(), "v1.0.0");
/// assert_eq!(Label::master().as_str(), "master");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Creates a new Label with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the label name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the conventional default label for config servers.
    pub fn master() -> Self {
        Self::new("master")
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}
