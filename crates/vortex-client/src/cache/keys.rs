//! Cache key composition.

use std::fmt;

use vortex_client_core::{Application, Label, Profile};

/// Key unica para el cache de configuraciones.
///
/// The key is a structured value over the three identity fields with
/// field-wise equality and hashing: two keys are equal iff all three
/// fields are equal, so distinct triples can never collide the way a
/// delimiter-joined string can. Fields are kept verbatim because upstream
/// identities are case-sensitive.
///
/// # Examples
///
/// ```
/// use vortex_client::CacheKey;
///
/// let key = CacheKey::new("myapp", "dev", "master");
/// assert_eq!(key.application(), "myapp");
/// assert_eq!(key.profile(), "dev");
/// assert_eq!(key.label(), "master");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    application: Application,
    profile: Profile,
    label: Label,
}

impl CacheKey {
    /// Crea una nueva cache key a partir de la tripleta de identidad.
    pub fn new(
        application: impl Into<Application>,
        profile: impl Into<Profile>,
        label: impl Into<Label>,
    ) -> Self {
        Self {
            application: application.into(),
            profile: profile.into(),
            label: label.into(),
        }
    }

    /// Retorna el nombre de la aplicación.
    pub fn application(&self) -> &str {
        self.application.as_str()
    }

    /// Retorna el perfil.
    pub fn profile(&self) -> &str {
        self.profile.as_str()
    }

    /// Retorna el label (branch/tag).
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

impl fmt::Display for CacheKey {
    /// Log-friendly rendering. Plays no part in key identity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.application, self.profile, self.label)
    }
}
