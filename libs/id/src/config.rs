//! Derivation configuration: namespace plus secret salt.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::IdError;

/// Immutable configuration shared by every derivation call.
///
/// The namespace scopes derivation so that unrelated applications never
/// collide; the salt keeps identifiers unpredictable to anyone who knows the
/// entity type and business fields but not the secret.
///
/// The default configuration uses the DNS namespace and an empty salt. An
/// unsalted configuration is legal but produces guessable identifiers;
/// production deployments should generate a salt once with
/// [`generate_salt`](crate::generate_salt) and keep it in a secret store.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIdConfig", into = "RawIdConfig")]
pub struct IdConfig {
    namespace: Uuid,
    salt: String,
}

impl IdConfig {
    /// Creates a configuration from an already-validated namespace.
    #[must_use]
    pub fn new(namespace: Uuid, salt: impl Into<String>) -> Self {
        Self {
            namespace,
            salt: salt.into(),
        }
    }

    /// Creates a configuration from a textual namespace.
    ///
    /// Fails with [`IdError::InvalidNamespace`] if `namespace` is not a UUID.
    pub fn parse(namespace: &str, salt: impl Into<String>) -> Result<Self, IdError> {
        let namespace =
            Uuid::parse_str(namespace).map_err(|e| IdError::InvalidNamespace {
                value: namespace.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(namespace, salt))
    }

    /// Creates a configuration whose namespace is derived from a domain name
    /// under the DNS namespace, e.g. `IdConfig::for_domain("example.com", salt)`.
    #[must_use]
    pub fn for_domain(domain: &str, salt: impl Into<String>) -> Self {
        Self::new(Uuid::new_v5(&Uuid::NAMESPACE_DNS, domain.as_bytes()), salt)
    }

    /// Returns the namespace UUID.
    #[must_use]
    pub const fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Returns the salt.
    #[must_use]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Returns true if a non-empty salt is configured.
    #[must_use]
    pub fn is_salted(&self) -> bool {
        !self.salt.is_empty()
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self::new(Uuid::NAMESPACE_DNS, "")
    }
}

impl fmt::Debug for IdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salt = if self.is_salted() { "[REDACTED]" } else { "" };
        f.debug_struct("IdConfig")
            .field("namespace", &self.namespace)
            .field("salt", &salt)
            .finish()
    }
}

/// Wire form of [`IdConfig`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawIdConfig {
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    salt: String,
}

impl TryFrom<RawIdConfig> for IdConfig {
    type Error = IdError;

    fn try_from(raw: RawIdConfig) -> Result<Self, Self::Error> {
        match raw.namespace {
            Some(namespace) => Self::parse(&namespace, raw.salt),
            None => Ok(Self::new(Uuid::NAMESPACE_DNS, raw.salt)),
        }
    }
}

impl From<IdConfig> for RawIdConfig {
    fn from(config: IdConfig) -> Self {
        Self {
            namespace: Some(config.namespace.to_string()),
            salt: config.salt,
        }
    }
}
