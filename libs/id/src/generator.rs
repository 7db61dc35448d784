//! Generator bound to one configuration.

use uuid::Uuid;

use crate::{derive_uuid, extract_uuid, format_with_prefix, Fields, IdConfig, IdError};

/// Holds an [`IdConfig`] so repeated derivations don't have to pass it.
///
/// Typically built once at service start and shared (it is `Send + Sync`
/// and holds no mutable state).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UuidGenerator {
    config: IdConfig,
}

impl UuidGenerator {
    /// Creates a generator for the given configuration.
    #[must_use]
    pub fn new(config: IdConfig) -> Self {
        Self { config }
    }

    /// Returns the bound configuration.
    #[must_use]
    pub fn config(&self) -> &IdConfig {
        &self.config
    }

    /// Derives a UUID with the bound configuration.
    pub fn derive(&self, entity_type: &str, fields: &Fields) -> Uuid {
        derive_uuid(entity_type, fields, Some(&self.config))
    }

    /// Derives a UUID and renders it with an optional prefix.
    pub fn format_with_prefix(
        &self,
        entity_type: &str,
        fields: &Fields,
        prefix: Option<&str>,
        separator: &str,
    ) -> String {
        format_with_prefix(entity_type, fields, prefix, separator, Some(&self.config))
    }

    /// Recovers the UUID from a bare or prefixed identifier.
    pub fn extract(&self, text: &str, separator: &str) -> Result<Uuid, IdError> {
        extract_uuid(text, separator)
    }
}

impl From<IdConfig> for UuidGenerator {
    fn from(config: IdConfig) -> Self {
        Self::new(config)
    }
}
