//! Name-based UUID derivation.

use uuid::Uuid;

use crate::{Fields, IdConfig, FIELD_DELIMITER};

/// Builds the name string hashed under the configured namespace:
/// `entity_type`, then `salt:<salt>` when a salt is set, then the normalized
/// fields when non-empty, joined with [`FIELD_DELIMITER`].
pub(crate) fn derivation_name(entity_type: &str, fields: &Fields, config: &IdConfig) -> String {
    let mut parts = vec![entity_type.to_string()];

    if config.is_salted() {
        parts.push(format!("salt:{}", config.salt()));
    }

    let normalized = fields.normalize();
    if !normalized.is_empty() {
        parts.push(normalized);
    }

    parts.join(FIELD_DELIMITER)
}

/// Derives a deterministic UUID (version 5) for an entity.
///
/// The same entity type, fields, and configuration always yield the same
/// UUID. When `config` is `None` the default configuration (DNS namespace,
/// no salt) is used; production callers should always pass a salted one.
///
/// ```
/// use detid::{derive_uuid, Fields, IdConfig};
///
/// let config = IdConfig::for_domain("example.com", "per-deployment-secret");
/// let fields = Fields::new().named("region", "EUR").named("number", 12345);
///
/// let first = derive_uuid("invoice", &fields, Some(&config));
/// let again = derive_uuid("invoice", &fields, Some(&config));
/// assert_eq!(first, again);
/// ```
pub fn derive_uuid(entity_type: &str, fields: &Fields, config: Option<&IdConfig>) -> Uuid {
    let default_config;
    let config = match config {
        Some(config) => config,
        None => {
            default_config = IdConfig::default();
            &default_config
        }
    };

    let name = derivation_name(entity_type, fields, config);
    let uuid = Uuid::new_v5(&config.namespace(), name.as_bytes());

    tracing::trace!(
        entity_type,
        salted = config.is_salted(),
        has_fields = !fields.is_empty(),
        %uuid,
        "derived uuid"
    );

    uuid
}
