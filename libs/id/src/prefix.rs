//! Human-readable prefixes around derived UUIDs.
//!
//! A prefix is cosmetic: it never feeds into the hash, so `INV-<uuid>` and
//! `EUR-2024-<uuid>` carry the same UUID for the same business data.

use uuid::Uuid;

use crate::{derive_uuid, Fields, IdConfig, IdError};

/// Default separator between prefix and UUID.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Joins a prefix and a UUID; an absent or empty prefix yields the bare UUID.
pub(crate) fn join_prefix(uuid: Uuid, prefix: Option<&str>, separator: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}{}{}", prefix, separator, uuid),
        _ => uuid.to_string(),
    }
}

/// Derives a UUID and renders it as `{prefix}{separator}{uuid}`.
///
/// Without a prefix the hyphenated UUID text is returned on its own.
///
/// ```
/// use detid::{format_with_prefix, Fields, DEFAULT_SEPARATOR};
///
/// let fields = Fields::new().named("key", "value");
/// let id = format_with_prefix("test", &fields, Some("TST"), DEFAULT_SEPARATOR, None);
/// assert!(id.starts_with("TST-"));
/// ```
pub fn format_with_prefix(
    entity_type: &str,
    fields: &Fields,
    prefix: Option<&str>,
    separator: &str,
    config: Option<&IdConfig>,
) -> String {
    join_prefix(derive_uuid(entity_type, fields, config), prefix, separator)
}

/// Recovers the UUID from a bare or prefixed identifier.
///
/// The input is cut at every occurrence of `separator`; the longest suffix
/// that parses as a UUID wins, starting with the whole input. Scanning whole
/// suffixes rather than single tokens lets the default `-` separator coexist
/// with the hyphens inside UUID text.
pub fn extract_uuid(text: &str, separator: &str) -> Result<Uuid, IdError> {
    if separator.is_empty() {
        return Err(IdError::EmptySeparator);
    }

    let suffixes = std::iter::once(text).chain(
        text.match_indices(separator)
            .filter_map(|(idx, sep)| text.get(idx + sep.len()..)),
    );

    for candidate in suffixes {
        if let Ok(uuid) = Uuid::parse_str(candidate) {
            return Ok(uuid);
        }
    }

    tracing::trace!(separator, "no uuid suffix found");
    Err(IdError::NoUuidFound {
        input: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Uuid {
        derive_uuid("test", &Fields::new().named("key", "value"), None)
    }

    #[test]
    fn test_no_prefix_is_bare_uuid() {
        let fields = Fields::new().named("key", "value");
        let id = format_with_prefix("test", &fields, None, DEFAULT_SEPARATOR, None);
        assert_eq!(id, sample().to_string());
        assert!(!id.starts_with("test"));
    }

    #[test]
    fn test_empty_prefix_is_bare_uuid() {
        let fields = Fields::new().named("key", "value");
        let id = format_with_prefix("test", &fields, Some(""), DEFAULT_SEPARATOR, None);
        assert_eq!(id, sample().to_string());
    }

    #[test]
    fn test_prefix_and_roundtrip() {
        let fields = Fields::new().named("key", "value");
        let id = format_with_prefix("test", &fields, Some("TST"), DEFAULT_SEPARATOR, None);
        assert!(id.starts_with("TST-"));
        assert_eq!(extract_uuid(&id, DEFAULT_SEPARATOR).unwrap(), sample());
    }

    #[test]
    fn test_prefix_does_not_change_uuid() {
        let fields = Fields::new().named("key", "value");
        let a = format_with_prefix("test", &fields, Some("TST"), DEFAULT_SEPARATOR, None);
        let b = format_with_prefix("test", &fields, Some("OTHER"), DEFAULT_SEPARATOR, None);
        assert_eq!(a.split_once('-').unwrap().1, b.split_once('-').unwrap().1);
    }

    #[test]
    fn test_custom_separator() {
        let fields = Fields::new().named("key", "value");
        let id = format_with_prefix("test", &fields, Some("TST"), "_", None);
        assert!(id.starts_with("TST_"));
        assert_eq!(extract_uuid(&id, "_").unwrap(), sample());
    }

    #[test]
    fn test_multi_token_prefix() {
        let uuid = sample();
        let id = join_prefix(uuid, Some("INV-EUR-2024"), DEFAULT_SEPARATOR);
        assert_eq!(extract_uuid(&id, DEFAULT_SEPARATOR).unwrap(), uuid);
    }

    #[test]
    fn test_plain_uuid_text() {
        let uuid = sample();
        assert_eq!(extract_uuid(&uuid.to_string(), DEFAULT_SEPARATOR).unwrap(), uuid);
        assert_eq!(extract_uuid(&uuid.simple().to_string(), "_").unwrap(), uuid);
    }

    #[test]
    fn test_invalid_input() {
        let err = extract_uuid("not-a-uuid", DEFAULT_SEPARATOR).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("no valid UUID found in 'not-a-uuid'"));

        assert!(extract_uuid("", DEFAULT_SEPARATOR).is_err());
        assert!(extract_uuid("TST-", DEFAULT_SEPARATOR).is_err());
    }

    #[test]
    fn test_empty_separator() {
        let uuid = sample().to_string();
        assert_eq!(extract_uuid(&uuid, ""), Err(IdError::EmptySeparator));
    }

    #[test]
    fn test_wrong_separator_fails() {
        let id = join_prefix(sample(), Some("TST"), "_");
        assert!(matches!(
            extract_uuid(&id, DEFAULT_SEPARATOR),
            Err(IdError::NoUuidFound { .. })
        ));
    }
}
