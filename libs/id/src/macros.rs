//! Macros for defining typed deterministic IDs.

/// Macro to define a typed, deterministic ID for one entity type.
///
/// This generates a newtype wrapper around `Uuid` with:
/// - `ENTITY_TYPE` and `PREFIX` constants
/// - `derive()` to compute the ID from business data
/// - `parse()` to recover it from `{PREFIX}-{uuid}` or bare UUID text
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (as the prefixed string)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```
/// use detid::{define_deterministic_id, Fields, IdConfig};
///
/// define_deterministic_id!(InvoiceId, "invoice", "INV");
///
/// let config = IdConfig::for_domain("example.com", "deployment-secret");
/// let fields = Fields::new().named("region", "EUR").named("number", 12345);
///
/// let id = InvoiceId::derive(&fields, Some(&config));
/// let text = id.to_string();
/// assert!(text.starts_with("INV-"));
///
/// let parsed: InvoiceId = text.parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[macro_export]
macro_rules! define_deterministic_id {
    ($name:ident, $entity_type:literal, $prefix:literal) => {
        /// A typed deterministic ID for this entity type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// The entity type hashed into every ID of this kind.
            pub const ENTITY_TYPE: &'static str = $entity_type;

            /// The display prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Derives the ID for the given business data.
            #[must_use]
            pub fn derive(fields: &$crate::Fields, config: Option<&$crate::IdConfig>) -> Self {
                Self($crate::derive_uuid(Self::ENTITY_TYPE, fields, config))
            }

            /// Derives the ID using a generator's bound configuration.
            #[must_use]
            pub fn derive_with(generator: &$crate::UuidGenerator, fields: &$crate::Fields) -> Self {
                Self(generator.derive(Self::ENTITY_TYPE, fields))
            }

            /// Creates an ID from a raw UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            /// Parses an ID from a string.
            ///
            /// Accepts `{prefix}-{uuid}` or a bare UUID. The prefix is
            /// cosmetic and is not checked.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::extract_uuid(s, $crate::DEFAULT_SEPARATOR).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}{}", Self::PREFIX, $crate::DEFAULT_SEPARATOR, self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }

        impl From<$name> for $crate::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}
