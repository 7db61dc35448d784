//! # detid
//!
//! Deterministic, coordination-free UUIDs derived from an entity type plus
//! business data.
//!
//! ## Design Principles
//!
//! - Same input + same configuration = same UUID, on every host, every time
//! - No database sequence, no coordination service, no shared state
//! - Named values are sorted before hashing; positional values keep order
//! - A secret salt keeps identifiers unpredictable without the secret
//! - Prefixes are cosmetic and never part of the hash input
//!
//! ## Derivation
//!
//! The hashed name is `{entity_type}|salt:{salt}|{fields}` (salt and fields
//! omitted when empty), fed to UUID version 5 under the configured namespace.
//!
//! ```
//! use detid::{extract_uuid, generate_salt, Fields, IdConfig, UuidGenerator};
//!
//! let salt = generate_salt(32)?;
//! let generator = UuidGenerator::new(IdConfig::for_domain("example.com", salt));
//!
//! let fields = Fields::new().named("region", "EUR").named("number", 12345);
//! let uuid = generator.derive("invoice", &fields);
//! let prefixed = generator.format_with_prefix("invoice", &fields, Some("INV-EUR"), "-");
//!
//! assert_eq!(extract_uuid(&prefixed, "-")?, uuid);
//! # Ok::<(), detid::IdError>(())
//! ```

mod config;
mod derive;
mod error;
mod generator;
mod macros;
mod normalize;
mod prefix;
mod salt;

pub use config::IdConfig;
pub use derive::derive_uuid;
pub use error::IdError;
pub use generator::UuidGenerator;
pub use normalize::{normalize_input, Fields, Plain, Representable, FIELD_DELIMITER};
pub use prefix::{extract_uuid, format_with_prefix, DEFAULT_SEPARATOR};
pub use salt::{generate_default_salt, generate_salt, DEFAULT_SALT_BYTES, MIN_SALT_BYTES};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub use serde;
