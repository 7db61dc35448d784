//! Secret salt generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

use crate::IdError;

/// Default salt size (32 bytes = 256 bits of entropy, 43 encoded chars).
pub const DEFAULT_SALT_BYTES: usize = 32;

/// Shortest salt accepted by [`generate_salt`].
pub const MIN_SALT_BYTES: usize = 16;

/// Generates a URL-safe base64 salt from `len` bytes of secure randomness.
///
/// Intended to be run once per deployment; the result belongs in a secret
/// store, never in source control. Lengths below [`MIN_SALT_BYTES`] are
/// rejected.
pub fn generate_salt(len: usize) -> Result<String, IdError> {
    if len < MIN_SALT_BYTES {
        return Err(IdError::SaltTooShort {
            requested: len,
            minimum: MIN_SALT_BYTES,
        });
    }

    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Generates a salt of [`DEFAULT_SALT_BYTES`].
pub fn generate_default_salt() -> String {
    let mut bytes = [0u8; DEFAULT_SALT_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_salt() {
        let err = generate_salt(15).unwrap_err();
        assert_eq!(
            err,
            IdError::SaltTooShort {
                requested: 15,
                minimum: 16
            }
        );
        assert!(err.is_validation_error());
        assert!(generate_salt(0).is_err());
    }

    #[test]
    fn test_lengths_increase() {
        let s16 = generate_salt(16).unwrap();
        let s32 = generate_salt(32).unwrap();
        let s64 = generate_salt(64).unwrap();
        assert_eq!(s16.len(), 22);
        assert_eq!(s32.len(), 43);
        assert_eq!(s64.len(), 86);
        assert!(s16.len() < s64.len());
    }

    #[test]
    fn test_url_safe_alphabet() {
        let salt = generate_default_salt();
        assert_eq!(salt.len(), 43);
        assert!(salt
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_unique_per_call() {
        let a = generate_salt(DEFAULT_SALT_BYTES).unwrap();
        let b = generate_salt(DEFAULT_SALT_BYTES).unwrap();
        assert_ne!(a, b);
    }
}
