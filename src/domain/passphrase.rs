//! Admin passphrase value object.
//!
//! The shared admin passphrase is never stored in plain text; only its
//! Argon2 hash is configured and compared against.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Argon2-hashed passphrase.
#[derive(Clone)]
pub struct Passphrase {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passphrase")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Passphrase {
    /// Hash a plain-text passphrase.
    ///
    /// # Errors
    /// Returns a validation error for an empty passphrase.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("Passphrase must not be empty"));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Wrap an existing PHC-format hash (from configuration).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain-text candidate against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Passphrase hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let passphrase = Passphrase::new("open sesame").unwrap();

        assert!(passphrase.verify("open sesame"));
        assert!(!passphrase.verify("open sesame "));
        assert!(!passphrase.verify(""));
    }

    #[test]
    fn test_restored_from_hash() {
        let hash = Passphrase::new("admin").unwrap().into_string();
        assert!(hash.starts_with("$argon2"));

        let restored = Passphrase::from_hash(hash);
        assert!(restored.verify("admin"));
    }

    #[test]
    fn test_same_passphrase_different_salts() {
        let first = Passphrase::new("admin").unwrap();
        let second = Passphrase::new("admin").unwrap();
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let broken = Passphrase::from_hash("admin".to_string());
        assert!(!broken.verify("admin"));
    }

    #[test]
    fn test_empty_passphrase_rejected() {
        assert!(Passphrase::new("").is_err());
    }

    #[test]
    fn test_debug_redacts_hash() {
        let passphrase = Passphrase::new("admin").unwrap();
        let rendered = format!("{:?}", passphrase);
        assert!(!rendered.contains("argon2"));
    }
}
