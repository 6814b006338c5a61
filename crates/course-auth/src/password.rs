//! Password hashing

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use tracing::debug;

use crate::error::AuthFailure;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Salted one-way hashing of account passwords
///
/// Hashes are PHC strings, so the salt and cost parameters travel with the
/// hash and verification keeps working after the parameters change.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new(params: HashingParams) -> Result<Self, AuthFailure> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AuthFailure::PasswordHash(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthFailure> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthFailure::PasswordHash(e.to_string()))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// The digest comparison is constant time. A malformed hash is treated
    /// as a mismatch.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Stored password hash is malformed: {}", e);
                return false;
            }
        };

        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordHasher {
        PasswordHasher::new(HashingParams {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap();
        let hash = hasher.hash("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("secret1"));
        assert!(hasher.verify("secret1", &hash));
        assert!(!hasher.verify("secret2", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = cheap();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first));
        assert!(hasher.verify("secret1", &second));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        let hasher = cheap();
        assert!(!hasher.verify("anything", "not-a-valid-hash"));
        assert!(!hasher.verify("anything", ""));
        assert!(!hasher.verify("anything", "$2a$10$bcryptlookingvalue"));
    }

    #[test]
    fn test_verify_uses_parameters_embedded_in_hash() {
        let hash = cheap().hash("secret1").unwrap();
        assert!(PasswordHasher::default().verify("secret1", &hash));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let result = PasswordHasher::new(HashingParams {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(AuthFailure::PasswordHash(_))));
    }
}
