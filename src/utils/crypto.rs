//! Token generation and digesting
//!
//! Refresh tokens are opaque random strings. Only their SHA-256 digest
//! ever reaches the session store, so the store cannot be replayed.

use rand::distr::{Alphanumeric, SampleString};
use sha2::{Digest, Sha256};

/// Random alphanumeric token from the thread-local CSPRNG
pub fn generate_secure_token(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}

/// Hex-encoded SHA-256 digest
pub fn hash_string(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Verify a digest matches the input
pub fn verify_hash(input: &str, digest: &str) -> bool {
    hash_string(input) == digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_alphanumeric_and_unique() {
        let token = generate_secure_token(48);
        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_secure_token(48));
    }

    #[test]
    fn digests_are_stable_hex() {
        assert_eq!(hash_string("token"), hash_string("token"));
        assert_ne!(hash_string("token"), hash_string("other"));
        assert_eq!(hash_string("").len(), 64);
    }

    #[test]
    fn verify_matches_only_the_original() {
        let digest = hash_string("refresh-abc123");
        assert!(verify_hash("refresh-abc123", &digest));
        assert!(!verify_hash("refresh-abc124", &digest));
    }
}
