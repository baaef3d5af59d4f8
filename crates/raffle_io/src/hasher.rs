//! crates/raffle_io/src/hasher.rs
//!
//! SHA-256 digests for the audit record and seed derivation for free-form seed phrases.
//! Hex digests are **lowercase**.

#![forbid(unsafe_code)]

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_bytes;
use crate::IoError;

/// SHA-256 over raw bytes, lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over the **canonical JSON bytes** of any serializable value.
pub fn sha256_canonical<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    let bytes = to_canonical_bytes(value)?;
    Ok(sha256_hex(&bytes))
}

/// Derive a 32-byte ChaCha20 seed from an arbitrary phrase: SHA-256 of its UTF-8 bytes.
pub fn seed_from_phrase(phrase: &str) -> [u8; 32] {
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&Sha256::digest(phrase.as_bytes()));
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn canonical_hash_ignores_key_order() {
        let a = sha256_canonical(&json!({"x": 1, "y": [1, 2]})).unwrap();
        let b = sha256_canonical(&json!({"y": [1, 2], "x": 1})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn seed_phrase_is_stable_and_sensitive() {
        assert_eq!(seed_from_phrase("spring-raffle"), seed_from_phrase("spring-raffle"));
        assert_ne!(seed_from_phrase("spring-raffle"), seed_from_phrase("spring-raffle "));
        assert_eq!(seed_from_phrase("abc")[..4], [0xba, 0x78, 0x16, 0xbf]);
    }
}
