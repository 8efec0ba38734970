//! Principal identity helpers
//!
//! The engine treats identities as opaque strings; this module generates the
//! `0x`-prefixed hex form the CLI hands out.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate a fresh opaque principal identity (`0x` + 40 hex chars)
pub fn new_identity() -> String {
    let mut seed = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed);
    let hash = Sha256::digest(seed);
    format!("0x{}", &hex::encode(hash)[..40])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_shape() {
        let id = new_identity();
        assert!(id.starts_with("0x"));
        assert_eq!(id.len(), 42);
        assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identities_are_distinct() {
        assert_ne!(new_identity(), new_identity());
    }
}
