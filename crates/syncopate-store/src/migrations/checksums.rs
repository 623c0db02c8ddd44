//! Checksum validation for migrations
//!
//! Computes SHA256 checksums of migration SQL to detect drift between
//! the embedded SQL and what a database recorded when it migrated.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_shape() {
        let checksum = compute_checksum("SELECT 1");
        assert_eq!(checksum.len(), 64);
    }

    #[test]
    fn test_checksum_deterministic() {
        assert_eq!(compute_checksum("SELECT 1"), compute_checksum("SELECT 1"));
        assert_ne!(compute_checksum("SELECT 1"), compute_checksum("SELECT 2"));
    }
}
