//! Shared-secret comparison for the admin gate.
//!
//! Both sides are reduced to SHA-256 digests before comparing so the
//! comparison always touches 32 bytes regardless of input length, and the
//! loop does not exit on the first differing byte.

use sha2::{Digest, Sha256};

/// Returns `true` when `presented` equals the configured `expected` secret.
///
/// An empty `expected` secret never matches; the server refuses to start
/// without one, but a misconfiguration must not open the gate.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    let a = Sha256::digest(presented.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
