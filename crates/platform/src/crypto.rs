//! Digest Utilities

use sha1::{Digest, Sha1};

/// Compute the SHA-1 digest of `data` as a lowercase hex string
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Count leading `'0'` characters of a hex digest
pub fn leading_zero_digits(digest_hex: &str) -> usize {
    digest_hex.bytes().take_while(|&b| b == b'0').count()
}
