//! Domain Services
//!
//! Pure domain logic for proof-of-work validation.

use crate::domain::value_objects::Difficulty;
use platform::crypto::{leading_zero_digits, sha1_hex};

/// Verify that a candidate string satisfies a difficulty
///
/// The SHA-1 hex digest of `candidate` must start with `difficulty`
/// literal `'0'` characters. Out-of-range difficulty is clamped into
/// [`Difficulty::MIN`]..=[`Difficulty::MAX`], never rejected.
pub fn is_valid_solution(candidate: &str, difficulty: i64) -> bool {
    let required = Difficulty::clamp(difficulty).digits() as usize;
    let digest = sha1_hex(candidate.as_bytes());
    leading_zero_digits(&digest) >= required
}

/// Build the conventional candidate payload `"<txid>:<clientId>:<nonce>"`
pub fn candidate_string(txid: i64, client_id: i64, nonce: u64) -> String {
    format!("{txid}:{client_id}:{nonce}")
}
