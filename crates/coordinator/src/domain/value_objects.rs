//! Domain Value Objects
//!
//! Immutable value types for the coordination domain.

use serde::{Deserialize, Serialize};

/// Transaction identifier, assigned monotonically by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client identifier, chosen by the client itself
///
/// The wire protocol reserves 0 ("no winner yet") and -1 ("unknown
/// transaction"), so real clients use positive ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty: required count of leading `'0'` hex digits in a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Clamp an arbitrary value into the supported range
    ///
    /// The clamp is applied on both the issuing and the validating side,
    /// so a fabricated out-of-range difficulty can never be rejected or
    /// overflow the search space.
    pub fn clamp(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn digits(&self) -> u8 {
        self.0
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// Inclusive difficulty range transactions are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRange {
    min: Difficulty,
    max: Difficulty,
}

impl DifficultyRange {
    /// Build a range, clamping both bounds and swapping them if inverted
    pub fn new(min: i64, max: i64) -> Self {
        let lo = Difficulty::clamp(min.min(max));
        let hi = Difficulty::clamp(min.max(max));
        Self { min: lo, max: hi }
    }

    pub fn min(&self) -> Difficulty {
        self.min
    }

    pub fn max(&self) -> Difficulty {
        self.max
    }

    pub fn contains(&self, d: Difficulty) -> bool {
        self.min <= d && d <= self.max
    }
}

impl Default for DifficultyRange {
    fn default() -> Self {
        Self::new(Difficulty::MIN as i64, Difficulty::MAX as i64)
    }
}
