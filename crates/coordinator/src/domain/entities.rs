//! Domain Entities
//!
//! Core business entities for the coordination domain.

use crate::domain::value_objects::{ClientId, Difficulty, TransactionId};

/// Status derived from the winner field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Resolved,
    Pending,
}

/// Transaction entity - one challenge round with a fixed difficulty
///
/// `winner` is write-once: it transitions from `None` to `Some` exactly
/// once, inside the table's critical section, and never changes again.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    pub difficulty: Difficulty,
    pub solution: String,
    pub winner: Option<ClientId>,
}

impl Transaction {
    /// Create a new pending transaction
    pub fn new(id: TransactionId, difficulty: Difficulty) -> Self {
        Self {
            id,
            difficulty,
            solution: String::new(),
            winner: None,
        }
    }

    pub fn status(&self) -> TransactionStatus {
        if self.winner.is_some() {
            TransactionStatus::Resolved
        } else {
            TransactionStatus::Pending
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }
}
