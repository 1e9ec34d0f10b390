//! Repository Trait
//!
//! Interface for the transaction table. Implementation is in the
//! infrastructure layer.

use crate::domain::entities::Transaction;
use crate::domain::value_objects::{ClientId, TransactionId};
use crate::error::CoordinatorResult;

/// Outcome of a submission attempt, decided inside the table's critical
/// section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The candidate won the round
    Accepted,
    /// The digest does not satisfy the stored difficulty
    RejectedInvalid,
    /// A competitor resolved the transaction first
    AlreadySolved,
    /// The transaction id was never issued
    UnknownTransaction,
}

/// Transaction table trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// Return the current transaction id, rolling the cursor forward to a
    /// fresh pending transaction if the current one is already resolved
    async fn current_id(&self) -> CoordinatorResult<TransactionId>;

    /// Look up a transaction by id (a snapshot copy; the table keeps
    /// every transaction ever issued)
    async fn get(&self, id: TransactionId) -> CoordinatorResult<Option<Transaction>>;

    /// Adjudicate a submission: validate against the stored difficulty,
    /// re-check that no competitor won, set winner and solution, and roll
    /// the cursor forward - all inside one critical section.
    ///
    /// Ties between concurrent valid candidates are broken by
    /// lock-acquisition order, not by submission timestamp.
    async fn resolve(
        &self,
        id: TransactionId,
        client: ClientId,
        candidate: String,
    ) -> CoordinatorResult<SubmitOutcome>;
}
