//! Transaction Query Use Cases
//!
//! Read-only views over the table: challenge, status, winner, solution.
//! An unknown id is a normal outcome here (`None`), never a fault - the
//! facade turns it into the wire sentinel.

use crate::domain::entities::TransactionStatus;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::{ClientId, Difficulty, TransactionId};
use crate::error::CoordinatorResult;
use std::sync::Arc;

/// Solution view: status plus the accepted candidate once resolved
#[derive(Debug, Clone)]
pub struct SolutionView {
    pub status: TransactionStatus,
    /// Empty until the transaction resolves
    pub solution: String,
    pub difficulty: Difficulty,
}

/// Query Transaction Use Case
pub struct QueryTransactionUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> QueryTransactionUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The difficulty a miner has to satisfy for `id`
    pub async fn challenge(&self, id: TransactionId) -> CoordinatorResult<Option<Difficulty>> {
        Ok(self.repo.get(id).await?.map(|tx| tx.difficulty))
    }

    pub async fn status(&self, id: TransactionId) -> CoordinatorResult<Option<TransactionStatus>> {
        Ok(self.repo.get(id).await?.map(|tx| tx.status()))
    }

    /// `Some(None)` means the transaction exists but has no winner yet
    pub async fn winner(&self, id: TransactionId) -> CoordinatorResult<Option<Option<ClientId>>> {
        Ok(self.repo.get(id).await?.map(|tx| tx.winner))
    }

    pub async fn solution(&self, id: TransactionId) -> CoordinatorResult<Option<SolutionView>> {
        Ok(self.repo.get(id).await?.map(|tx| {
            let status = tx.status();
            SolutionView {
                status,
                // Only expose the candidate once the round is over
                solution: if status == TransactionStatus::Resolved {
                    tx.solution
                } else {
                    String::new()
                },
                difficulty: tx.difficulty,
            }
        }))
    }
}
