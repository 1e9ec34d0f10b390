//! Submit Solution Use Case

use crate::domain::repository::{SubmitOutcome, TransactionRepository};
use crate::domain::value_objects::{ClientId, TransactionId};
use crate::error::CoordinatorResult;
use std::sync::Arc;

/// Input DTO for submit solution
#[derive(Debug, Clone)]
pub struct SubmitSolutionInput {
    pub transaction_id: TransactionId,
    pub client_id: ClientId,
    pub candidate: String,
}

/// Submit Solution Use Case
pub struct SubmitSolutionUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitSolutionUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Adjudicate one submission. Every outcome is a normal result; the
    /// validation and the winner re-check happen inside the table's
    /// critical section.
    pub async fn execute(&self, input: SubmitSolutionInput) -> CoordinatorResult<SubmitOutcome> {
        let outcome = self
            .repo
            .resolve(input.transaction_id, input.client_id, input.candidate)
            .await?;

        match &outcome {
            SubmitOutcome::Accepted => {
                tracing::info!(
                    txid = %input.transaction_id,
                    client = %input.client_id,
                    "Submission accepted"
                );
            }
            SubmitOutcome::AlreadySolved => {
                tracing::info!(
                    txid = %input.transaction_id,
                    client = %input.client_id,
                    "Submission for already solved transaction"
                );
            }
            SubmitOutcome::RejectedInvalid => {
                tracing::warn!(
                    txid = %input.transaction_id,
                    client = %input.client_id,
                    "Invalid candidate rejected"
                );
            }
            SubmitOutcome::UnknownTransaction => {
                tracing::warn!(
                    txid = %input.transaction_id,
                    client = %input.client_id,
                    "Submission for unknown transaction"
                );
            }
        }

        Ok(outcome)
    }
}
