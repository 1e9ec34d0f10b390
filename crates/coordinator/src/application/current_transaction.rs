//! Current Transaction Use Case

use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::TransactionId;
use crate::error::CoordinatorResult;
use std::sync::Arc;

/// Hand out the id of the transaction clients should mine against
pub struct CurrentTransactionUseCase<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentTransactionUseCase<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CoordinatorResult<TransactionId> {
        let id = self.repo.current_id().await?;
        tracing::debug!(txid = %id, "Current transaction requested");
        Ok(id)
    }
}
