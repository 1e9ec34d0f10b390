//! In-Memory Transaction Table
//!
//! The only shared mutable resource on the server. A single mutex
//! serializes every table operation, reads included: all of them are O(1)
//! map work, so a reader/writer split buys nothing here.

use crate::domain::entities::Transaction;
use crate::domain::repository::{SubmitOutcome, TransactionRepository};
use crate::domain::services::is_valid_solution;
use crate::domain::value_objects::{ClientId, Difficulty, DifficultyRange, TransactionId};
use crate::error::{CoordinatorError, CoordinatorResult};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

struct TableInner {
    /// Append-only: transactions are never deleted, historical ids stay
    /// queryable for the lifetime of the process
    table: HashMap<TransactionId, Transaction>,
    current: TransactionId,
}

/// Mutex-guarded transaction table
#[derive(Clone)]
pub struct InMemoryTransactionTable {
    inner: Arc<Mutex<TableInner>>,
    difficulty_range: DifficultyRange,
}

impl InMemoryTransactionTable {
    /// Create the table with its first pending transaction (id 0)
    pub fn new(difficulty_range: DifficultyRange) -> Self {
        let first_id = TransactionId(0);
        let first = Transaction::new(first_id, draw_difficulty(&difficulty_range));

        tracing::info!(
            txid = %first.id,
            difficulty = first.difficulty.digits(),
            "Transaction created"
        );

        let mut table = HashMap::new();
        table.insert(first_id, first);

        Self {
            inner: Arc::new(Mutex::new(TableInner {
                table,
                current: first_id,
            })),
            difficulty_range,
        }
    }

    fn lock(&self) -> CoordinatorResult<MutexGuard<'_, TableInner>> {
        self.inner.lock().map_err(|_| CoordinatorError::TablePoisoned)
    }

    /// Advance the cursor to a freshly created pending transaction.
    /// Callers must hold the lock and have verified the current
    /// transaction is resolved; calling it from both the eager (resolve)
    /// and lazy (current_id) paths is safe because that check happens
    /// under the same guard.
    fn roll_forward(&self, inner: &mut TableInner) -> TransactionId {
        let next_id = inner.current.next();
        let next = Transaction::new(next_id, draw_difficulty(&self.difficulty_range));

        tracing::info!(
            txid = %next.id,
            difficulty = next.difficulty.digits(),
            "Transaction created"
        );

        inner.table.insert(next_id, next);
        inner.current = next_id;
        next_id
    }
}

impl TransactionRepository for InMemoryTransactionTable {
    async fn current_id(&self) -> CoordinatorResult<TransactionId> {
        let mut inner = self.lock()?;

        let resolved = inner
            .table
            .get(&inner.current)
            .map(Transaction::is_resolved)
            .unwrap_or(false);

        if resolved {
            // Lazy rollover: the winner was adjudicated but this is the
            // first read since; hand out a fresh transaction instead
            Ok(self.roll_forward(&mut inner))
        } else {
            Ok(inner.current)
        }
    }

    async fn get(&self, id: TransactionId) -> CoordinatorResult<Option<Transaction>> {
        let inner = self.lock()?;
        Ok(inner.table.get(&id).cloned())
    }

    async fn resolve(
        &self,
        id: TransactionId,
        client: ClientId,
        candidate: String,
    ) -> CoordinatorResult<SubmitOutcome> {
        let mut inner = self.lock()?;

        let Some(tx) = inner.table.get_mut(&id) else {
            return Ok(SubmitOutcome::UnknownTransaction);
        };

        // Re-check under the lock: a competitor may have won between the
        // caller's read and this critical section. Lock-acquisition order
        // is the tie-break, not submission time.
        if tx.is_resolved() {
            return Ok(SubmitOutcome::AlreadySolved);
        }

        if !is_valid_solution(&candidate, tx.difficulty.digits() as i64) {
            return Ok(SubmitOutcome::RejectedInvalid);
        }

        tx.winner = Some(client);
        tx.solution = candidate;

        tracing::info!(
            txid = %id,
            winner = %client,
            "Transaction resolved"
        );

        // Eager rollover, same critical section: the resolved transaction
        // is never handed out as current again, and exactly one successor
        // is created per resolution
        if id == inner.current {
            self.roll_forward(&mut inner);
        }

        Ok(SubmitOutcome::Accepted)
    }
}

fn draw_difficulty(range: &DifficultyRange) -> Difficulty {
    let (lo, hi) = (range.min().digits(), range.max().digits());
    Difficulty::clamp(rand::rng().random_range(lo..=hi) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TransactionStatus;

    fn table() -> InMemoryTransactionTable {
        InMemoryTransactionTable::new(DifficultyRange::default())
    }

    // sha1("0:1:8") = 07b02b3e... (one leading zero)
    const TX0_VALID: &str = "0:1:8";

    #[tokio::test]
    async fn test_initial_transaction() {
        let t = table();
        let id = t.current_id().await.unwrap();
        assert_eq!(id, TransactionId(0));

        let tx = t.get(id).await.unwrap().unwrap();
        assert_eq!(tx.status(), TransactionStatus::Pending);
        let range = DifficultyRange::default();
        assert!(range.contains(tx.difficulty));
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let t = table();
        assert!(t.get(TransactionId(999)).await.unwrap().is_none());
        let out = t
            .resolve(TransactionId(999), ClientId(1), TX0_VALID.to_string())
            .await
            .unwrap();
        assert_eq!(out, SubmitOutcome::UnknownTransaction);
    }

    #[tokio::test]
    async fn test_resolve_rolls_forward_once() {
        let t = InMemoryTransactionTable::new(DifficultyRange::new(1, 1));

        let out = t
            .resolve(TransactionId(0), ClientId(1), TX0_VALID.to_string())
            .await
            .unwrap();
        assert_eq!(out, SubmitOutcome::Accepted);

        // Eager rollover already happened; the lazy path must not create
        // a second successor
        assert_eq!(t.current_id().await.unwrap(), TransactionId(1));
        assert_eq!(t.current_id().await.unwrap(), TransactionId(1));

        // History stays queryable
        let old = t.get(TransactionId(0)).await.unwrap().unwrap();
        assert_eq!(old.winner, Some(ClientId(1)));
        assert_eq!(old.solution, TX0_VALID);
    }

    #[tokio::test]
    async fn test_second_submit_already_solved() {
        let t = InMemoryTransactionTable::new(DifficultyRange::new(1, 1));

        t.resolve(TransactionId(0), ClientId(1), TX0_VALID.to_string())
            .await
            .unwrap();

        // sha1("0:2:1") = 0f5bffdf... also valid at difficulty 1, but the
        // round is over
        let out = t
            .resolve(TransactionId(0), ClientId(2), "0:2:1".to_string())
            .await
            .unwrap();
        assert_eq!(out, SubmitOutcome::AlreadySolved);

        // Winner is write-once
        let tx = t.get(TransactionId(0)).await.unwrap().unwrap();
        assert_eq!(tx.winner, Some(ClientId(1)));
    }

    #[tokio::test]
    async fn test_invalid_candidate_rejected() {
        let t = InMemoryTransactionTable::new(DifficultyRange::new(1, 1));

        // sha1("hello") starts with 'a'
        let out = t
            .resolve(TransactionId(0), ClientId(1), "hello".to_string())
            .await
            .unwrap();
        assert_eq!(out, SubmitOutcome::RejectedInvalid);

        // Rejection must not resolve or roll the table
        assert_eq!(t.current_id().await.unwrap(), TransactionId(0));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_at_most_one_accepted_under_contention() {
        let t = InMemoryTransactionTable::new(DifficultyRange::new(1, 1));

        // Distinct precomputed difficulty-1 candidates for txid 0,
        // one per client
        let candidates = [
            (1, "0:1:8"),
            (2, "0:2:1"),
            (3, "0:3:17"),
            (4, "0:4:10"),
            (5, "0:5:17"),
            (6, "0:6:17"),
            (7, "0:7:17"),
            (8, "0:8:66"),
        ];

        let mut handles = Vec::new();
        for (client, candidate) in candidates {
            let t = t.clone();
            handles.push(tokio::spawn(async move {
                t.resolve(TransactionId(0), ClientId(client), candidate.to_string())
                    .await
                    .unwrap()
            }));
        }

        let mut accepted = 0;
        let mut already_solved = 0;
        for h in handles {
            match h.await.unwrap() {
                SubmitOutcome::Accepted => accepted += 1,
                SubmitOutcome::AlreadySolved => already_solved += 1,
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(already_solved, candidates.len() - 1);

        // Exactly one successor despite eight racing submitters
        assert_eq!(t.current_id().await.unwrap(), TransactionId(1));
    }
}
