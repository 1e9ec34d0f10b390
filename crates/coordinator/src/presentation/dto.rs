//! API DTOs (Data Transfer Objects)
//!
//! Fixed-schema request/response records. Not-found and contention
//! outcomes are in-band sentinel values, never HTTP faults; the constants
//! in [`codes`] are the complete wire vocabulary.

use crate::domain::entities::TransactionStatus;
use crate::domain::repository::SubmitOutcome;
use serde::{Deserialize, Serialize};

/// Wire sentinel values
pub mod codes {
    /// Status: transaction resolved
    pub const STATUS_RESOLVED: i32 = 0;
    /// Status: transaction still pending
    pub const STATUS_PENDING: i32 = 1;
    /// Status / challenge / submit: unknown transaction id
    pub const UNKNOWN_TRANSACTION: i32 = -1;

    /// Winner: nobody has resolved the transaction yet
    pub const WINNER_NONE: i64 = 0;
    /// Winner: unknown transaction id
    pub const WINNER_UNKNOWN: i64 = -1;

    /// Submit: candidate accepted, this client won the round
    pub const SUBMIT_ACCEPTED: i32 = 1;
    /// Submit: digest does not satisfy the difficulty
    pub const SUBMIT_REJECTED: i32 = 0;
    /// Submit: a competitor already resolved the transaction
    pub const SUBMIT_ALREADY_SOLVED: i32 = 2;
}

/// Response for GET /transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionIdResponse {
    pub id: i64,
}

/// Response for GET /transaction/{id}/challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// -1 when the id was never issued
    pub difficulty: i32,
}

/// Response for GET /transaction/{id}/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: i32,
}

/// Response for GET /transaction/{id}/winner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerResponse {
    pub client_id: i64,
}

/// Response for GET /transaction/{id}/solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionResponse {
    pub status: i32,
    pub solution: String,
    pub difficulty: i32,
}

/// Request for POST /submit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub transaction_id: i64,
    pub client_id: i64,
    pub solution: String,
}

/// Response for POST /submit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub code: i32,
}

pub fn status_code(status: Option<TransactionStatus>) -> i32 {
    match status {
        Some(TransactionStatus::Resolved) => codes::STATUS_RESOLVED,
        Some(TransactionStatus::Pending) => codes::STATUS_PENDING,
        None => codes::UNKNOWN_TRANSACTION,
    }
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        let code = match outcome {
            SubmitOutcome::Accepted => codes::SUBMIT_ACCEPTED,
            SubmitOutcome::RejectedInvalid => codes::SUBMIT_REJECTED,
            SubmitOutcome::AlreadySolved => codes::SUBMIT_ALREADY_SOLVED,
            SubmitOutcome::UnknownTransaction => codes::UNKNOWN_TRANSACTION,
        };
        Self { code }
    }
}
