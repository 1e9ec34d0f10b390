//! HTTP Handlers
//!
//! The RPC facade: maps each coordinator operation 1:1 onto a
//! request/response pair and translates internal outcomes into the fixed
//! wire sentinels. Only genuine internal faults escape as errors.

use crate::application::current_transaction::CurrentTransactionUseCase;
use crate::application::query_transaction::QueryTransactionUseCase;
use crate::application::submit_solution::{SubmitSolutionInput, SubmitSolutionUseCase};
use crate::domain::repository::TransactionRepository;
use crate::domain::value_objects::{ClientId, TransactionId};
use crate::error::CoordinatorResult;
use crate::presentation::dto::{
    codes, status_code, ChallengeResponse, SolutionResponse, StatusResponse, SubmitRequest,
    SubmitResponse, TransactionIdResponse, WinnerResponse,
};
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

/// Shared state for coordinator handlers
#[derive(Clone)]
pub struct CoordinatorAppState<R>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /transaction
pub async fn get_transaction_id<R>(
    State(state): State<CoordinatorAppState<R>>,
) -> CoordinatorResult<Json<TransactionIdResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentTransactionUseCase::new(state.repo.clone());
    let id = use_case.execute().await?;

    Ok(Json(TransactionIdResponse { id: id.0 }))
}

/// GET /transaction/{id}/challenge
pub async fn get_challenge<R>(
    State(state): State<CoordinatorAppState<R>>,
    Path(id): Path<i64>,
) -> CoordinatorResult<Json<ChallengeResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryTransactionUseCase::new(state.repo.clone());
    let difficulty = use_case.challenge(TransactionId(id)).await?;

    Ok(Json(ChallengeResponse {
        difficulty: difficulty
            .map(|d| d.digits() as i32)
            .unwrap_or(codes::UNKNOWN_TRANSACTION),
    }))
}

/// GET /transaction/{id}/status
pub async fn get_transaction_status<R>(
    State(state): State<CoordinatorAppState<R>>,
    Path(id): Path<i64>,
) -> CoordinatorResult<Json<StatusResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryTransactionUseCase::new(state.repo.clone());
    let status = use_case.status(TransactionId(id)).await?;

    Ok(Json(StatusResponse {
        status: status_code(status),
    }))
}

/// GET /transaction/{id}/winner
pub async fn get_winner<R>(
    State(state): State<CoordinatorAppState<R>>,
    Path(id): Path<i64>,
) -> CoordinatorResult<Json<WinnerResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryTransactionUseCase::new(state.repo.clone());
    let winner = use_case.winner(TransactionId(id)).await?;

    // "No winner yet" and "unknown id" must stay distinguishable
    let client_id = match winner {
        Some(Some(client)) => client.0,
        Some(None) => codes::WINNER_NONE,
        None => codes::WINNER_UNKNOWN,
    };

    Ok(Json(WinnerResponse { client_id }))
}

/// GET /transaction/{id}/solution
pub async fn get_solution<R>(
    State(state): State<CoordinatorAppState<R>>,
    Path(id): Path<i64>,
) -> CoordinatorResult<Json<SolutionResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryTransactionUseCase::new(state.repo.clone());
    let view = use_case.solution(TransactionId(id)).await?;

    Ok(Json(match view {
        Some(view) => SolutionResponse {
            status: status_code(Some(view.status)),
            solution: view.solution,
            difficulty: view.difficulty.digits() as i32,
        },
        None => SolutionResponse {
            status: codes::UNKNOWN_TRANSACTION,
            solution: String::new(),
            difficulty: codes::UNKNOWN_TRANSACTION,
        },
    }))
}

/// POST /submit
pub async fn submit_challenge<R>(
    State(state): State<CoordinatorAppState<R>>,
    Json(req): Json<SubmitRequest>,
) -> CoordinatorResult<Json<SubmitResponse>>
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitSolutionUseCase::new(state.repo.clone());

    let outcome = use_case
        .execute(SubmitSolutionInput {
            transaction_id: TransactionId(req.transaction_id),
            client_id: ClientId(req.client_id),
            candidate: req.solution,
        })
        .await?;

    Ok(Json(SubmitResponse::from(outcome)))
}
