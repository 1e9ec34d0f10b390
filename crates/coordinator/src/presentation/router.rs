//! Coordinator Router

use crate::application::config::CoordinatorConfig;
use crate::domain::repository::TransactionRepository;
use crate::infra::memory::InMemoryTransactionTable;
use crate::presentation::handlers::{self, CoordinatorAppState};
use crate::presentation::middleware::log_requests;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create the coordinator router with the in-memory table
pub fn coordinator_router(config: CoordinatorConfig) -> Router {
    coordinator_router_generic(InMemoryTransactionTable::new(config.difficulty_range))
}

/// Create a coordinator router for any repository implementation
pub fn coordinator_router_generic<R>(repo: R) -> Router
where
    R: TransactionRepository + Clone + Send + Sync + 'static,
{
    let state = CoordinatorAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/transaction", get(handlers::get_transaction_id::<R>))
        .route(
            "/transaction/{id}/challenge",
            get(handlers::get_challenge::<R>),
        )
        .route(
            "/transaction/{id}/status",
            get(handlers::get_transaction_status::<R>),
        )
        .route("/transaction/{id}/winner", get(handlers::get_winner::<R>))
        .route(
            "/transaction/{id}/solution",
            get(handlers::get_solution::<R>),
        )
        .route("/submit", post(handlers::submit_challenge::<R>))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
