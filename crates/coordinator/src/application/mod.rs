//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod current_transaction;
pub mod query_transaction;
pub mod submit_solution;
