//! Transaction Coordinator
//!
//! Proof-of-work challenge/response coordination:
//! - `domain/` - Transaction entity, difficulty value objects, the SHA-1
//!   prefix validator, the table trait
//! - `application/` - Use cases
//! - `infra/` - In-memory transaction table (single mutex)
//! - `presentation/` - HTTP facade: DTOs, handlers, logging middleware
//!
//! ## Coordination model
//! - The table is the only shared mutable state; one mutex serializes all
//!   operations on it
//! - Exactly one submission per transaction is ever accepted; ties are
//!   broken by lock-acquisition order
//! - A resolved transaction is superseded by exactly one fresh pending
//!   transaction (eager on resolve, lazy on the next current-id read)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CoordinatorConfig;
pub use error::{CoordinatorError, CoordinatorResult};
pub use infra::memory::InMemoryTransactionTable;
pub use presentation::router::{coordinator_router, coordinator_router_generic};

#[cfg(test)]
mod tests;
