//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Transaction)
//! - Domain value objects (TransactionId, ClientId, Difficulty)
//! - Domain services (proof-of-work validation)
//! - Repository trait (interface)

pub mod entities;
pub mod services;
pub mod repository;
pub mod value_objects;
