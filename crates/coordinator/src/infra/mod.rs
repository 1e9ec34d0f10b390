//! Infrastructure Layer
//!
//! In-memory transaction table. State lives in process memory only;
//! a restart loses all transaction history.

pub mod memory;
