//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Digest utilities (SHA-1 hex rendering)
//! - Client peer identification for request logging

pub mod client;
pub mod crypto;
