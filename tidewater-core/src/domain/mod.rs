//! Core domain types
//!
//! These types describe the live state read from the target cluster. They are
//! fetched fresh for every operation and never cached.

pub mod job;
pub mod savepoint;
