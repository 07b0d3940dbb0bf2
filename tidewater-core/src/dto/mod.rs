//! Data Transfer Objects for the cluster REST API
//!
//! Request and response bodies exchanged with the cluster's control plane.
//! Field names follow the wire format through serde renames.

pub mod jar;
pub mod job;
pub mod savepoint;
