//! Tidewater Operator
//!
//! Job lifecycle operations against a stream-processing cluster:
//! - Deploy: upload an artifact and start it, optionally from the latest savepoint
//! - Update: savepoint the running job, cancel it, restart the new artifact from that savepoint
//! - Terminate: cancel a job, optionally after taking a savepoint
//!
//! Every operation is stateless. Job state is read fresh from the cluster on
//! each run and decisions are taken from that read alone.
//!
//! Architecture:
//! - `matcher`: which jobs belong to a job family
//! - `monitor`: waiting on asynchronous savepoint creation
//! - `storage`: listing savepoint directories on local disk or object stores
//! - `savepoint`: finding the newest savepoint in a directory
//! - `operations`: the `Operator` trait and its cluster-backed implementation

pub mod error;
pub mod matcher;
pub mod monitor;
pub mod operations;
pub mod savepoint;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{ErrorKind, OperatorError, Result};
pub use operations::{
    ClusterOperator, Deploy, Operator, OperatorSettings, TerminateJob, TerminateTarget, UpdateJob,
};
pub use savepoint::SavepointResolver;
