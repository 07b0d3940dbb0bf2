//! Tidewater Core
//!
//! Core types for the Tidewater job deployer.
//!
//! This crate contains:
//! - Domain types: jobs as the cluster reports them and savepoint states
//! - DTOs: request and response bodies of the cluster REST API

pub mod domain;
pub mod dto;
