//! Rustifactory Core
//!
//! Wire types for the repository manager's REST API.
//!
//! This crate contains:
//! - Domain types: Repository classes, package types and the summary records
//!   returned by list endpoints
//! - DTOs: Repository definitions sent to the server and the confirmed
//!   configuration it sends back

pub mod domain;
pub mod dto;
