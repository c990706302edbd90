//! Core domain types
//!
//! Enumerations and summary records shared by the client and the CLI.
//! Every type here serializes to the exact field names and string values
//! the server uses.

pub mod class;
pub mod summary;
