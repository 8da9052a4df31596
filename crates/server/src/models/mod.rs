//! Wire types for the HTTP API.
//!
//! Handlers never serialize store records directly; they go through the
//! mappings in [`admin`].

pub mod admin;

pub use admin::{AdminRequest, AdminResponse, StatisticsQuery};
