//! Adminhub Core - Shared types and statistics.
//!
//! This crate provides the domain types used across all Adminhub components:
//! - `server` - HTTP service exposing admin CRUD and statistics
//! - `cli` - Command-line tools for migrations, seeding and reports
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Admin statistics live here so they can be computed over any
//! snapshot of records, whichever store produced it.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails and the admin record itself
//! - [`stats`] - Aggregate statistics over a snapshot of admins
//! - [`validation`] - Field validation for incoming admin data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod stats;
pub mod types;
pub mod validation;

pub use stats::{NO_ADMINS_FOUND, StatisticsSummary, compute_statistics, is_active};
pub use types::*;
pub use validation::{Violation, validate_admin_input};
