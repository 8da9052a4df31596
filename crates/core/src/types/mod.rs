//! Core types for Adminhub.
//!
//! This module provides type-safe wrappers for the admin domain.

pub mod admin;
pub mod email;
pub mod id;

pub use admin::{AdminInput, AdminRecord, NewAdmin};
pub use email::{Email, EmailError};
pub use id::*;
