//! Business logic services.
//!
//! # Services
//!
//! - `admins` - Admin CRUD, validation and statistics

pub mod admins;

pub use admins::{AdminService, AdminServiceError, DEMO_ADMINS};
