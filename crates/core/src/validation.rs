//! Field validation for incoming admin data.
//!
//! Validation runs before a [`NewAdmin`] exists and reports every failing
//! field at once.

use serde::Serialize;

use crate::types::{AdminInput, Email, EmailError, NewAdmin};

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending field as it appears on the wire.
    pub field: &'static str,
    /// Human-readable description of the rule that failed.
    pub message: &'static str,
}

impl Violation {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate submitted admin fields.
///
/// | field   | rule                    | message                |
/// |---------|-------------------------|------------------------|
/// | `name`  | present and not blank   | `Name is required`     |
/// | `email` | present and not blank   | `Email is required`    |
/// | `email` | basic `local@domain`    | `Invalid email format` |
/// | `age`   | present                 | `Age is required`      |
/// | `age`   | `>= 0`                  | `Age must be >= 0`     |
///
/// # Errors
///
/// Returns every [`Violation`] found, in field order.
pub fn validate_admin_input(input: &AdminInput) -> Result<NewAdmin, Vec<Violation>> {
    let mut violations = Vec::new();

    let name = match input.name.as_deref() {
        Some(name) if !name.trim().is_empty() => Some(name.to_owned()),
        _ => {
            violations.push(Violation::new("name", "Name is required"));
            None
        }
    };

    let email = match input.email.as_deref().map(Email::parse) {
        Some(Ok(email)) => Some(email),
        None | Some(Err(EmailError::Blank)) => {
            violations.push(Violation::new("email", "Email is required"));
            None
        }
        Some(Err(_)) => {
            violations.push(Violation::new("email", "Invalid email format"));
            None
        }
    };

    let age = match input.age {
        Some(age) if age >= 0 => Some(age),
        Some(_) => {
            violations.push(Violation::new("age", "Age must be >= 0"));
            None
        }
        None => {
            violations.push(Violation::new("age", "Age is required"));
            None
        }
    };

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) => Ok(NewAdmin { name, email, age }),
        _ => Err(violations),
    }
}
