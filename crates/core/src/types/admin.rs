//! Admin domain types.
//!
//! - [`AdminInput`] is what a caller submits, unvalidated.
//! - [`NewAdmin`] is validated data ready to be written to a store.
//! - [`AdminRecord`] is what a store hands back.

use serde::{Deserialize, Serialize};

use super::{AdminId, Email};

/// An administrator as held by a record store.
///
/// `email` and `age` are optional so that statistics can be computed over
/// partially populated snapshots; records missing either are never active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// Store-assigned identifier, absent for unsaved records.
    pub id: Option<AdminId>,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: Option<Email>,
    /// Age in years.
    pub age: Option<i32>,
}

impl AdminRecord {
    /// Build an unsaved record from validated data.
    #[must_use]
    pub fn unsaved(admin: NewAdmin) -> Self {
        Self {
            id: None,
            name: admin.name,
            email: Some(admin.email),
            age: Some(admin.age),
        }
    }

    /// Build a stored record from validated data and its assigned ID.
    #[must_use]
    pub fn stored(id: AdminId, admin: NewAdmin) -> Self {
        Self {
            id: Some(id),
            ..Self::unsaved(admin)
        }
    }
}

/// Unvalidated admin fields as submitted by a caller.
///
/// Every field is optional so missing values surface as validation
/// violations rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl AdminInput {
    /// Convenience constructor with every field present.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
        }
    }
}

/// Validated admin fields, ready to be inserted or applied as an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub name: String,
    pub email: Email,
    pub age: i32,
}
