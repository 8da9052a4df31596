//! Admin management service.
//!
//! Sits between the HTTP handlers and the record store: applies validation,
//! turns missing rows and duplicate emails into typed errors, and computes
//! statistics over a fresh snapshot.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use adminhub_core::{
    AdminId, AdminInput, AdminRecord, NewAdmin, StatisticsSummary, Violation, compute_statistics,
    is_active, validate_admin_input,
};

use crate::db::{AdminStore, RepositoryError};

/// Admins inserted by [`AdminService::seed_demo_data`].
pub const DEMO_ADMINS: &[(&str, &str, i32)] = &[
    ("Aravind", "aravind@example.com", 26),
    ("Sebastian", "sebastian@example.com", 30),
];

/// Errors returned by admin service operations.
#[derive(Debug, Error)]
pub enum AdminServiceError {
    /// One or more fields failed validation.
    #[error("validation failed")]
    Validation(Vec<Violation>),

    /// Fields were well-formed but not acceptable for a new admin.
    #[error("Invalid admin data")]
    InvalidAdminData,

    /// No admin with this ID.
    #[error("Admin not found")]
    NotFound(AdminId),

    /// Another admin already uses this email.
    #[error("Email already exists")]
    DuplicateEmail(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Admin CRUD and statistics over an injected record store.
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn AdminStore>,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService").finish_non_exhaustive()
    }
}

impl AdminService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn AdminStore>) -> Self {
        Self { store }
    }

    /// The record store this service reads and writes.
    #[must_use]
    pub fn store(&self) -> &dyn AdminStore {
        self.store.as_ref()
    }

    /// Create a new admin.
    ///
    /// Beyond field validation, a new admin must have an age greater than zero.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field is invalid
    /// - `InvalidAdminData` if the age is zero
    /// - `DuplicateEmail` if the email is already taken
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn create_admin(&self, input: &AdminInput) -> Result<AdminRecord, AdminServiceError> {
        debug!("Attempting to create admin");
        let admin = validate_admin_input(input).map_err(AdminServiceError::Validation)?;

        if admin.age <= 0 {
            return Err(AdminServiceError::InvalidAdminData);
        }

        if self.store.exists_by_email(&admin.email).await? {
            warn!(email = %admin.email, "Failed to create admin - email already exists");
            return Err(AdminServiceError::DuplicateEmail(admin.email.into_inner()));
        }

        let created = self
            .store
            .insert(&admin)
            .await
            .map_err(|e| conflict_as_duplicate(e, &admin))?;
        info!(id = ?created.id, "Successfully created admin");
        Ok(created)
    }

    /// Get an admin by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no admin has this ID.
    #[instrument(skip(self))]
    pub async fn get_admin(&self, id: AdminId) -> Result<AdminRecord, AdminServiceError> {
        debug!("Fetching admin");
        let admin = self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!("Admin not found");
            AdminServiceError::NotFound(id)
        })?;
        debug!("Successfully retrieved admin");
        Ok(admin)
    }

    /// List all active admins (email present, age above zero) in ID order.
    ///
    /// # Errors
    ///
    /// Returns `Repository` if the store cannot be read.
    #[instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<AdminRecord>, AdminServiceError> {
        debug!("Fetching all admins");
        let admins = self.store.fetch_all().await?;
        Ok(admins.into_iter().filter(is_active).collect())
    }

    /// Replace an admin's name, email and age.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field is invalid
    /// - `NotFound` if no admin has this ID
    /// - `DuplicateEmail` if the email belongs to another admin
    #[instrument(skip(self, input))]
    pub async fn update_admin(
        &self,
        id: AdminId,
        input: &AdminInput,
    ) -> Result<AdminRecord, AdminServiceError> {
        debug!("Attempting to update admin");
        let admin = validate_admin_input(input).map_err(AdminServiceError::Validation)?;

        let updated = self
            .store
            .update(id, &admin)
            .await
            .map_err(|e| conflict_as_duplicate(e, &admin))?
            .ok_or_else(|| {
                warn!("Failed to update - admin not found");
                AdminServiceError::NotFound(id)
            })?;
        info!("Successfully updated admin");
        Ok(updated)
    }

    /// Delete an admin.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no admin has this ID.
    #[instrument(skip(self))]
    pub async fn delete_admin(&self, id: AdminId) -> Result<(), AdminServiceError> {
        debug!("Attempting to delete admin");
        if !self.store.exists_by_id(id).await? || !self.store.delete(id).await? {
            warn!("Failed to delete - admin not found");
            return Err(AdminServiceError::NotFound(id));
        }
        info!("Successfully deleted admin");
        Ok(())
    }

    /// Compute statistics over a fresh snapshot of every admin.
    ///
    /// # Errors
    ///
    /// Returns `Repository` if the store cannot be read.
    #[instrument(skip(self))]
    pub async fn statistics(
        &self,
        senior_age_threshold: i32,
    ) -> Result<StatisticsSummary, AdminServiceError> {
        debug!("Calculating admin statistics");
        let snapshot = self.store.fetch_all().await?;
        let statistics = compute_statistics(&snapshot, senior_age_threshold);
        info!(
            total_admins = statistics.total_admins,
            "Successfully calculated admin statistics"
        );
        Ok(statistics)
    }

    /// Insert the demo admins whose emails are not yet present.
    ///
    /// Returns how many were inserted.
    ///
    /// # Errors
    ///
    /// Returns `Repository` if the store cannot be read or written.
    pub async fn seed_demo_data(&self) -> Result<usize, AdminServiceError> {
        let mut inserted = 0;
        for &(name, email, age) in DEMO_ADMINS {
            let admin = validate_admin_input(&AdminInput::new(name, email, age))
                .map_err(AdminServiceError::Validation)?;
            if self.store.exists_by_email(&admin.email).await? {
                debug!(email, "Demo admin already present");
                continue;
            }
            self.store.insert(&admin).await?;
            inserted += 1;
        }
        info!(inserted, "Seeded demo admins");
        Ok(inserted)
    }
}

/// A store-level conflict (lost race or update onto a taken email) is a duplicate email.
fn conflict_as_duplicate(err: RepositoryError, admin: &NewAdmin) -> AdminServiceError {
    match err {
        RepositoryError::Conflict(_) => {
            warn!(email = %admin.email, "Email already exists");
            AdminServiceError::DuplicateEmail(admin.email.as_str().to_owned())
        }
        other => AdminServiceError::Repository(other),
    }
}
