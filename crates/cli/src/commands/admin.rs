//! Admin management commands.
//!
//! # Usage
//!
//! ```bash
//! adminhub admin create -e admin@example.com -n "Admin Name" -a 42
//! ```

use adminhub_core::AdminInput;
use adminhub_server::services::AdminServiceError;

use super::{CommandError, connect, service};

/// Create a new admin.
///
/// Applies the same validation as `POST /api/admins`.
///
/// # Returns
///
/// The ID of the created admin.
///
/// # Errors
///
/// Returns an error if the input is invalid, the email is taken, or the
/// database is unreachable.
pub async fn create(email: &str, name: &str, age: i32) -> Result<i64, CommandError> {
    let (_, pool) = connect().await?;

    tracing::info!("Creating admin: {} ({})", name, email);

    let input = AdminInput::new(name, email, age);
    let created = match service(pool).create_admin(&input).await {
        Ok(created) => created,
        Err(AdminServiceError::Validation(violations)) => {
            for violation in &violations {
                tracing::error!("{}: {}", violation.field, violation.message);
            }
            return Err(AdminServiceError::Validation(violations).into());
        }
        Err(e) => return Err(e.into()),
    };

    let id = created.id.map_or(0, |id| id.as_i64());
    tracing::info!("Admin created successfully! ID: {}, Email: {}", id, email);

    Ok(id)
}
