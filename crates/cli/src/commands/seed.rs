//! Seed the database with the demo admins.

use tracing::info;

use super::{CommandError, connect, service};

/// Insert the demo admins whose emails are not already taken.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn demo_admins() -> Result<(), CommandError> {
    let (_, pool) = connect().await?;
    let inserted = service(pool).seed_demo_data().await?;

    info!(inserted, "Demo admins seeded");
    Ok(())
}
