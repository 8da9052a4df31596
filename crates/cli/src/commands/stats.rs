//! Print admin statistics.

use super::{CommandError, connect, service};

/// Compute statistics over every stored admin and print them as JSON.
///
/// Uses `ADMINHUB_DEFAULT_SENIOR_AGE` when no threshold is given.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn print(senior_age_threshold: Option<i32>) -> Result<(), CommandError> {
    let (config, pool) = connect().await?;
    let threshold = senior_age_threshold.unwrap_or(config.default_senior_age);

    let summary = service(pool).statistics(threshold).await?;
    let json = serde_json::to_string_pretty(&summary)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
