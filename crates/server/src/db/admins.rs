//! `PostgreSQL` admin store.
//!
//! Queries are checked at runtime (`query_as::<_, Row>`) so the crate builds
//! without a live database.

use async_trait::async_trait;
use sqlx::PgPool;

use adminhub_core::{AdminId, AdminRecord, Email, NewAdmin};

use super::{AdminStore, RepositoryError};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i64,
    name: String,
    email: String,
    age: i32,
}

impl TryFrom<AdminRow> for AdminRecord {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: Some(AdminId::new(row.id)),
            name: row.name,
            email: Some(email),
            age: Some(row.age),
        })
    }
}

/// Map a unique violation on `admins.email` to `RepositoryError::Conflict`.
fn map_unique_violation(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("email already exists".to_owned());
    }
    RepositoryError::Database(e)
}

// =============================================================================
// Store
// =============================================================================

/// Admin store backed by the `admins` table.
#[derive(Debug, Clone)]
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn fetch_all(&self) -> Result<Vec<AdminRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, name, email, age
            FROM admins
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, name, email, age
            FROM admins
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn exists_by_id(&self, id: AdminId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM admins WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert(&self, admin: &NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            INSERT INTO admins (name, email, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, age
            ",
        )
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(admin.age)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        row.try_into()
    }

    async fn update(
        &self,
        id: AdminId,
        admin: &NewAdmin,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            UPDATE admins
            SET name = $2, email = $3, age = $4
            WHERE id = $1
            RETURNING id, name, email, age
            ",
        )
        .bind(id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(admin.age)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
