//! In-memory admin store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use adminhub_core::{AdminId, AdminRecord, Email, NewAdmin};

use super::{AdminStore, RepositoryError};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    admins: BTreeMap<AdminId, AdminRecord>,
}

impl Inner {
    fn email_taken(&self, email: &Email, except: Option<AdminId>) -> bool {
        self.admins
            .iter()
            .any(|(id, admin)| Some(*id) != except && admin.email.as_ref() == Some(email))
    }
}

/// Admin store held in process memory.
///
/// IDs start at 1 and are never reused. Email uniqueness is enforced the same
/// way the `admins.email` constraint enforces it in `PostgreSQL`.
#[derive(Debug, Default)]
pub struct InMemoryAdminStore {
    inner: RwLock<Inner>,
}

impl InMemoryAdminStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn fetch_all(&self) -> Result<Vec<AdminRecord>, RepositoryError> {
        Ok(self.inner.read().await.admins.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError> {
        Ok(self.inner.read().await.admins.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: AdminId) -> Result<bool, RepositoryError> {
        Ok(self.inner.read().await.admins.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        Ok(self.inner.read().await.email_taken(email, None))
    }

    async fn insert(&self, admin: &NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(&admin.email, None) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        inner.next_id += 1;
        let id = AdminId::new(inner.next_id);
        let record = AdminRecord::stored(id, admin.clone());
        inner.admins.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: AdminId,
        admin: &NewAdmin,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let mut inner = self.inner.write().await;
        if !inner.admins.contains_key(&id) {
            return Ok(None);
        }
        if inner.email_taken(&admin.email, Some(id)) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let record = AdminRecord::stored(id, admin.clone());
        inner.admins.insert(id, record.clone());
        Ok(Some(record))
    }

    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().await.admins.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
