use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;

use super::{
    dto::UserPayload,
    repo::{StoreError, UserStore},
    repo_types::User,
};

/// In-process `UserStore` used to drive handlers without Postgres.
/// Ids start at 1 and are never reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<User, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let user = payload.clone().into_user(inner.last_id);
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, payload: &UserPayload) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(row) = inner.rows.get_mut(&id) {
            *row = payload.clone().into_user(id);
        }
        Ok(payload.echo())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryUserStore::default();
        let created = store.create(&payload("Ann", "a@x.com")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryUserStore::default();
        let first = store.create(&payload("Ann", "a@x.com")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(&payload("Bea", "b@x.com")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn delete_missing_leaves_rows_untouched() {
        let store = MemoryUserStore::default();
        store.create(&payload("Ann", "a@x.com")).await.unwrap();
        let err = store.delete(42).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 42 }));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_id_succeeds_without_effect() {
        let store = MemoryUserStore::default();
        store.create(&payload("Ann", "a@x.com")).await.unwrap();
        let echoed = store.update(9, &payload("Ghost", "g@x.com")).await.unwrap();
        assert_eq!(echoed.id, 0);
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert!(store.get(9).await.is_err());
    }
}
