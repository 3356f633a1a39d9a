use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::{
    repo::{StoreError, UserStore},
    repo_types::{NewUser, User},
};

/// In-process store with the same uniqueness and atomicity guarantees as the
/// Postgres one.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().await.get(email).cloned())
    }

    async fn insert(&self, user: NewUser<'_>) -> Result<User, StoreError> {
        let mut users = self.users.lock().await;
        if users.contains_key(user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let record = User {
            id: Uuid::new_v4(),
            email: user.email.to_owned(),
            password_hash: user.password_hash.to_owned(),
            first_name: user.first_name.to_owned(),
            last_name: user.last_name.to_owned(),
            created_at: user.created_at,
            updated_at: None,
        };
        users.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn update_first_name(
        &self,
        email: &str,
        first_name: &str,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.lock().await;
        Ok(users.get_mut(email).map(|u| {
            u.first_name = first_name.to_owned();
            u.updated_at = Some(updated_at);
            u.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser<'_> {
        NewUser {
            email,
            password_hash: "$argon2id$stub",
            first_name: "Ann",
            last_name: "Lee",
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = MemoryUserStore::new();
        store.insert(new_user("a@x.com")).await.expect("first insert");
        let err = store.insert(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let store = MemoryUserStore::new();
        store.insert(new_user("a@x.com")).await.unwrap();
        assert!(store.find_by_email("A@x.com").await.unwrap().is_none());
        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_unknown_email_returns_none() {
        let store = MemoryUserStore::new();
        let res = store
            .update_first_name("nobody@x.com", "X", OffsetDateTime::now_utc())
            .await
            .unwrap();
        assert!(res.is_none());
    }
}
