use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use time::OffsetDateTime;

use crate::auth::repo_types::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Name of the unique constraint on `users.email` (see migrations).
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db)
                if db.is_unique_violation() && db.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
            {
                StoreError::DuplicateEmail
            }
            other => StoreError::Database(other),
        }
    }
}

/// Persistence port for user credentials, keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user. Returns `StoreError::DuplicateEmail` when the email is taken.
    async fn insert(&self, user: NewUser<'_>) -> Result<User, StoreError>;

    /// Sets `first_name` and `updated_at` in one atomic step. `None` if no user has `email`.
    async fn update_first_name(
        &self,
        email: &str,
        first_name: &str,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser<'_>) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.created_at)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn update_first_name(
        &self,
        email: &str,
        first_name: &str,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET first_name = $2, updated_at = $3
             WHERE email = $1
            RETURNING id, email, password_hash, first_name, last_name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(first_name)
        .bind(updated_at)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
