use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                              // assigned by the store
    pub email: String,                         // unique, case-sensitive
    #[serde(skip_serializing)]
    pub password_hash: String,                 // Argon2 PHC string, not exposed in JSON
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,    // set by profile updates
}

/// Fields supplied by the service when creating a user.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub created_at: OffsetDateTime,
}
