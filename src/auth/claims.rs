use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload: `{ "user": { "id": "<uuid>" } }` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: UserClaim,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: Uuid,
}

impl TokenClaims {
    pub fn for_user(id: Uuid) -> Self {
        Self {
            user: UserClaim { id },
        }
    }
}
