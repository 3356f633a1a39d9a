use std::sync::Arc;

use anyhow::Context;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::auth::{
    dto::{LoginRequest, RegisterRequest, UpdateRequest},
    errors::AuthError,
    jwt::TokenIssuer,
    password::{hash_password, verify_password},
    repo::UserStore,
    repo_types::{NewUser, User},
    validation::{validate_login, validate_registration, validate_update},
};

/// A freshly minted token together with the user it is bound to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Orchestrates register, login and profile update.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    issuer: Option<TokenIssuer>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, issuer: Option<TokenIssuer>) -> Self {
        Self { store, issuer }
    }

    fn issuer(&self) -> Result<&TokenIssuer, AuthError> {
        self.issuer.as_ref().ok_or(AuthError::Configuration)
    }

    fn issue_for(&self, issuer: &TokenIssuer, user: User) -> Result<Session, AuthError> {
        let token = issuer.issue(user.id).context("sign token")?;
        Ok(Session { token, user })
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<Session, AuthError> {
        let reg = validate_registration(&req).map_err(AuthError::Validation)?;
        let issuer = self.issuer()?;

        // Fast path only; the store's unique constraint decides on insert.
        if self.store.find_by_email(&reg.email).await?.is_some() {
            warn!(email = %reg.email, "email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let password = reg.password.clone();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .context("hash task panicked")?
            .context("hash password")?;

        let user = self
            .store
            .insert(NewUser {
                email: &reg.email,
                password_hash: &hash,
                first_name: &reg.first_name,
                last_name: &reg.last_name,
                created_at: OffsetDateTime::now_utc(),
            })
            .await
            .map_err(|e| {
                let e = AuthError::from(e);
                if matches!(e, AuthError::DuplicateEmail) {
                    warn!(email = %reg.email, "email registered concurrently");
                }
                e
            })?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        self.issue_for(issuer, user)
    }

    pub async fn login(&self, req: LoginRequest) -> Result<Session, AuthError> {
        let creds = validate_login(&req).map_err(AuthError::Validation)?;
        let issuer = self.issuer()?;

        let Some(user) = self.store.find_by_email(&creds.email).await? else {
            warn!(email = %creds.email, "login unknown email");
            return Err(AuthError::UserNotFound);
        };

        let (password, stored) = (creds.password.clone(), user.password_hash.clone());
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .context("verify task panicked")?;
        if !matches {
            warn!(email = %creds.email, user_id = %user.id, "login invalid password");
            return Err(AuthError::WrongPassword);
        }

        info!(user_id = %user.id, email = %user.email, "user logged in");
        self.issue_for(issuer, user)
    }

    /// `identity` is the caller-supplied email (the `email` request header).
    pub async fn update_profile(
        &self,
        identity: Option<&str>,
        req: UpdateRequest,
    ) -> Result<Session, AuthError> {
        let name = validate_update(&req).map_err(|errors| {
            warn!("validation errors in update request");
            AuthError::Validation(errors)
        })?;
        let issuer = self.issuer()?;

        let Some(email) = identity else {
            warn!("email not found in the request headers");
            return Err(AuthError::MissingIdentity);
        };

        let Some(user) = self
            .store
            .update_first_name(email, &name, OffsetDateTime::now_utc())
            .await?
        else {
            warn!(email = %email, "user not found for update");
            return Err(AuthError::UserNotFound);
        };

        info!(user_id = %user.id, email = %user.email, "user profile updated");
        self.issue_for(issuer, user)
    }
}
