use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{post, put},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, RegisterResponse, SessionResponse, UpdateRequest},
        errors::{AuthError, FieldError},
        extractors::IdentityEmail,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/update", put(update))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AuthError> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        warn!(error = %rejection, "unreadable request body");
        AuthError::Validation(vec![FieldError::new("body", "Invalid JSON body")])
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AuthError> {
    let session = state.auth.register(body(payload)?).await?;
    Ok(Json(RegisterResponse {
        authtoken: session.token,
        email: session.user.email,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AuthError> {
    let session = state.auth.login(body(payload)?).await?;
    Ok(Json(SessionResponse {
        authtoken: session.token,
        user_name: session.user.first_name,
        user_email: session.user.email,
    }))
}

#[instrument(skip(state, identity, payload))]
pub async fn update(
    State(state): State<AppState>,
    IdentityEmail(identity): IdentityEmail,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AuthError> {
    let session = state
        .auth
        .update_profile(identity.as_deref(), body(payload)?)
        .await?;
    Ok(Json(SessionResponse {
        authtoken: session.token,
        user_name: session.user.first_name,
        user_email: session.user.email,
    }))
}
