use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Name of the header carrying the caller's email on profile updates.
pub const IDENTITY_HEADER: &str = "email";

/// Caller identity as claimed by the `email` header. Absent, empty or
/// non-UTF-8 values yield `None`; the service decides how to reject.
pub struct IdentityEmail(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for IdentityEmail
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(IDENTITY_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Ok(IdentityEmail(email))
    }
}
