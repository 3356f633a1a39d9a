use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::{auth::claims::TokenClaims, config::JwtConfig};

/// Signs bearer tokens with the process-wide secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    /// `None` for an empty secret: an issuer never exists without a usable key.
    pub fn new(secret: &str) -> Option<Self> {
        if secret.trim().is_empty() {
            return None;
        }
        Some(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn from_config(cfg: &JwtConfig) -> Option<Self> {
        cfg.secret.as_deref().and_then(Self::new)
    }

    pub fn issue(&self, user_id: Uuid) -> anyhow::Result<String> {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &TokenClaims::for_user(user_id),
            &self.encoding,
        )?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    /// Checks the signature and returns the payload. Tokens carry no expiry.
    pub fn verify(&self, token: &str) -> anyhow::Result<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        let data = decode::<TokenClaims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.user.id, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::decode_header;

    #[test]
    fn empty_or_missing_secret_yields_no_issuer() {
        assert!(TokenIssuer::new("").is_none());
        assert!(TokenIssuer::new("   ").is_none());
        assert!(TokenIssuer::from_config(&JwtConfig { secret: None }).is_none());
        assert!(TokenIssuer::from_config(&JwtConfig {
            secret: Some("s3cret".into())
        })
        .is_some());
    }

    #[test]
    fn issued_token_binds_user_id() {
        let issuer = TokenIssuer::new("dev-secret").unwrap();
        let user_id = Uuid::new_v4();
        let token = issuer.issue(user_id).expect("sign");
        let claims = issuer.verify(&token).expect("verify");
        assert_eq!(claims, TokenClaims::for_user(user_id));
        assert_eq!(decode_header(&token).unwrap().alg, Algorithm::HS256);
    }

    #[test]
    fn payload_is_exactly_user_id() {
        let issuer = TokenIssuer::new("dev-secret").unwrap();
        let user_id = Uuid::new_v4();
        let token = issuer.issue(user_id).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"dev-secret"),
            &validation,
        )
        .unwrap()
        .claims;
        assert_eq!(raw, serde_json::json!({ "user": { "id": user_id.to_string() } }));
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let good = TokenIssuer::new("secret-a").unwrap();
        let bad = TokenIssuer::new("secret-b").unwrap();
        let token = good.issue(Uuid::new_v4()).unwrap();
        assert!(bad.verify(&token).is_err());
    }
}
