use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keeps string values only; any other JSON type reads as absent so that the
/// validator reports it against its own field.
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Request body for user registration. Fields are optional so that absent
/// values surface as field-level validation errors rather than parse errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub last_name: Option<String>,
}

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub password: Option<String>,
}

/// Request body for profile update. The identity travels in the `email` header.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub name: Option<String>,
}

/// Response returned after registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub authtoken: String,
    pub email: String,
}

/// Response returned after login or profile update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authtoken: String,
    pub user_name: String,
    pub user_email: String,
}
