use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::{
    dto::{LoginRequest, RegisterRequest, UpdateRequest},
    errors::FieldError,
};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration fields that passed validation, names already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Login fields, present but otherwise unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Violations are reported in field order: email, password, firstName, lastName.
pub fn validate_registration(req: &RegisterRequest) -> Result<ValidRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = req.email.as_deref().filter(|e| is_valid_email(e));
    if email.is_none() {
        errors.push(FieldError::new("email", "Valid email required"));
    }

    let password = req
        .password
        .as_deref()
        .filter(|p| p.chars().count() >= MIN_PASSWORD_LEN);
    if password.is_none() {
        errors.push(FieldError::new("password", "Password must be at least 6 characters"));
    }

    let first_name = non_blank(req.first_name.as_deref());
    if first_name.is_none() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }

    let last_name = non_blank(req.last_name.as_deref());
    if last_name.is_none() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }

    match (email, password, first_name, last_name) {
        (Some(email), Some(password), Some(first_name), Some(last_name)) => Ok(ValidRegistration {
            email: email.to_owned(),
            password: password.to_owned(),
            first_name,
            last_name,
        }),
        _ => Err(errors),
    }
}

pub fn validate_login(req: &LoginRequest) -> Result<Credentials, Vec<FieldError>> {
    let mut errors = Vec::new();
    if req.email.is_none() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if req.password.is_none() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    match (&req.email, &req.password) {
        (Some(email), Some(password)) => Ok(Credentials {
            email: email.clone(),
            password: password.clone(),
        }),
        _ => Err(errors),
    }
}

/// Returns the trimmed display name.
pub fn validate_update(req: &UpdateRequest) -> Result<String, Vec<FieldError>> {
    non_blank(req.name.as_deref()).ok_or_else(|| vec![FieldError::new("name", "Name is required")])
}
