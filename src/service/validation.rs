//! Request validation for student payloads.

use crate::error::AppError;
use crate::model::{NewStudent, StudentUpdate};
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload: name and email present, age not negative.
    pub fn validate_new(body: &NewStudent) -> Result<(), AppError> {
        require_text("name", &body.name)?;
        require_text("email", &body.email)?;
        require_non_negative("age", body.age)
    }

    /// Validate an update payload. Same rules as create, plus email syntax.
    pub fn validate_update(body: &StudentUpdate) -> Result<(), AppError> {
        require_text("name", &body.name)?;
        require_text("email", &body.email)?;
        require_email("email", &body.email)?;
        require_non_negative("age", body.age)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_email(field: &str, value: &str) -> Result<(), AppError> {
    if !email_regex().is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{} must be at least 0", field)));
    }
    Ok(())
}
