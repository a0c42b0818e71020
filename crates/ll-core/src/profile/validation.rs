//! Field validators.
//!
//! Pure predicates, called by the presentation layer on every change event.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Profile;

/// `local@domain.tld` shape check. Not an RFC 5322 parser.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Non-empty and ASCII letters only. Digits, whitespace, punctuation and
/// accented or non-Latin letters are rejected.
pub fn validate_name(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn validate_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

/// Both required fields pass their validators.
pub fn is_complete(profile: &Profile) -> bool {
    validate_name(&profile.first_name) && validate_email(&profile.email)
}

/// Profile fields that carry a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

impl ProfileField {
    /// Inline message shown under an invalid, non-empty field.
    pub fn error_message(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name must contain only letters.",
            ProfileField::LastName => "Last name must contain only letters.",
            ProfileField::Email => "Enter a valid email address.",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileField::FirstName => "first name",
            ProfileField::LastName => "last name",
            ProfileField::Email => "email",
        };
        f.write_str(name)
    }
}

/// Fields that failed validation. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid profile fields: {}", join_fields(.fields))]
pub struct ValidationErrors {
    fields: Vec<ProfileField>,
}

impl ValidationErrors {
    pub fn new(fields: Vec<ProfileField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[ProfileField] {
        &self.fields
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.fields.contains(&field)
    }

    /// Required-field check used before persisting a profile.
    pub fn check_required(profile: &Profile) -> Result<(), ValidationErrors> {
        let mut fields = Vec::new();
        if !validate_name(&profile.first_name) {
            fields.push(ProfileField::FirstName);
        }
        if !validate_email(&profile.email) {
            fields.push(ProfileField::Email);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(fields))
        }
    }
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
