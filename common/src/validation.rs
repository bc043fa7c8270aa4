//! Form checks that run before any request is sent, plus the request
//! generation counter pages use to drop stale list responses.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::model::user::{RegisterInput, Role};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Registration form as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub group_id: Option<i64>,
}

impl RegistrationDraft {
    /// Self-registration always asks for the student role; staff are
    /// promoted by an administrator.
    pub fn validate(&self) -> Result<RegisterInput, ValidationError> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegisterInput {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            patronymic: self.patronymic.trim().to_string(),
            group_id: self.group_id,
            role: Role::Student.as_str().to_string(),
        })
    }
}

/// Login form check; the server decides the rest.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Tags list fetches so that only the latest response is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Starts a new request and returns its tag.
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.0 == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Анна".into(),
            last_name: "Смирнова".into(),
            patronymic: String::new(),
            email: "anna@uni.ru".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            group_id: Some(4),
        }
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("a@b.ru"));
        assert!(is_valid_email(" user.name@mail.example.com "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.ru"));
        assert!(!is_valid_email("@c.ru"));
    }

    #[test]
    fn registration_checks() {
        let input = draft().validate().unwrap();
        assert_eq!(input.role, "student");
        assert_eq!(input.group_id, Some(4));

        let mut bad = draft();
        bad.confirm_password = "other".into();
        assert_eq!(bad.validate(), Err(ValidationError::PasswordMismatch));

        let mut bad = draft();
        bad.password = "123".into();
        bad.confirm_password = "123".into();
        assert_eq!(bad.validate(), Err(ValidationError::PasswordTooShort(6)));

        let mut bad = draft();
        bad.email = "anna".into();
        assert_eq!(bad.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn stale_generations() {
        let mut generation = RequestGeneration::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
