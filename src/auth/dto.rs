use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::auth::services::{is_valid_email, normalize_email};
use crate::validation::{has_invalid_characters, required_text, FieldError, INVALID_CHARACTERS};

pub const NAME_MAX: usize = 30;
pub const EMAIL_MAX: usize = 150;
pub const PASSWORD_MIN: usize = 8;

/// Session token payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,     // user ID
    pub email: String, // shown in the navigation bar
    pub iat: usize,    // issued at
    pub exp: usize,    // expiration time
}

/// Session signing and verification keys.
#[derive(Clone)]
pub struct SessionKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

/// Form body of `POST /login`.
#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Form body of `POST /register`.
#[derive(Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Validated registration data. The password stays on the form and is only
/// ever handed to the hasher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl LoginForm {
    /// Normalised email, or a field error when it is not an address.
    pub fn email(&self) -> Result<String, FieldError> {
        let email = normalize_email(&self.email);
        if has_invalid_characters(&email) {
            Err(FieldError::new("email", INVALID_CHARACTERS))
        } else if is_valid_email(&email) {
            Ok(email)
        } else {
            Err(FieldError::new("email", "Invalid email address."))
        }
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<NewUser, Vec<FieldError>> {
        let mut errors = Vec::new();
        let first_name = required_text(&mut errors, "first_name", &self.first_name, NAME_MAX);
        let last_name = required_text(&mut errors, "last_name", &self.last_name, NAME_MAX);

        let email = normalize_email(&self.email);
        if email.is_empty() {
            errors.push(FieldError::new("email", "This field is required."));
        } else if email.chars().count() > EMAIL_MAX {
            errors.push(FieldError::new(
                "email",
                format!("Must be at most {EMAIL_MAX} characters."),
            ));
        } else if has_invalid_characters(&email) {
            errors.push(FieldError::new("email", INVALID_CHARACTERS));
        } else if !is_valid_email(&email) {
            errors.push(FieldError::new("email", "Invalid email address."));
        }

        if self.password.chars().count() < PASSWORD_MIN {
            errors.push(FieldError::new(
                "password",
                format!("Must be at least {PASSWORD_MIN} characters."),
            ));
        }
        if self.confirm_password != self.password {
            errors.push(FieldError::new("confirm_password", "Passwords must match."));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewUser {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            first_name: "test".into(),
            last_name: "user".into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn register_normalises_email() {
        let user = register_form("  Test@User.COM ", "test2016", "test2016")
            .validate()
            .expect("valid");
        assert_eq!(user.email, "test@user.com");
        assert_eq!(user.first_name, "test");
    }

    #[test]
    fn register_rejects_bad_email_and_short_password() {
        let errors = register_form("not-an-email", "short", "short")
            .validate()
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn register_requires_matching_confirmation() {
        let errors = register_form("a@b.co", "password1", "password2")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("confirm_password", "Passwords must match.")]);
    }

    #[test]
    fn register_requires_names() {
        let form = RegisterForm {
            email: "a@b.co".into(),
            password: "password1".into(),
            confirm_password: "password1".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["first_name", "last_name"]);
    }

    #[test]
    fn register_rejects_nul_in_names_and_email() {
        let mut form = register_form("a@b.co\0", "password1", "password1");
        form.first_name = "a\0".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("first_name", INVALID_CHARACTERS),
                FieldError::new("email", INVALID_CHARACTERS),
            ]
        );
    }

    #[test]
    fn login_email_with_nul_is_rejected() {
        let form = LoginForm {
            email: "admin@admin.com\0".into(),
            password: String::new(),
        };
        assert_eq!(form.email().unwrap_err().message, INVALID_CHARACTERS);
    }

    #[test]
    fn login_email_is_normalised_or_rejected() {
        let form = LoginForm {
            email: " Admin@Admin.com".into(),
            password: String::new(),
        };
        assert_eq!(form.email().unwrap(), "admin@admin.com");

        let bad = LoginForm {
            email: "admin".into(),
            password: String::new(),
        };
        assert_eq!(bad.email().unwrap_err().field, "email");
    }
}
