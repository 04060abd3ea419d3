//! Client-side validation
//!
//! Every check here runs before any network call. Upload checks reject the
//! file outright; form checks collect one message per field so the page can
//! show them inline.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FormErrors, FormField, Result, ValidationError};

/// Largest accepted upload: 5 MiB
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// PDF, DOC and DOCX
pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Minimum password length for registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum display name length for registration
pub const MIN_NAME_LEN: usize = 2;

/// A file picked for upload, described by what the picker reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Check MIME type, then size.
pub fn validate_upload(candidate: &UploadCandidate) -> Result<()> {
    if !ACCEPTED_MIME_TYPES.contains(&candidate.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedFileType(
            candidate.mime_type.clone(),
        ));
    }

    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge(candidate.size));
    }

    Ok(())
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok())
        .as_ref()
}

/// Loose email shape check: something@something.something
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

/// At least one ASCII lowercase letter, uppercase letter and digit
pub fn has_password_complexity(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> std::result::Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        } else if self.name.chars().count() < MIN_NAME_LEN {
            errors.insert(FormField::Name, "Name must be at least 2 characters");
        }

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(FormField::Password, "Password must be at least 6 characters");
        } else if !has_password_complexity(&self.password) {
            errors.insert(
                FormField::Password,
                "Password must contain uppercase, lowercase, and number",
            );
        }

        if self.confirm_password.is_empty() {
            errors.insert(FormField::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(FormField::ConfirmPassword, "Passwords do not match");
        }

        errors.into_result()
    }
}

/// Login form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> std::result::Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        }

        errors.into_result()
    }
}

fn check_email(email: &str, errors: &mut FormErrors) {
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(FormField::Email, "Email is invalid");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterForm {
        RegisterForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "Secret1".into(),
            confirm_password: "Secret1".into(),
        }
    }

    #[test]
    fn test_accepts_each_document_type() {
        for mime in ACCEPTED_MIME_TYPES {
            let file = UploadCandidate::new("cv", mime, 1024);
            assert!(validate_upload(&file).is_ok(), "{} should be accepted", mime);
        }
    }

    #[test]
    fn test_rejects_other_types() {
        let file = UploadCandidate::new("cv.png", "image/png", 1024);
        assert_eq!(
            validate_upload(&file),
            Err(ValidationError::UnsupportedFileType("image/png".into()))
        );
        assert_eq!(
            validate_upload(&file).unwrap_err().to_string(),
            "Please select a PDF, DOC, or DOCX file"
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = UploadCandidate::new("cv.pdf", "application/pdf", MAX_UPLOAD_BYTES);
        assert!(validate_upload(&at_limit).is_ok());

        let over = UploadCandidate::new("cv.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1);
        let err = validate_upload(&over).unwrap_err();
        assert_eq!(err, ValidationError::FileTooLarge(MAX_UPLOAD_BYTES + 1));
        assert_eq!(err.to_string(), "File size must be less than 5MB");
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = UploadCandidate::new("huge.exe", "application/x-msdownload", u64::MAX);
        assert!(matches!(
            validate_upload(&file),
            Err(ValidationError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_valid_registration() {
        assert!(valid_register().validate().is_ok());
    }

    #[test]
    fn test_registration_reports_every_field() {
        let errors = RegisterForm::default().validate().unwrap_err();

        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let form = RegisterForm {
            name: "   ".into(),
            ..valid_register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn test_short_name() {
        let form = RegisterForm {
            name: "J".into(),
            ..valid_register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_invalid_email() {
        let form = RegisterForm {
            email: "jane.example.com".into(),
            ..valid_register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_short_password_checked_before_complexity() {
        let form = RegisterForm {
            password: "Ab1".into(),
            confirm_password: "Ab1".into(),
            ..valid_register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(FormField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_password_complexity() {
        for weak in ["alllowercase1", "ALLUPPERCASE1", "NoDigitsHere"] {
            let form = RegisterForm {
                password: weak.into(),
                confirm_password: weak.into(),
                ..valid_register()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get(FormField::Password),
                Some("Password must contain uppercase, lowercase, and number"),
                "{} should fail complexity",
                weak
            );
        }
    }

    #[test]
    fn test_password_mismatch() {
        let form = RegisterForm {
            confirm_password: "Secret2".into(),
            ..valid_register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_login_form() {
        let ok = LoginForm {
            email: "jane@example.com".into(),
            password: "anything".into(),
        };
        assert!(ok.validate().is_ok());

        let errors = LoginForm {
            email: "nope".into(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Email is invalid"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
    }
}
