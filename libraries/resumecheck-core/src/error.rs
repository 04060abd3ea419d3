/// Client-side validation errors for ResumeCheck
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type alias using `ValidationError`
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Upload pre-check failures.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// MIME type outside PDF/DOC/DOCX
    #[error("Please select a PDF, DOC, or DOCX file")]
    UnsupportedFileType(String),

    /// File larger than the upload limit
    #[error("File size must be less than 5MB")]
    FileTooLarge(u64),

    /// Upload attempted without a selected file
    #[error("Please select a file to upload")]
    NoFileSelected,
}

/// Form field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Field label as shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field validation messages collected before a form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, keeping the first one if already set
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Drop the message for a field (the user started editing it)
    pub fn clear(&mut self, field: FormField) {
        self.fields.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> std::result::Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::Email, "Email is required");
        errors.insert(FormField::Email, "Email is invalid");

        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_display_lists_fields_in_form_order() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::Password, "Password is required");
        errors.insert(FormField::Name, "Name is required");

        assert_eq!(
            errors.to_string(),
            "Full Name: Name is required; Password: Password is required"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FormErrors::new().into_result().is_ok());

        let mut errors = FormErrors::new();
        errors.insert(FormField::Name, "Name is required");
        errors.clear(FormField::Name);
        assert!(errors.into_result().is_ok());
    }
}
