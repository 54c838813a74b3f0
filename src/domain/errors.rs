//! Domain validation errors.

use std::fmt;

/// Errors shown next to a contact form field.
///
/// The `Display` text is exactly what the visitor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field is blank.
    NameRequired,

    /// The email field is blank.
    EmailRequired,

    /// The email field does not look like an address.
    InvalidEmail,

    /// The phone field is blank.
    PhoneRequired,

    /// The phone field is not exactly ten digits.
    InvalidPhone,

    /// The message field is blank.
    MessageRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required."),
            Self::EmailRequired => write!(f, "Email is required."),
            Self::InvalidEmail => write!(f, "Email is invalid."),
            Self::PhoneRequired => write!(f, "Phone is required."),
            Self::InvalidPhone => write!(f, "Phone must be exactly 10 digits."),
            Self::MessageRequired => write!(f, "Message is required."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required.");
        assert_eq!(ValidationError::EmailRequired.to_string(), "Email is required.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Email is invalid.");
        assert_eq!(ValidationError::PhoneRequired.to_string(), "Phone is required.");
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Phone must be exactly 10 digits."
        );
        assert_eq!(
            ValidationError::MessageRequired.to_string(),
            "Message is required."
        );
    }
}
