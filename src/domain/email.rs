//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Something non-blank, an `@`, something non-blank, a `.`, something non-blank.
///
/// The pattern is unanchored: it only has to occur somewhere in the input.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// A type-safe wrapper for email addresses.
///
/// The check is deliberately loose, matching what the contact form accepts.
///
/// # Example
///
/// ```
/// use varnan_site::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmailRequired` for blank input and
    /// `ValidationError::InvalidEmail` when the shape does not match.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(email))
    }

    /// Check the address shape without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert_eq!(EmailAddress::new(""), Err(ValidationError::EmailRequired));
        assert_eq!(EmailAddress::new("   "), Err(ValidationError::EmailRequired));
        assert_eq!(EmailAddress::new("invalid"), Err(ValidationError::InvalidEmail));
        assert_eq!(EmailAddress::new("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(EmailAddress::new("user@"), Err(ValidationError::InvalidEmail));
        assert_eq!(EmailAddress::new("user@domain"), Err(ValidationError::InvalidEmail));
        assert_eq!(EmailAddress::new("user@domain."), Err(ValidationError::InvalidEmail));
        assert!(EmailAddress::new("valid@example.com").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_pattern_is_unanchored() {
        // Only a matching run is required, surrounding text is tolerated
        assert!(EmailAddress::is_valid("reach me at a@b.co please"));
        assert!(EmailAddress::is_valid("a@@b.c"));
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
