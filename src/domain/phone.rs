//! PhoneNumber value object and phone input normalization.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Control keys the phone input lets through in addition to digits.
const ALLOWED_CONTROL_KEYS: [&str; 7] = [
    "Backspace",
    "Delete",
    "Tab",
    "Escape",
    "Enter",
    "ArrowLeft",
    "ArrowRight",
];

/// Reduce raw phone input to what the form is allowed to store.
///
/// Keeps ASCII digits in order and drops everything after the tenth.
///
/// ```
/// use varnan_site::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("(987) 368-4567 ext 12"), "9873684567");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}

/// Whether a key press may reach the phone input.
///
/// `key` uses DOM `KeyboardEvent.key` names: a single digit, or one of the
/// navigation/deletion keys.
pub fn is_allowed_phone_key(key: &str) -> bool {
    let mut chars = key.chars();
    let is_digit = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit());
    is_digit || ALLOWED_CONTROL_KEYS.contains(&key)
}

/// A ten digit phone number.
///
/// # Example
///
/// ```
/// use varnan_site::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("9873684567").unwrap();
/// assert_eq!(phone.as_str(), "9873684567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneRequired` for blank input and
    /// `ValidationError::InvalidPhone` unless the input is exactly ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.trim().is_empty() {
            return Err(ValidationError::PhoneRequired);
        }

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(phone))
    }

    /// Exactly ten ASCII digits, nothing else.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
