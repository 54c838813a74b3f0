//! Contact form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four contact form inputs.
///
/// Ordering follows the on-screen order, which keeps error maps and rendered
/// field lists stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// All fields in on-screen order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Placeholder text shown in the empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name*",
            FormField::Email => "Your email*",
            FormField::Phone => "Phone*",
            FormField::Message => "Your message*",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "message" => Ok(FormField::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!("name".parse::<FormField>(), Ok(FormField::Name));
        assert_eq!(" Email ".parse::<FormField>(), Ok(FormField::Email));
        assert!("address".parse::<FormField>().is_err());
    }

    #[test]
    fn test_order_matches_screen() {
        let mut fields = vec![FormField::Message, FormField::Name, FormField::Phone];
        fields.sort();
        assert_eq!(
            fields,
            vec![FormField::Name, FormField::Phone, FormField::Message]
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FormField::Phone).unwrap();
        assert_eq!(json, "\"phone\"");
    }
}
