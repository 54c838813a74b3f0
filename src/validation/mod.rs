//! Contact form validation.
//!
//! [`validate`] is a pure function of the form values. It always checks every
//! field, so the resulting map is fully determined by the [`FormState`].

use crate::domain::{EmailAddress, FormField, PhoneNumber, ValidationError};
use crate::models::{FormState, ValidationErrors};

/// Outcome of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: ValidationErrors,
}

impl ValidationReport {
    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every field of the form.
pub fn validate(form: &FormState) -> ValidationReport {
    let mut errors = ValidationErrors::new();

    for field in FormField::ALL {
        if let Err(error) = validate_field(field, form.get(field)) {
            errors.insert(field, error);
        }
    }

    ValidationReport { errors }
}

/// Validate a single value as the given field.
pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    match field {
        FormField::Name => require(value, ValidationError::NameRequired),
        FormField::Email => EmailAddress::new(value).map(|_| ()),
        FormField::Phone => PhoneNumber::new(value).map(|_| ()),
        FormField::Message => require(value, ValidationError::MessageRequired),
    }
}

fn require(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(missing)
    } else {
        Ok(())
    }
}
