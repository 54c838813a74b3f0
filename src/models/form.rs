//! Contact form state models.

use crate::domain::{normalize_phone, FormField, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current values of the four contact form inputs.
///
/// The phone value only ever holds up to ten ASCII digits: every write goes
/// through [`FormState::set`], which normalizes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl FormState {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field's current value.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Store a new value for a field.
    ///
    /// Phone input is reduced to its first ten digits before it is stored.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = normalize_phone(value),
            FormField::Message => self.message = value.to_string(),
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Snapshot the values as the request payload.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

/// Body of the contact API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Per-field validation errors. A field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop a field's error. Returns whether there was one.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in on-screen field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Fields the visitor has left at least once, or that a submit attempt marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    fields: BTreeSet<FormField>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: FormField) {
        self.fields.insert(field);
    }

    /// Mark every field, as a submit attempt does.
    pub fn touch_all(&mut self) {
        self.fields.extend(FormField::ALL);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_normalized_on_write() {
        let mut form = FormState::new();
        form.set(FormField::Phone, "abc12-3456789xyz");
        assert_eq!(form.phone(), "123456789");

        form.set(FormField::Phone, "98736845670000");
        assert_eq!(form.phone(), "9873684567");
    }

    #[test]
    fn test_other_fields_store_verbatim() {
        let mut form = FormState::new();
        form.set(FormField::Name, "  Vernita  ");
        form.set(FormField::Message, "Line one\nLine two");
        assert_eq!(form.name(), "  Vernita  ");
        assert_eq!(form.get(FormField::Message), "Line one\nLine two");
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut form = FormState::new();
        for field in FormField::ALL {
            form.set(field, "1");
        }
        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_submission_serialization() {
        let mut form = FormState::new();
        form.set(FormField::Name, "Asha");
        form.set(FormField::Email, "asha@example.com");
        form.set(FormField::Phone, "9873684567");
        form.set(FormField::Message, "Hello");

        let json = serde_json::to_value(form.to_submission()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "9873684567",
                "message": "Hello"
            })
        );
    }

    #[test]
    fn test_validation_errors_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(FormField::Email, ValidationError::InvalidEmail);
        assert!(errors.contains(FormField::Email));
        assert!(errors.clear_field(FormField::Email));
        assert!(!errors.clear_field(FormField::Email));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_touch_all() {
        let mut touched = TouchedSet::new();
        touched.touch(FormField::Name);
        touched.touch_all();
        assert_eq!(touched.len(), 4);
        assert!(FormField::ALL.iter().all(|f| touched.is_touched(*f)));
    }
}
