//! Domain value objects and types.
//!
//! This module contains the contact form's field identifiers, the value
//! objects for email addresses and phone numbers, and the validation errors
//! shown to the visitor. Value objects validate at construction time so an
//! invalid submission cannot be represented.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::FormField;
pub use phone::{is_allowed_phone_key, normalize_phone, PhoneNumber, PHONE_DIGITS};
