//! Data models for the site controllers.
//!
//! This module contains the contact form's state, error and touch tracking
//! types, the submission payload, the toast notification and the navigation
//! bar state.

pub mod form;
pub mod nav;
pub mod toast;

pub use form::{ContactSubmission, FormState, TouchedSet, ValidationErrors};
pub use nav::{NavLink, NavState};
pub use toast::{Toast, ToastKind};
