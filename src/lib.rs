//! Varnan Site - interactive core of the Varnan Films website.
//!
//! This library holds the behavior behind the site's navigation bar and its
//! "Join the Story" contact form, independent of any rendering technology.
//!
//! # Architecture
//!
//! - **domain**: Field identifiers, email/phone value objects, validation errors
//! - **models**: Form state, touched set, error map, toast and navigation state
//! - **validation**: Pure validation of the whole form
//! - **client**: HTTP client for the contact API
//! - **notifications**: Auto-dismissing toast slot
//! - **controllers**: Contact form and navigation controllers
//! - **view**: Render models derived from controller state
//! - **session**: Line-oriented driver used by the binary
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **metrics**: Submission counters

pub mod client;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notifications;
pub mod session;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactClient};
pub use config::Config;
pub use controllers::{ContactFormController, NavController, SubmitOutcome};
pub use domain::{FormField, ValidationError};
pub use error::{ConfigError, ContactApiError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactSubmission, FormState, NavLink, NavState, Toast, ToastKind};
pub use notifications::ToastNotifier;
pub use validation::{validate, ValidationReport};
pub use view::{FormView, NavView};
