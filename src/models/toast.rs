//! Toast notification model.

use serde::Serialize;

/// Confirmation shown after the API accepts a submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Shown when a failed submission carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// A visible toast.
    pub fn shown(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            message: message.into(),
            kind,
        }
    }

    /// The hidden, empty toast the form starts with.
    pub fn hidden() -> Self {
        Self::default()
    }
}
