//! Contact form render model.

use crate::controllers::FormSnapshot;
use crate::domain::FormField;
use crate::models::{Toast, ToastKind};
use serde::Serialize;
use std::fmt;

/// Label of the idle submit control.
pub const SUBMIT_LABEL: &str = "Submit";

/// One input as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: FormField,
    pub placeholder: &'static str,
    pub value: String,
    /// Error text, only for touched fields.
    pub error: Option<String>,
    pub disabled: bool,
}

impl FieldView {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButtonView {
    pub disabled: bool,
    /// Spinner shown instead of the label.
    pub busy: bool,
    pub label: Option<&'static str>,
}

/// Whole contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit: SubmitButtonView,
    pub toast: Toast,
}

impl FormView {
    pub fn derive(snapshot: &FormSnapshot) -> Self {
        let disabled = snapshot.submitting;

        let fields = FormField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                placeholder: field.placeholder(),
                value: snapshot.form.get(field).to_string(),
                error: snapshot
                    .errors
                    .get(field)
                    .filter(|_| snapshot.touched.is_touched(field))
                    .map(ToString::to_string),
                disabled,
            })
            .collect();

        let submit = SubmitButtonView {
            disabled,
            busy: snapshot.submitting,
            label: (!snapshot.submitting).then_some(SUBMIT_LABEL),
        };

        Self {
            fields,
            submit,
            toast: snapshot.toast.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    /// Errors currently on screen, in field order.
    pub fn visible_errors(&self) -> Vec<(FormField, &str)> {
        self.fields
            .iter()
            .filter_map(|view| view.error.as_deref().map(|error| (view.field, error)))
            .collect()
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Join the Story")?;
        for view in &self.fields {
            let value = if view.value.is_empty() {
                view.placeholder
            } else {
                view.value.as_str()
            };
            let lock = if view.disabled { " (disabled)" } else { "" };
            writeln!(f, "  [{}] {}{}", view.field, value, lock)?;
            if let Some(error) = &view.error {
                writeln!(f, "      ! {}", error)?;
            }
        }

        match self.submit.label {
            Some(label) => writeln!(f, "  <{}>", label)?,
            None => writeln!(f, "  <...>")?,
        }

        if self.toast.visible {
            let tag = match self.toast.kind {
                ToastKind::Success => "ok",
                ToastKind::Error => "error",
            };
            writeln!(f, "  ({}) {}", tag, self.toast.message)?;
        }
        Ok(())
    }
}
