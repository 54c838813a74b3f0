//! Contact form controller.
//!
//! Owns the form values, per-field errors, touched fields, the submitting
//! flag and the toast. Events arrive as method calls; the only suspension
//! point is the API request in [`ContactFormController::submit`].
//!
//! State lives behind a mutex shared by clones of the controller, so a
//! renderer holding a clone can observe the submitting state while a request
//! is in flight. The lock is never held across an await.

use crate::client::AsyncContactClient;
use crate::config::Config;
use crate::domain::{is_allowed_phone_key, FormField};
use crate::error::ContactApiResult;
use crate::metrics::Metrics;
use crate::models::toast::{FALLBACK_ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::models::{ContactSubmission, FormState, Toast, ToastKind, TouchedSet, ValidationErrors};
use crate::notifications::ToastNotifier;
use crate::validation::validate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),

    /// A request from an earlier submit is still in flight.
    AlreadySubmitting,

    /// The API stored the submission.
    Sent,

    /// The request failed; `message` is what the error toast shows.
    Failed { message: String },

    /// The form was unmounted; the attempt or its response was dropped.
    Discarded,
}

/// Point-in-time copy of the form, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub form: FormState,
    pub errors: ValidationErrors,
    pub touched: TouchedSet,
    pub submitting: bool,
    pub toast: Toast,
}

#[derive(Debug)]
struct FormModel {
    form: FormState,
    errors: ValidationErrors,
    touched: TouchedSet,
    submitting: bool,
    mounted: bool,
}

impl FormModel {
    fn new() -> Self {
        Self {
            form: FormState::new(),
            errors: ValidationErrors::new(),
            touched: TouchedSet::new(),
            submitting: false,
            mounted: true,
        }
    }

    /// Inputs are disabled while submitting and gone once unmounted.
    fn accepts_input(&self) -> bool {
        self.mounted && !self.submitting
    }

    /// Recompute errors once the visitor has touched anything.
    fn revalidate_if_touched(&mut self) {
        if !self.touched.is_empty() {
            self.errors = validate(&self.form).errors;
        }
    }
}

/// Controller behind the "Join the Story" contact form.
#[derive(Clone)]
pub struct ContactFormController {
    model: Arc<Mutex<FormModel>>,
    toast: ToastNotifier,
    client: Arc<dyn AsyncContactClient>,
    metrics: Metrics,
}

impl ContactFormController {
    /// Mount a fresh, empty form.
    pub fn new(client: Arc<dyn AsyncContactClient>, toast_duration: Duration) -> Self {
        Self {
            model: Arc::new(Mutex::new(FormModel::new())),
            toast: ToastNotifier::new(toast_duration),
            client,
            metrics: Metrics::new(),
        }
    }

    /// Mount a form using the configured toast duration.
    pub fn from_config(client: Arc<dyn AsyncContactClient>, config: &Config) -> Self {
        Self::new(client, config.toast_duration())
    }

    /// Record into an existing metrics collector instead of a private one.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn lock(&self) -> MutexGuard<'_, FormModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The visitor edited a field.
    ///
    /// Phone input is normalized before it is stored. A displayed error on
    /// the field is cleared at once, then the form is revalidated if any
    /// field has been touched, which may bring the error back.
    pub fn change(&self, field: FormField, value: &str) {
        let mut model = self.lock();
        if !model.accepts_input() {
            debug!(%field, "Ignoring change while input is disabled");
            return;
        }

        model.form.set(field, value);
        model.errors.clear_field(field);
        model.revalidate_if_touched();
    }

    /// A key is about to reach a field. Returns false if it must be blocked.
    ///
    /// Only the phone field filters keys: digits and navigation/deletion keys.
    pub fn key_down(&self, field: FormField, key: &str) -> bool {
        match field {
            FormField::Phone => is_allowed_phone_key(key),
            _ => true,
        }
    }

    /// The visitor left a field.
    pub fn blur(&self, field: FormField) {
        let mut model = self.lock();
        if !model.accepts_input() {
            return;
        }

        model.touched.touch(field);
        model.revalidate_if_touched();
    }

    /// Validate and, if everything passes, send the form.
    ///
    /// Exactly one request is made per successful validation. The form stays
    /// in the submitting state until the request resolves.
    pub async fn submit(&self) -> SubmitOutcome {
        self.metrics.record_submission_attempt();

        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = self.client.submit(&submission).await;
        self.finish_submit(result)
    }

    fn begin_submit(&self) -> Result<ContactSubmission, SubmitOutcome> {
        let mut model = self.lock();

        if !model.mounted {
            return Err(SubmitOutcome::Discarded);
        }
        if model.submitting {
            debug!("Submit ignored, request already in flight");
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        model.touched.touch_all();
        self.toast.clear();

        let report = validate(&model.form);
        if !report.is_valid() {
            info!(errors = report.errors.len(), "Contact form failed validation");
            self.metrics.record_submission_rejected();
            model.errors = report.errors.clone();
            return Err(SubmitOutcome::Invalid(report.errors));
        }

        model.submitting = true;
        model.errors.clear();
        debug!("Contact form submitting");

        Ok(model.form.to_submission())
    }

    fn finish_submit(&self, result: ContactApiResult<()>) -> SubmitOutcome {
        let mut model = self.lock();
        model.submitting = false;

        if !model.mounted {
            debug!(ok = result.is_ok(), "Ignoring submission response after unmount");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                model.form.clear();
                model.touched.clear();
                model.errors.clear();
                self.toast.show(ToastKind::Success, SUCCESS_MESSAGE);
                self.metrics.record_submission_sent();
                info!("Contact form submitted");
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                let message = e
                    .server_message()
                    .unwrap_or(FALLBACK_ERROR_MESSAGE)
                    .to_string();
                self.toast.show(ToastKind::Error, message.clone());
                self.metrics.record_submission_failed();
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Tear the form down.
    ///
    /// Cancels the toast timer. A response still in flight is ignored when
    /// it arrives; the request itself is not cancelled.
    pub fn unmount(&self) {
        let mut model = self.lock();
        model.mounted = false;
        self.toast.cancel();
        debug!(in_flight = model.submitting, "Contact form unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    pub fn toast(&self) -> Toast {
        self.toast.current()
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> FormSnapshot {
        let model = self.lock();
        FormSnapshot {
            form: model.form.clone(),
            errors: model.errors.clone(),
            touched: model.touched.clone(),
            submitting: model.submitting,
            toast: self.toast.current(),
        }
    }
}

impl std::fmt::Debug for ContactFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactFormController")
            .field("model", &*self.lock())
            .field("toast", &self.toast)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::ContactApiError;
    use async_trait::async_trait;

    /// Answers every submit the same way.
    struct FixedClient {
        ok: bool,
    }

    #[async_trait]
    impl AsyncContactClient for FixedClient {
        async fn submit(&self, _submission: &ContactSubmission) -> ContactApiResult<()> {
            if self.ok {
                Ok(())
            } else {
                Err(ContactApiError::Timeout)
            }
        }
    }

    fn controller(ok: bool) -> ContactFormController {
        ContactFormController::new(Arc::new(FixedClient { ok }), Duration::from_secs(3))
    }

    #[test]
    fn test_change_before_touch_does_not_validate() {
        let form = controller(true);
        form.change(FormField::Email, "not-an-email");
        assert!(form.snapshot().errors.is_empty());
    }

    #[test]
    fn test_blur_marks_touched_and_validates() {
        let form = controller(true);
        form.blur(FormField::Name);

        let snapshot = form.snapshot();
        assert!(snapshot.touched.is_touched(FormField::Name));
        // Errors are computed for every field, only shown for touched ones
        assert_eq!(snapshot.errors.len(), 4);
    }

    #[test]
    fn test_change_clears_then_revalidates() {
        let form = controller(true);
        form.blur(FormField::Phone);
        assert_eq!(
            form.snapshot().errors.get(FormField::Phone),
            Some(&ValidationError::PhoneRequired)
        );

        form.change(FormField::Phone, "98736");
        assert_eq!(
            form.snapshot().errors.get(FormField::Phone),
            Some(&ValidationError::InvalidPhone)
        );

        form.change(FormField::Phone, "9873684567");
        assert!(!form.snapshot().errors.contains(FormField::Phone));
    }

    #[test]
    fn test_phone_key_filter_only_applies_to_phone() {
        let form = controller(true);
        assert!(!form.key_down(FormField::Phone, "x"));
        assert!(form.key_down(FormField::Phone, "7"));
        assert!(form.key_down(FormField::Phone, "Backspace"));
        assert!(form.key_down(FormField::Name, "x"));
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let form = controller(false);
        form.change(FormField::Name, "Asha");
        form.change(FormField::Email, "asha@example.com");
        form.change(FormField::Phone, "9873684567");
        form.change(FormField::Message, "Hi");

        let outcome = form.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: FALLBACK_ERROR_MESSAGE.to_string()
            }
        );
        assert!(!form.is_submitting());
        assert_eq!(form.snapshot().form.name(), "Asha");
    }

    #[tokio::test]
    async fn test_unmounted_form_discards_submit() {
        let form = controller(true);
        form.unmount();
        assert_eq!(form.submit().await, SubmitOutcome::Discarded);
        assert!(!form.is_mounted());
    }

    #[test]
    fn test_input_ignored_after_unmount() {
        let form = controller(true);
        form.unmount();
        form.change(FormField::Name, "late");
        assert_eq!(form.snapshot().form.name(), "");
    }
}
