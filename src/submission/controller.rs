//! Submission controller: validate, send, settle
//!
//! One controller owns one form's Field Model and its [`SubmissionStatus`].
//! Nothing else mutates either. The cycle is:
//!
//! - `Idle | Success | Error` + submit, input invalid → `Error(Validation)`, no sink call
//! - `Idle | Success | Error` + submit, input valid → `Submitting`, sink task spawned
//! - `Submitting` + submit → ignored
//! - `Submitting` + sink accepted → `Success`, then the form is reset
//! - `Submitting` + sink failed → `Error(Sink(..))`, form kept as typed
//!
//! The sink runs on its own task and reports back over a oneshot channel that
//! the controller drains exactly once, either by polling from the UI loop or by
//! awaiting it.

use super::payload::Receipt;
use super::sink::SubmissionSink;
use crate::error::{FormError, SinkError, SubmitFailure};
use crate::state::{Form, FormField, SubmissionStatus};
use crate::validation::{DateProvider, ValidationErrors};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

type SinkOutcome = Result<Receipt, SinkError>;

/// Result of asking the controller to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was valid and the sink has been called
    Started,
    /// Input was invalid; status is now `Error(Validation)`
    Rejected(ValidationErrors),
    /// A submission is already in flight
    Ignored,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a, F> {
    pub fields: &'a F,
    pub status: &'a SubmissionStatus,
    pub errors: Option<&'a ValidationErrors>,
    pub receipt: Option<&'a Receipt>,
}

pub struct SubmissionController<F: Form> {
    form: F,
    status: SubmissionStatus,
    errors: Option<ValidationErrors>,
    receipt: Option<Receipt>,
    pending: Option<oneshot::Receiver<SinkOutcome>>,
    sink: Arc<dyn SubmissionSink>,
    dates: Arc<dyn DateProvider>,
}

impl<F: Form> SubmissionController<F> {
    pub fn new(sink: Arc<dyn SubmissionSink>, dates: Arc<dyn DateProvider>) -> Self {
        Self {
            form: F::default(),
            status: SubmissionStatus::Idle,
            errors: None,
            receipt: None,
            pending: None,
            sink,
            dates,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    pub fn snapshot(&self) -> FormSnapshot<'_, F> {
        FormSnapshot {
            fields: &self.form,
            status: &self.status,
            errors: self.errors.as_ref(),
            receipt: self.receipt.as_ref(),
        }
    }

    /// Forward a field change from the UI
    pub fn on_field_change(&mut self, name: &str, value: String) -> Result<(), FormError> {
        self.form.set(name, value)
    }

    pub fn focus_next(&mut self) {
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.form.prev_field();
    }

    /// Apply a keystroke-level edit to the focused field
    ///
    /// The edit runs on a copy; the result is written back through `set`.
    pub fn edit_active(&mut self, edit: impl FnOnce(&mut FormField)) {
        let Some(mut field) = self.form.get_field(self.form.active_field()).cloned() else {
            return;
        };
        edit(&mut field);
        if let Err(err) = self.on_field_change(field.name, field.value().to_string()) {
            warn!(form = F::NAME, error = %err, "dropped field edit");
        }
    }

    /// Validate and, if valid, hand the payload to the sink without waiting
    ///
    /// Must be called from within a tokio runtime.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.status.is_submitting() {
            debug!(form = F::NAME, "submit ignored: submission already in flight");
            return SubmitOutcome::Ignored;
        }

        let payload = match self.form.validate(self.dates.today()) {
            Ok(payload) => payload,
            Err(errors) => {
                info!(
                    form = F::NAME,
                    errors = errors.len(),
                    "submit rejected by validation"
                );
                self.status = SubmissionStatus::Error(SubmitFailure::Validation);
                self.errors = Some(errors.clone());
                return SubmitOutcome::Rejected(errors);
            }
        };

        self.errors = None;
        self.receipt = None;
        self.status = SubmissionStatus::Submitting;
        debug!(form = F::NAME, "submitting");

        let (tx, rx) = oneshot::channel();
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let outcome = sink.send(payload).await;
            // The controller may be gone; nobody is left to notify.
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);

        SubmitOutcome::Started
    }

    /// Settle a finished submission, if there is one, without blocking
    ///
    /// Returns the new status when this call moved the form out of `Submitting`.
    pub fn poll_completion(&mut self) -> Option<&SubmissionStatus> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SinkError::Aborted),
        };
        self.pending = None;
        self.settle(outcome);
        Some(&self.status)
    }

    /// Wait for the in-flight submission, if any, and settle it
    pub async fn wait_for_completion(&mut self) -> &SubmissionStatus {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.await.unwrap_or(Err(SinkError::Aborted));
            self.settle(outcome);
        }
        &self.status
    }

    /// Run a whole submit cycle
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.begin_submit();
        if outcome == SubmitOutcome::Started {
            self.wait_for_completion().await;
        }
        outcome
    }

    fn settle(&mut self, outcome: SinkOutcome) {
        match outcome {
            Ok(receipt) => {
                info!(
                    form = F::NAME,
                    reference = %receipt.reference,
                    "submission accepted"
                );
                // Status flips before the reset so a reset form is never shown
                // alongside a non-success status.
                self.status = SubmissionStatus::Success;
                self.receipt = Some(receipt);
                self.form.reset();
            }
            Err(err) => {
                warn!(form = F::NAME, error = %err, "submission failed");
                self.status = SubmissionStatus::Error(SubmitFailure::Sink(err));
            }
        }
    }
}
