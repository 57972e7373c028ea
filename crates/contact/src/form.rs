use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle};

use crate::{ContactService, ContactSubmission, Field, FormStatus, SubmissionResult, Violation};

/// How long a success or error banner stays up before the form goes idle.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "There was an unexpected error. Please try again later.";

#[derive(Default, Clone, Debug, PartialEq)]
pub struct FormState {
    pub status: FormStatus,
    pub error_message: Option<String>,
}

/// Client side contact form: draft fields plus the
/// `idle -> submitting -> success | error -> idle` status cycle.
pub struct FormController<S: ContactService + ?Sized> {
    service: Arc<S>,
    draft: ContactSubmission,
    violations: Vec<Violation>,
    state: Arc<watch::Sender<FormState>>,
    reset: Option<JoinHandle<()>>,
}

impl<S: ContactService + ?Sized + 'static> FormController<S> {
    pub fn new(service: Arc<S>) -> Self {
        let (state, _) = watch::channel(FormState::default());

        Self {
            service,
            draft: ContactSubmission::default(),
            violations: vec![],
            state: Arc::new(state),
            reset: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> FormStatus {
        self.state.borrow().status
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violation(&self, field: Field) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Runs client validation, then forwards the draft to the service.
    ///
    /// Invalid drafts never leave the form: the violations are kept for
    /// display and the status does not change.
    pub async fn submit(&mut self) -> FormStatus {
        self.violations = self.draft.violations();
        if !self.violations.is_empty() {
            return self.status();
        }

        self.cancel_reset();
        self.state.send_replace(FormState {
            status: FormStatus::Submitting,
            error_message: None,
        });

        let next = match self.service.send_contact(self.draft.clone()).await {
            Ok(SubmissionResult::Success { .. }) => {
                self.draft = ContactSubmission::default();

                FormState {
                    status: FormStatus::Success,
                    error_message: None,
                }
            }
            Ok(SubmissionResult::Failure { message, .. }) => FormState {
                status: FormStatus::Error,
                error_message: Some(message),
            },
            Err(e) => {
                tracing::error!(error = %e, "Contact service failed");

                FormState {
                    status: FormStatus::Error,
                    error_message: Some(UNEXPECTED_ERROR_MESSAGE.to_owned()),
                }
            }
        };

        let status = next.status;
        self.state.send_replace(next);
        self.schedule_reset();

        status
    }

    fn schedule_reset(&mut self) {
        let state = self.state.clone();

        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            state.send_replace(FormState::default());
        }));
    }

    fn cancel_reset(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}

impl<S: ContactService + ?Sized> Drop for FormController<S> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset.abort();
        }
    }
}
