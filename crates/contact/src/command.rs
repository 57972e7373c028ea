use std::sync::Arc;

use crate::{ContactSubmission, MailRouting, MailTransport, SubmissionResult, compose};

/// Client view of the submission pipeline.
#[async_trait::async_trait]
pub trait ContactService: Send + Sync {
    async fn send_contact(&self, input: ContactSubmission) -> anyhow::Result<SubmissionResult>;
}

pub struct Command<T: MailTransport> {
    transport: Arc<T>,
    routing: MailRouting,
}

impl<T: MailTransport> Clone for Command<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            routing: self.routing.clone(),
        }
    }
}

impl<T: MailTransport> Command<T> {
    pub fn new(transport: T, routing: MailRouting) -> Self {
        Self {
            transport: Arc::new(transport),
            routing,
        }
    }

    pub fn routing(&self) -> &MailRouting {
        &self.routing
    }

    /// Validates the submission and, only when every field passes, sends the
    /// notification through the transport. Transport failures are logged and
    /// reported with a generic message.
    #[tracing::instrument(skip_all, fields(email = %input.email, subject = tracing::field::Empty))]
    pub async fn submit_form(&self, input: ContactSubmission) -> SubmissionResult {
        let violations = input.violations();
        if !violations.is_empty() {
            tracing::info!(count = violations.len(), "Contact form rejected");

            return SubmissionResult::invalid(violations);
        }

        let message = match compose(&input, &self.routing) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "Failed to compose contact notification");

                return SubmissionResult::send_failed();
            }
        };

        tracing::Span::current().record("subject", &message.subject);

        if let Err(e) = self.transport.send(message).await {
            tracing::error!(error = %e, "Failed to send contact notification");

            return SubmissionResult::send_failed();
        }

        tracing::info!("Contact notification sent");

        SubmissionResult::sent()
    }
}

#[async_trait::async_trait]
impl<T: MailTransport> ContactService for Command<T> {
    async fn send_contact(&self, input: ContactSubmission) -> anyhow::Result<SubmissionResult> {
        Ok(self.submit_form(input).await)
    }
}
