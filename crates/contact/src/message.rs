use askama::Template;
use serde::Deserialize;

use crate::{ContactSubmission, TransportError};

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Addresses the notification is routed through.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MailRouting {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub bcc: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    pub bcc: Option<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "contact-notification.html")]
struct NotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
struct NotificationPlainTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Builds the notification for an already validated submission.
pub fn compose(
    submission: &ContactSubmission,
    routing: &MailRouting,
) -> Result<OutgoingMessage, TransportError> {
    let html = NotificationHtmlTemplate {
        name: &submission.name,
        email: &submission.email,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()
    .map_err(|e| TransportError::Unexpected(format!("failed to render html body: {e}")))?;

    let text = NotificationPlainTemplate {
        name: &submission.name,
        email: &submission.email,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()
    .map_err(|e| TransportError::Unexpected(format!("failed to render text body: {e}")))?;

    Ok(OutgoingMessage {
        from: routing.from.to_owned(),
        to: routing.to.to_owned(),
        bcc: routing.bcc.to_owned(),
        reply_to: submission.email.to_owned(),
        subject: format!("{SUBJECT_PREFIX}{}", submission.subject),
        text,
        html,
    })
}
