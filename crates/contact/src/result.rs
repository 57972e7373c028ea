use serde::Serialize;

use crate::Violation;

pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed. Please check your inputs.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send your message. Please try again later.";

/// Outcome of a single submission, rendered by the form as a status banner.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(into = "SubmissionPayload")]
pub enum SubmissionResult {
    Success {
        message: String,
    },
    Failure {
        message: String,
        errors: Vec<Violation>,
    },
}

impl SubmissionResult {
    pub fn sent() -> Self {
        Self::Success {
            message: SUCCESS_MESSAGE.to_owned(),
        }
    }

    pub fn invalid(errors: Vec<Violation>) -> Self {
        Self::Failure {
            message: VALIDATION_FAILED_MESSAGE.to_owned(),
            errors,
        }
    }

    pub fn send_failed() -> Self {
        Self::Failure {
            message: SEND_FAILED_MESSAGE.to_owned(),
            errors: vec![],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message, .. } => message,
        }
    }

    pub fn errors(&self) -> &[Violation] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors, .. } => errors,
        }
    }
}

#[derive(Serialize)]
struct SubmissionPayload {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<Violation>>,
}

impl From<SubmissionResult> for SubmissionPayload {
    fn from(value: SubmissionResult) -> Self {
        match value {
            SubmissionResult::Success { message } => Self {
                success: true,
                message,
                errors: None,
            },
            SubmissionResult::Failure { message, errors } => Self {
                success: false,
                message,
                errors: (!errors.is_empty()).then_some(errors),
            },
        }
    }
}
