use std::convert::Infallible;

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use folio_contact::{ContactSubmission, Field, SubmissionResult};
use serde_json::Value;
use strum::VariantArray;

use crate::routes::AppState;

/// Contact form body, url-encoded or JSON.
///
/// Never rejects: an unreadable body, or a field that is not a string,
/// comes through as an empty field and fails validation.
pub struct ContactInput(pub ContactSubmission);

impl<S: Send + Sync> FromRequest<S> for ContactInput {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let value = match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => value,
                Err(e) => {
                    tracing::debug!(error = %e, "Unreadable JSON contact body");

                    Value::Null
                }
            };

            return Ok(Self(from_json(&value)));
        }

        match Form::<ContactSubmission>::from_request(req, state).await {
            Ok(Form(input)) => Ok(Self(input)),
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable contact form body");

                Ok(Self(ContactSubmission::default()))
            }
        }
    }
}

fn from_json(value: &Value) -> ContactSubmission {
    let mut input = ContactSubmission::default();

    for field in Field::VARIANTS {
        let key: &str = field.as_ref();

        if let Some(text) = value.get(key).and_then(Value::as_str) {
            *input.field_mut(*field) = text.to_owned();
        }
    }

    input
}

/// POST /contact
pub async fn action(
    State(app_state): State<AppState>,
    ContactInput(input): ContactInput,
) -> impl IntoResponse {
    let result = match app_state.contact.send_contact(input).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Contact service failed");

            SubmissionResult::send_failed()
        }
    };

    let status = match &result {
        SubmissionResult::Success { .. } => StatusCode::OK,
        SubmissionResult::Failure { errors, .. } if !errors.is_empty() => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmissionResult::Failure { .. } => StatusCode::BAD_GATEWAY,
    };

    (status, Json(result))
}
