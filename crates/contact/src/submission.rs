use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use strum::VariantArray;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::Field;

/// Raw contact form input.
///
/// Every field defaults to an empty string so that a missing key fails
/// validation instead of failing extraction.
#[derive(Validate, Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(custom(
        function = "deliverable_email",
        message = "Please enter a valid email address"
    ))]
    pub email: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

/// Email shape check that also holds for the mailer, which rejects some
/// addresses the plain shape check accepts (`jane..doe@example.com`).
fn deliverable_email(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() && value.parse::<Mailbox>().is_ok() {
        return Ok(());
    }

    Err(ValidationError::new("email"))
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Violation {
    pub field: Field,
    pub message: String,
}

impl ContactSubmission {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Field violations ordered name, email, subject, message. Empty when the
    /// submission may be sent.
    pub fn violations(&self) -> Vec<Violation> {
        let Err(errors) = self.validate() else {
            return vec![];
        };

        let field_errors = errors.field_errors();

        Field::VARIANTS
            .iter()
            .filter_map(|field| field_errors.get(field.as_ref()).map(|errs| (field, errs)))
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| Violation {
                    field: *field,
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                })
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
