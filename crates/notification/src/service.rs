//! Email notification service using lettre

use folio_contact::{MailRouting, MailTransport, OutgoingMessage, TransportError};
use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Implicit TLS from the first byte (usually port 465). When false the
    /// relay is reached with STARTTLS, or in plain text without credentials.
    #[serde(default)]
    pub smtp_secure: bool,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default)]
    pub bcc_address: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_secure: false,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            bcc_address: None,
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@folio.localhost".to_string()
}

fn default_contact_address() -> String {
    "contact@folio.localhost".to_string()
}

impl EmailConfig {
    /// Notification addresses. The bcc copy falls back to the SMTP account
    /// when that account is itself an address.
    pub fn routing(&self) -> MailRouting {
        let bcc = self.bcc_address.to_owned().or_else(|| {
            self.smtp_username
                .parse::<Address>()
                .ok()
                .map(|_| self.smtp_username.to_owned())
        });

        MailRouting {
            from: self.from_address.to_owned(),
            to: self.contact_address.to_owned(),
            bcc,
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_host.trim().is_empty() {
            return Err("SMTP host must not be empty".to_string());
        }
        if self.smtp_port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }

        let mut addresses = vec![
            ("from_address", &self.from_address),
            ("contact_address", &self.contact_address),
        ];
        if let Some(bcc) = &self.bcc_address {
            addresses.push(("bcc_address", bcc));
        }

        for (name, value) in addresses {
            if let Err(e) = value.parse::<Mailbox>() {
                return Err(format!("Invalid {name} `{value}`: {e}"));
            }
        }

        Ok(())
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if !config.has_credentials() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            let builder = if config.smtp_secure {
                SmtpTransport::relay(&config.smtp_host)?
            } else {
                SmtpTransport::starttls_relay(&config.smtp_host)?
            };

            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                smtp_secure = config.smtp_secure,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            builder.port(config.smtp_port).credentials(creds).build()
        };

        Ok(Self { mailer })
    }

    pub fn build_message(&self, message: &OutgoingMessage) -> Result<Message, TransportError> {
        let mut builder = Message::builder()
            .from(mailbox(&message.from)?)
            .to(mailbox(&message.to)?)
            .reply_to(mailbox(&message.reply_to)?)
            .subject(message.subject.to_owned());

        if let Some(bcc) = &message.bcc {
            builder = builder.bcc(mailbox(bcc)?);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                message.text.to_owned(),
                message.html.to_owned(),
            ))
            .map_err(|e| TransportError::Build(e.to_string()))
    }
}

fn mailbox(address: &str) -> Result<Mailbox, TransportError> {
    address.parse().map_err(|e: lettre::address::AddressError| TransportError::Address {
        address: address.to_owned(),
        reason: e.to_string(),
    })
}

#[async_trait::async_trait]
impl MailTransport for EmailService {
    #[tracing::instrument(skip_all, fields(to = %message.to, subject = %message.subject))]
    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        let email = self.build_message(&message)?;

        tracing::info!("Sending email");

        let mailer = self.mailer.clone();
        let response = tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| TransportError::Unexpected(e.to_string()))?
            .map_err(|e| TransportError::Send(e.to_string()))?;

        tracing::debug!(code = %response.code(), "SMTP relay accepted message");

        Ok(())
    }
}
