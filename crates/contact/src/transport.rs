use crate::OutgoingMessage;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid address `{address}`: {reason}")]
    Address { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("smtp error: {0}")]
    Send(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Capability used to hand a composed notification to a mail relay.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError>;
}

#[async_trait::async_trait]
impl<T: MailTransport + ?Sized> MailTransport for std::sync::Arc<T> {
    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        (**self).send(message).await
    }
}
