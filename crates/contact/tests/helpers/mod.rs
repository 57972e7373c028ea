use std::sync::{Arc, Mutex, OnceLock};

use folio_contact::{
    Command, ContactService, ContactSubmission, FormState, FormStatus, MailRouting, MailTransport,
    OutgoingMessage, SubmissionResult, TransportError,
};
use tokio::sync::watch;

#[allow(dead_code)]
pub fn routing() -> MailRouting {
    MailRouting {
        from: "noreply@folio.localhost".to_owned(),
        to: "contact@folio.localhost".to_owned(),
        bcc: Some("relay@folio.localhost".to_owned()),
    }
}

#[allow(dead_code)]
pub fn valid_submission(name: impl Into<String>) -> ContactSubmission {
    let name = name.into();

    ContactSubmission {
        email: format!("{}@folio.localhost", name.replace(' ', ".")),
        name,
        subject: "Project inquiry".to_owned(),
        message: "Would you be available for a short call next week?".to_owned(),
    }
}

/// Transport that records every message and optionally fails.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(message);

        if self.fail {
            return Err(TransportError::Send(
                "535 5.7.8 authentication failed".to_owned(),
            ));
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub fn command(transport: RecordingTransport) -> (Command<Arc<RecordingTransport>>, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);

    (Command::new(transport.clone(), routing()), transport)
}

pub enum Reply {
    Result(SubmissionResult),
    Unexpected,
}

/// Contact service returning a scripted reply and recording the form status
/// observed while the call is in flight.
pub struct ScriptedService {
    reply: Reply,
    pub form: OnceLock<watch::Receiver<FormState>>,
    pub calls: Mutex<Vec<ContactSubmission>>,
    pub observed: Mutex<Vec<FormStatus>>,
}

#[allow(dead_code)]
impl ScriptedService {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            form: OnceLock::new(),
            calls: Mutex::default(),
            observed: Mutex::default(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ContactService for ScriptedService {
    async fn send_contact(&self, input: ContactSubmission) -> anyhow::Result<SubmissionResult> {
        self.calls.lock().unwrap().push(input);

        if let Some(form) = self.form.get() {
            self.observed.lock().unwrap().push(form.borrow().status);
        }

        match &self.reply {
            Reply::Result(result) => Ok(result.clone()),
            Reply::Unexpected => anyhow::bail!("connection reset by peer"),
        }
    }
}
