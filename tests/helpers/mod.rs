use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use folio::AppState;
use folio_contact::{Command, MailRouting, MailTransport, OutgoingMessage, TransportError};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: OutgoingMessage) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(message);

        if self.fail {
            return Err(TransportError::Send("connection refused".to_owned()));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub transport: Arc<RecordingTransport>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new(fail: bool) -> Self {
        let transport = Arc::new(RecordingTransport {
            sent: Mutex::default(),
            fail,
        });

        let routing = MailRouting {
            from: "noreply@folio.localhost".to_owned(),
            to: "contact@folio.localhost".to_owned(),
            bcc: Some("relay@folio.localhost".to_owned()),
        };

        let router = folio::router(AppState {
            contact: Arc::new(Command::new(transport.clone(), routing)),
        });

        Self { router, transport }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.transport.sent.lock().unwrap().clone()
    }

    pub async fn post_form(&self, body: &[(&str, &str)]) -> anyhow::Result<Response> {
        let request = Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(body)?))?;

        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn post_json(&self, body: serde_json::Value) -> anyhow::Result<Response> {
        let request = Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;

        Ok(self.router.clone().oneshot(request).await?)
    }
}

#[allow(dead_code)]
pub async fn json_body(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
