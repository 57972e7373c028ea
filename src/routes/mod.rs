use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use folio_contact::ContactService;

mod contact;
mod health;

pub use contact::ContactInput;

#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<dyn ContactService>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", post(contact::action))
        .with_state(app_state)
}
