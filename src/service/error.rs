//! Error handling for the service module

use crate::service::types::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reqwest error: the request never completed, or the body could not be decoded.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP error with status {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Http {
        status: u16,
        message: Option<String>,
    },
}

impl ServiceError {
    /// Builds an `Http` error from a non-success response, reading the
    /// service's `{error}` body when one is present.
    ///
    /// The status decides the outcome: a body that is not JSON still yields
    /// `Http` (no message), never a transport error.
    pub async fn from_response(response: reqwest::Response) -> ServiceError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .filter(|msg| !msg.is_empty()),
            Err(_) => None,
        };

        ServiceError::Http { status, message }
    }
}
