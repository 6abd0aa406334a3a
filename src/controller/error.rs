//! Error handling for the dashboard controller

use crate::service::error::ServiceError;
use thiserror::Error;

/// How a single user action failed. Every variant is terminal for that action.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// Malformed or missing input; no request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("Service error with status {status}: {message}")]
    Service { status: u16, message: String },

    /// The request could not complete.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl DashboardError {
    /// Classifies a client error. `fallback` replaces a missing service message.
    pub fn from_service_error(error: ServiceError, fallback: &str) -> Self {
        match error {
            ServiceError::Http { status, message } => DashboardError::Service {
                status,
                message: message.unwrap_or_else(|| fallback.to_string()),
            },
            ServiceError::Reqwest(e) => DashboardError::Transport(e.to_string()),
        }
    }
}
