//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::events::Event;
use crate::service::BudgetClient;
use log::info;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Runs the request flows
    pub controller: DashboardController,
    /// Event receiver for flow outcomes
    pub event_receiver: mpsc::Receiver<Event>,
}

/// Builds the service client and the controller feeding `event_receiver`.
pub fn setup_session(env: Environment) -> Result<SessionData, Box<dyn Error>> {
    info!("Using budgeting service at {}", env.service_url());
    let client = BudgetClient::new(env)?;

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let controller = DashboardController::new(Arc::new(client), event_sender);

    Ok(SessionData {
        controller,
        event_receiver,
    })
}
