//! Dashboard Controller
//!
//! Mediates between form input and the budgeting service. Each flow reports
//! its user-facing outcome as events on the channel handed to `new`; the
//! returned `Result` carries the same outcome for callers that want it.

pub mod error;
pub mod validation;

pub use error::DashboardError;

use crate::events::{Event, Flow, Form};
use crate::service::BudgetService;
use crate::service::types::SummaryItem;
use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// User-facing messages.
pub mod messages {
    pub const INVALID_EXPENSE: &str = "Please enter valid category and amount";
    pub const EXPENSE_LOGGED: &str = "Expense logged successfully";
    pub const EXPENSE_FAILED: &str = "Failed to log expense";

    pub const INVALID_BUDGET: &str = "Please enter valid category and budget";
    pub const BUDGET_ADDED: &str = "Budget category added successfully";
    pub const BUDGET_FAILED: &str = "Failed to add budget";

    pub const SUMMARY_FAILED: &str = "Failed to fetch summary";
    pub const SUMMARY_UPDATE_ERROR: &str = "Error updating summary";

    pub const CONNECTION_ERROR: &str = "Error connecting to server";
}

#[derive(Clone)]
pub struct DashboardController {
    service: Arc<dyn BudgetService>,
    events: mpsc::Sender<Event>,
}

impl DashboardController {
    pub fn new(service: Arc<dyn BudgetService>, events: mpsc::Sender<Event>) -> Self {
        Self { service, events }
    }

    pub fn service_url(&self) -> String {
        self.service.environment().service_url()
    }

    async fn emit(&self, event: Event) {
        // The receiver only goes away during shutdown.
        let _ = self.events.send(event).await;
    }

    /// Validates and records an expense, then refreshes the summary on success.
    pub async fn submit_expense(&self, category: &str, amount: &str) -> Result<(), DashboardError> {
        let Some(expense) = validation::expense(category, amount) else {
            return Err(self.reject(messages::INVALID_EXPENSE).await);
        };

        self.emit(Event::RequestStarted(Flow::LogExpense)).await;
        let result = self.service.log_expense(&expense).await;
        self.emit(Event::RequestFinished(Flow::LogExpense)).await;

        match result {
            Ok(()) => {
                info!("Logged {} for {}", expense.amount, expense.category);
                self.emit(Event::success(messages::EXPENSE_LOGGED)).await;
                self.emit(Event::FormSubmitted(Form::Expense)).await;
                // A failed refresh reports itself.
                let _ = self.fetch_summary().await;
                Ok(())
            }
            Err(e) => {
                let err = DashboardError::from_service_error(e, messages::EXPENSE_FAILED);
                Err(self.report(Flow::LogExpense, err, None).await)
            }
        }
    }

    /// Validates and creates a budget category, then refreshes the summary on success.
    pub async fn submit_budget(&self, category: &str, budget: &str) -> Result<(), DashboardError> {
        let Some(budget) = validation::budget(category, budget) else {
            return Err(self.reject(messages::INVALID_BUDGET).await);
        };

        self.emit(Event::RequestStarted(Flow::AddBudget)).await;
        let result = self.service.add_budget(&budget).await;
        self.emit(Event::RequestFinished(Flow::AddBudget)).await;

        match result {
            Ok(()) => {
                info!("Added budget {} for {}", budget.budget_amount, budget.name);
                self.emit(Event::success(messages::BUDGET_ADDED)).await;
                self.emit(Event::FormSubmitted(Form::Budget)).await;
                let _ = self.fetch_summary().await;
                Ok(())
            }
            Err(e) => {
                let err = DashboardError::from_service_error(e, messages::BUDGET_FAILED);
                Err(self.report(Flow::AddBudget, err, None).await)
            }
        }
    }

    /// Fetches the summary. Only a confirmed success replaces what is rendered.
    pub async fn fetch_summary(&self) -> Result<Vec<SummaryItem>, DashboardError> {
        self.emit(Event::RequestStarted(Flow::FetchSummary)).await;
        let result = self.service.get_summary().await;
        self.emit(Event::RequestFinished(Flow::FetchSummary)).await;

        match result {
            Ok(items) => {
                self.emit(Event::SummaryLoaded(items.clone())).await;
                Ok(items)
            }
            Err(e) => {
                let err = DashboardError::from_service_error(e, messages::SUMMARY_FAILED);
                Err(self
                    .report(Flow::FetchSummary, err, Some(messages::SUMMARY_UPDATE_ERROR))
                    .await)
            }
        }
    }

    pub fn spawn_submit_expense(&self, category: String, amount: String) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let _ = controller.submit_expense(&category, &amount).await;
        })
    }

    pub fn spawn_submit_budget(&self, category: String, budget: String) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let _ = controller.submit_budget(&category, &budget).await;
        })
    }

    pub fn spawn_fetch_summary(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let _ = controller.fetch_summary().await;
        })
    }

    async fn reject(&self, message: &str) -> DashboardError {
        self.emit(Event::error(message)).await;
        DashboardError::Validation(message.to_string())
    }

    /// Notifies the user of a failed request. `user_message` overrides the
    /// per-kind message; transport detail only goes to the log.
    async fn report(
        &self,
        flow: Flow,
        err: DashboardError,
        user_message: Option<&str>,
    ) -> DashboardError {
        let shown = match &err {
            DashboardError::Service { status, message } => {
                warn!("{} rejected by service (HTTP {}): {}", flow, status, message);
                user_message.unwrap_or(message).to_string()
            }
            DashboardError::Transport(detail) => {
                error!("{} could not reach the service: {}", flow, detail);
                user_message.unwrap_or(messages::CONNECTION_ERROR).to_string()
            }
            DashboardError::Validation(message) => message.clone(),
        };
        self.emit(Event::error(shown)).await;
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::notifications::NotificationKind;
    use crate::service::MockBudgetService;
    use crate::service::error::ServiceError;
    use crate::service::types::{BudgetCategory, Expense};

    fn controller(mock: MockBudgetService) -> (DashboardController, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(64);
        (DashboardController::new(Arc::new(mock), tx), rx)
    }

    fn drain(rx: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Notification (message, kind) pairs in emission order.
    fn notifications(events: &[Event]) -> Vec<(String, NotificationKind)> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Notify { message, kind, .. } => Some((message.clone(), *kind)),
                _ => None,
            })
            .collect()
    }

    fn food_summary() -> Vec<SummaryItem> {
        vec![SummaryItem {
            category: "Food".to_string(),
            spent: 90.0,
            budget: 100.0,
            remaining: 10.0,
            percentage: 90.0,
        }]
    }

    /// A reqwest error obtained from a connection nothing is listening on.
    async fn transport_error() -> ServiceError {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = reqwest::get(format!("http://{}", addr)).await.unwrap_err();
        ServiceError::Reqwest(err)
    }

    #[tokio::test]
    async fn test_invalid_expense_makes_no_request() {
        for (category, amount) in [("", "10"), ("Food", "0"), ("Food", "-4"), ("Food", "ten")] {
            let mut mock = MockBudgetService::new();
            mock.expect_log_expense().times(0);
            mock.expect_get_summary().times(0);
            let (controller, mut rx) = controller(mock);

            let result = controller.submit_expense(category, amount).await;
            assert_eq!(
                result,
                Err(DashboardError::Validation(messages::INVALID_EXPENSE.to_string()))
            );

            let events = drain(&mut rx);
            assert_eq!(
                notifications(&events),
                vec![(messages::INVALID_EXPENSE.to_string(), NotificationKind::Error)]
            );
            assert!(!events.iter().any(|e| matches!(e, Event::RequestStarted(_))));
        }
    }

    #[tokio::test]
    // Success clears the expense form and refreshes the summary exactly once.
    async fn test_expense_success_clears_form_and_refreshes_once() {
        let mut mock = MockBudgetService::new();
        mock.expect_log_expense()
            .withf(|expense: &Expense| expense.category == "Food" && expense.amount == 12.5)
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_get_summary()
            .times(1)
            .returning(|| Ok(food_summary()));
        let (controller, mut rx) = controller(mock);

        controller.submit_expense(" Food ", "12.5").await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == Event::FormSubmitted(Form::Expense))
                .count(),
            1
        );
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Event::SummaryLoaded(_)))
                .count(),
            1
        );
        assert_eq!(
            notifications(&events),
            vec![(messages::EXPENSE_LOGGED.to_string(), NotificationKind::Success)]
        );
    }

    #[tokio::test]
    async fn test_expense_service_error_uses_server_message() {
        let mut mock = MockBudgetService::new();
        mock.expect_log_expense().times(1).returning(|_| {
            Err(ServiceError::Http {
                status: 400,
                message: Some("Invalid amount".to_string()),
            })
        });
        mock.expect_get_summary().times(0);
        let (controller, mut rx) = controller(mock);

        let result = controller.submit_expense("Food", "5").await;
        assert!(matches!(result, Err(DashboardError::Service { status: 400, .. })));

        let events = drain(&mut rx);
        assert_eq!(
            notifications(&events),
            vec![("Invalid amount".to_string(), NotificationKind::Error)]
        );
        assert!(!events.contains(&Event::FormSubmitted(Form::Expense)));
    }

    #[tokio::test]
    async fn test_budget_service_error_falls_back() {
        let mut mock = MockBudgetService::new();
        mock.expect_add_budget().times(1).returning(|_| {
            Err(ServiceError::Http {
                status: 500,
                message: None,
            })
        });
        let (controller, mut rx) = controller(mock);

        let result = controller.submit_budget("Travel", "300").await;
        assert!(result.is_err());
        assert_eq!(
            notifications(&drain(&mut rx)),
            vec![(messages::BUDGET_FAILED.to_string(), NotificationKind::Error)]
        );
    }

    #[tokio::test]
    async fn test_transport_error_shows_generic_message() {
        let err = transport_error().await;
        let mut err = Some(err);
        let mut mock = MockBudgetService::new();
        mock.expect_add_budget()
            .withf(|budget: &BudgetCategory| budget.name == "Travel" && budget.budget_amount == 300.0)
            .times(1)
            .returning(move |_| Err(err.take().expect("called once")));
        let (controller, mut rx) = controller(mock);

        let result = controller.submit_budget("Travel", "300").await;
        assert!(matches!(result, Err(DashboardError::Transport(_))));
        assert_eq!(
            notifications(&drain(&mut rx)),
            vec![(messages::CONNECTION_ERROR.to_string(), NotificationKind::Error)]
        );
    }

    #[tokio::test]
    async fn test_invalid_budget_makes_no_request() {
        let mut mock = MockBudgetService::new();
        mock.expect_add_budget().times(0);
        let (controller, mut rx) = controller(mock);

        let result = controller.submit_budget("Travel", "").await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert_eq!(
            notifications(&drain(&mut rx)),
            vec![(messages::INVALID_BUDGET.to_string(), NotificationKind::Error)]
        );
    }

    #[tokio::test]
    async fn test_budget_success_clears_budget_form() {
        let mut mock = MockBudgetService::new();
        mock.expect_add_budget().times(1).returning(|_| Ok(()));
        mock.expect_get_summary().times(1).returning(|| Ok(Vec::new()));
        let (controller, mut rx) = controller(mock);

        controller.submit_budget("Travel", "300").await.unwrap();
        let events = drain(&mut rx);
        assert!(events.contains(&Event::FormSubmitted(Form::Budget)));
        assert!(!events.contains(&Event::FormSubmitted(Form::Expense)));
    }

    #[tokio::test]
    // A failed fetch reports an error and never emits a replacement summary.
    async fn test_summary_failure_leaves_summary_alone() {
        let mut mock = MockBudgetService::new();
        mock.expect_get_summary().times(1).returning(|| {
            Err(ServiceError::Http {
                status: 500,
                message: Some("database locked".to_string()),
            })
        });
        let (controller, mut rx) = controller(mock);

        let result = controller.fetch_summary().await;
        assert!(result.is_err());

        let events = drain(&mut rx);
        assert!(!events.iter().any(|e| matches!(e, Event::SummaryLoaded(_))));
        assert_eq!(
            notifications(&events),
            vec![(messages::SUMMARY_UPDATE_ERROR.to_string(), NotificationKind::Error)]
        );
    }

    #[tokio::test]
    async fn test_spawned_flows_run_independently() {
        let mut mock = MockBudgetService::new();
        mock.expect_log_expense().times(2).returning(|_| Ok(()));
        mock.expect_get_summary().times(2).returning(|| Ok(food_summary()));
        let (controller, mut rx) = controller(mock);

        let first = controller.spawn_submit_expense("Food".to_string(), "1".to_string());
        let second = controller.spawn_submit_expense("Food".to_string(), "2".to_string());
        first.await.unwrap();
        second.await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == Event::FormSubmitted(Form::Expense))
                .count(),
            2
        );
    }

    #[test]
    fn test_service_url_comes_from_environment() {
        let mut mock = MockBudgetService::new();
        mock.expect_environment().return_const(Environment::Local);
        let (tx, _rx) = mpsc::channel(1);
        let controller = DashboardController::new(Arc::new(mock), tx);
        assert_eq!(controller.service_url(), "http://localhost:8000");
    }
}
