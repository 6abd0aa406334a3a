use crate::environment::Environment;
use crate::service::error::ServiceError;
use crate::service::types::{BudgetCategory, Expense, SummaryItem};

pub(crate) mod client;
pub use client::BudgetClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// The budgeting backend, as seen by the dashboard.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BudgetService: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Records an expense (`POST /log_expense`).
    async fn log_expense(&self, expense: &Expense) -> Result<(), ServiceError>;

    /// Creates a budget category (`POST /add_budget`).
    async fn add_budget(&self, budget: &BudgetCategory) -> Result<(), ServiceError>;

    /// Fetches the per-category summary in server order (`GET /get_summary`).
    async fn get_summary(&self) -> Result<Vec<SummaryItem>, ServiceError>;
}
