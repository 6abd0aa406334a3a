//! Budget Service Client
//!
//! A JSON-over-HTTP client for the budgeting backend.

use crate::environment::Environment;
use crate::service::BudgetService;
use crate::service::error::ServiceError;
use crate::service::types::{BudgetCategory, Expense, SummaryItem, SummaryResponse};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("budget-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BudgetClient {
    client: Client,
    environment: Environment,
}

impl BudgetClient {
    pub fn new(environment: Environment) -> Result<Self, ServiceError> {
        let client = ClientBuilder::new()
            .connect_timeout(crate::consts::cli_consts::CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.service_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ServiceError> {
        if !response.status().is_success() {
            return Err(ServiceError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ServiceError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// POSTs a JSON body. The success body is an acknowledgement the
    /// dashboard does not interpret, so it is drained and discarded.
    async fn post_request_no_response<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), ServiceError> {
        let url = self.build_url(endpoint);
        let response = self.client.post(&url).json(body).send().await?;

        let response = Self::handle_response_status(response).await?;
        let _ = response.bytes().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BudgetService for BudgetClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn log_expense(&self, expense: &Expense) -> Result<(), ServiceError> {
        self.post_request_no_response("log_expense", expense).await
    }

    async fn add_budget(&self, budget: &BudgetCategory) -> Result<(), ServiceError> {
        self.post_request_no_response("add_budget", budget).await
    }

    async fn get_summary(&self) -> Result<Vec<SummaryItem>, ServiceError> {
        let response: SummaryResponse = self.get_request("get_summary").await?;
        Ok(response.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(url: String) -> BudgetClient {
        BudgetClient::new(Environment::Custom { service_url: url }).unwrap()
    }

    #[tokio::test]
    async fn test_get_summary_preserves_server_order() {
        let router = Router::new().route(
            "/get_summary",
            get(|| async {
                Json(json!({"summary": [
                    {"category": "Rent", "spent": 900, "budget": 1000, "remaining": 100, "percentage": 90},
                    {"category": "Food", "spent": 20, "budget": 100, "remaining": 80, "percentage": 20},
                ]}))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let items = client.get_summary().await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food"]);
    }

    #[tokio::test]
    async fn test_log_expense_sends_json_body() {
        let router = Router::new().route(
            "/log_expense",
            post(|Json(body): Json<Value>| async move {
                if body == json!({"category": "Food", "amount": 12.5}) {
                    (StatusCode::OK, Json(json!({"message": "Expense logged successfully"})))
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({"error": "unexpected body"})))
                }
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let expense = Expense {
            category: "Food".to_string(),
            amount: 12.5,
        };
        client.log_expense(&expense).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_budget_reports_service_message() {
        let router = Router::new().route(
            "/add_budget",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Invalid budget amount"})),
                )
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let budget = BudgetCategory {
            name: "Travel".to_string(),
            budget_amount: 5.0,
        };
        match client.add_budget(&budget).await {
            Err(ServiceError::Http { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Invalid budget amount"));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    // A failure status with a non-JSON body yields no message rather than a decode error.
    async fn test_failure_without_error_body() {
        let router = Router::new().route(
            "/get_summary",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(spawn_backend(router).await);

        match client.get_summary().await {
            Err(ServiceError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, None);
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_reqwest_error() {
        // Bind then drop to obtain a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let result = client.get_summary().await;
        assert!(matches!(result, Err(ServiceError::Reqwest(_))));
    }
}
