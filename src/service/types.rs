//! Wire types exchanged with the budgeting service

use serde::{Deserialize, Serialize};

/// An expense to record against an existing category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    pub category: String,
    pub amount: f64,
}

/// A new budget category. The service enforces name uniqueness.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BudgetCategory {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(rename = "budget")]
    pub budget_amount: f64,
}

/// Per-category spending summary computed by the service.
///
/// The client treats every field as read-only display data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    pub remaining: f64,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryResponse {
    pub summary: Vec<SummaryItem>,
}

/// Body returned by the service alongside a non-success status.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Budget categories use the service's field names on the wire.
    fn test_budget_category_wire_names() {
        let budget = BudgetCategory {
            name: "Food".to_string(),
            budget_amount: 250.0,
        };
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json, serde_json::json!({"category": "Food", "budget": 250.0}));
    }

    #[test]
    // A failure body without an error field still parses.
    fn test_error_body_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);

        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid amount"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid amount"));
    }

    #[test]
    fn test_summary_response_parses_integers() {
        let body = r#"{"summary":[{"category":"groceries","spent":50,"budget":300,"remaining":250,"percentage":16.666666666666664}]}"#;
        let parsed: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.summary.len(), 1);
        assert_eq!(parsed.summary[0].spent, 50.0);
        assert_eq!(parsed.summary[0].budget, 300.0);
    }
}
