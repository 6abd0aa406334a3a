//! Form input validation

use crate::service::types::{BudgetCategory, Expense};

/// Returns the trimmed category, or `None` when nothing is left.
pub fn parse_category(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a strictly positive, finite amount.
pub fn parse_amount(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

pub fn expense(category: &str, amount: &str) -> Option<Expense> {
    Some(Expense {
        category: parse_category(category)?,
        amount: parse_amount(amount)?,
    })
}

pub fn budget(category: &str, budget: &str) -> Option<BudgetCategory> {
    Some(BudgetCategory {
        name: parse_category(category)?,
        budget_amount: parse_amount(budget)?,
    })
}
