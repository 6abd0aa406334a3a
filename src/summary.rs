//! Summary rendering
//!
//! Turns the service's summary items into display blocks. Nothing here
//! touches the terminal; the dashboard draws whatever `render_summary` returns.

use crate::consts::cli_consts::tiers::{ALERT_ABOVE, WARNING_ABOVE};
use crate::service::types::SummaryItem;

/// Usage tier of a category, driving its bar color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ColorTier {
    Normal,
    Warning,
    Alert,
}

impl ColorTier {
    /// Classifies a percentage already rounded to display precision.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage > ALERT_ABOVE {
            ColorTier::Alert
        } else if percentage > WARNING_ABOVE {
            ColorTier::Warning
        } else {
            ColorTier::Normal
        }
    }
}

/// One rendered category.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBlock {
    pub category: String,
    /// Percentage rounded to one decimal, as displayed.
    pub percentage: f64,
    /// Filled fraction of the bar in percent, within `0..=100`.
    pub fill_percent: f64,
    pub tier: ColorTier,
    /// e.g. `Spent: $90.00 / Budget: $100.00`
    pub spent_line: String,
    /// e.g. `Remaining: $10.00`
    pub remaining_line: String,
}

/// Renders every item, in the order received.
pub fn render_summary(items: &[SummaryItem]) -> Vec<SummaryBlock> {
    items.iter().map(render_item).collect()
}

fn render_item(item: &SummaryItem) -> SummaryBlock {
    let percentage = round_to_tenth(item.percentage);
    SummaryBlock {
        category: item.category.clone(),
        percentage,
        fill_percent: bar_fill(percentage),
        tier: ColorTier::for_percentage(percentage),
        spent_line: format!(
            "Spent: {} / Budget: {}",
            format_currency(item.spent),
            format_currency(item.budget)
        ),
        remaining_line: format!("Remaining: {}", format_currency(item.remaining)),
    }
}

/// Rounds to one decimal place on the exact binary value, the way a
/// browser's `toFixed(1)` does: `90.05` is stored below the midpoint and
/// becomes `90.0`.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    // Exact midpoints (`x.25`, `x.75`) go away from zero; `value * 10.0` is exact for them.
    let fraction = value.abs().fract();
    if fraction == 0.25 || fraction == 0.75 {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(0.0)
}

/// Bar fill never exceeds 100 and never goes below 0.
pub fn bar_fill(percentage: f64) -> f64 {
    percentage.clamp(0.0, 100.0)
}

/// Formats US dollars: `$` prefix, two decimals, comma thousands separator.
///
/// Negative amounts put the sign before the symbol: `-$12.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}
