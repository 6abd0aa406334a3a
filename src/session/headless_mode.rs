//! Headless mode execution
//!
//! Runs a single flow and prints its outcome to the console.

use super::SessionData;
use crate::cli_messages::print_event;
use crate::print_cmd_info;
use crate::summary::{SummaryBlock, render_summary};
use std::error::Error;

/// One flow to run without the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    LogExpense { category: String, amount: String },
    AddBudget { category: String, budget: String },
    Summary,
}

/// Runs `command`, printing every notification it produces.
///
/// # Returns
/// * `Ok(())` - the flow succeeded
/// * `Err` - the flow failed; its notification has already been printed
pub async fn run_headless_mode(
    mut session: SessionData,
    command: HeadlessCommand,
) -> Result<(), Box<dyn Error>> {
    let controller = session.controller.clone();
    let outcome = match &command {
        HeadlessCommand::LogExpense { category, amount } => controller
            .submit_expense(category, amount)
            .await
            .map(|_| None),
        HeadlessCommand::AddBudget { category, budget } => controller
            .submit_budget(category, budget)
            .await
            .map(|_| None),
        HeadlessCommand::Summary => controller.fetch_summary().await.map(Some),
    };

    // Every sender clone is gone once the controllers are dropped.
    drop(controller);
    drop(session.controller);
    while let Some(event) = session.event_receiver.recv().await {
        print_event(&event);
    }

    match outcome {
        Ok(Some(items)) => {
            print_summary(&render_summary(&items));
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn print_summary(blocks: &[SummaryBlock]) {
    if blocks.is_empty() {
        print_cmd_info!("Summary", "No budget categories yet");
        return;
    }
    for block in blocks {
        println!("{}", format_block(block));
    }
}

/// Text rendition of one summary block.
pub fn format_block(block: &SummaryBlock) -> String {
    const BAR_WIDTH: usize = 20;
    let filled = ((block.fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{} [{}] {:.1}% ({})\n  {}\n  {}",
        block.category,
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled)),
        block.percentage,
        block.tier,
        block.spent_line,
        block.remaining_line
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::types::SummaryItem;

    #[test]
    fn test_format_block() {
        let blocks = render_summary(&[SummaryItem {
            category: "Food".to_string(),
            spent: 120.0,
            budget: 100.0,
            remaining: -20.0,
            percentage: 120.0,
        }]);
        assert_eq!(
            format_block(&blocks[0]),
            "Food [####################] 120.0% (Alert)\n  Spent: $120.00 / Budget: $100.00\n  Remaining: -$20.00"
        );
    }
}
