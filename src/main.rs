mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod logging;
mod notifications;
mod service;
mod session;
mod summary;
mod ui;

use crate::config::{Config, get_config_path, get_log_path};
use crate::environment::Environment;
use crate::session::{HeadlessCommand, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for a personal budgeting service
struct Args {
    /// Command to execute. Without one, the interactive dashboard starts.
    #[command(subcommand)]
    command: Option<Command>,

    /// Disable background colors in the dashboard
    #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
    no_background_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Log an expense against an existing budget category
    ///
    /// The exit status reflects the expense only. The summary refresh that
    /// follows a logged expense reports its own failure without changing it.
    LogExpense {
        /// Budget category name
        #[arg(long, value_name = "CATEGORY")]
        category: String,

        /// Amount spent, a positive number
        #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
    },
    /// Add a new budget category
    ///
    /// The exit status reflects the new category only. The summary refresh
    /// that follows reports its own failure without changing it.
    AddBudget {
        /// Budget category name
        #[arg(long, value_name = "CATEGORY")]
        category: String,

        /// Budget amount, a positive number
        #[arg(long, value_name = "BUDGET", allow_hyphen_values = true)]
        budget: String,
    },
    /// Print the per-category summary
    Summary,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let environment = Environment::from_env();

    match args.command {
        None => {
            logging::init_file(&get_log_path()?)?;
            let config = Config::load_or_create(&get_config_path()?)?;
            let with_background = config.with_background_color && !args.no_background_color;

            let session = setup_session(environment)?;
            run_tui_mode(session, with_background).await
        }
        Some(command) => {
            logging::init_stderr();
            let command = match command {
                Command::LogExpense { category, amount } => {
                    HeadlessCommand::LogExpense { category, amount }
                }
                Command::AddBudget { category, budget } => {
                    HeadlessCommand::AddBudget { category, budget }
                }
                Command::Summary => HeadlessCommand::Summary,
            };

            let session = setup_session(environment)?;
            run_headless_mode(session, command).await
        }
    }
}
