//! Dashboard state management
//!
//! Contains the main dashboard state struct and the form/focus model

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event as DashboardEvent, Form};
use crate::notifications::NotificationCenter;
use crate::summary::SummaryBlock;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// The four text inputs, in focus order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    ExpenseCategory,
    ExpenseAmount,
    BudgetCategory,
    BudgetAmount,
}

impl Field {
    const ORDER: [Field; 4] = [
        Field::ExpenseCategory,
        Field::ExpenseAmount,
        Field::BudgetCategory,
        Field::BudgetAmount,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The form this input belongs to.
    pub fn form(self) -> Form {
        match self {
            Field::ExpenseCategory | Field::ExpenseAmount => Form::Expense,
            Field::BudgetCategory | Field::BudgetAmount => Form::Budget,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::ExpenseCategory | Field::BudgetCategory => "Category",
            Field::ExpenseAmount => "Amount",
            Field::BudgetAmount => "Budget",
        }
    }
}

/// Raw text of every input. Nothing is parsed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub expense_category: String,
    pub expense_amount: String,
    pub budget_category: String,
    pub budget_amount: String,
}

impl FormInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ExpenseCategory => &self.expense_category,
            Field::ExpenseAmount => &self.expense_amount,
            Field::BudgetCategory => &self.budget_category,
            Field::BudgetAmount => &self.budget_amount,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ExpenseCategory => &mut self.expense_category,
            Field::ExpenseAmount => &mut self.expense_amount,
            Field::BudgetCategory => &mut self.budget_category,
            Field::BudgetAmount => &mut self.budget_amount,
        }
    }

    pub fn clear(&mut self, form: Form) {
        match form {
            Form::Expense => {
                self.expense_category.clear();
                self.expense_amount.clear();
            }
            Form::Budget => {
                self.budget_category.clear();
                self.budget_amount.clear();
            }
        }
    }
}

/// Dashboard state, owned by the UI loop.
#[derive(Debug)]
pub struct DashboardState {
    /// Base address of the budgeting service, for the header.
    pub service_url: String,
    /// The start time of the application.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,

    pub inputs: FormInputs,
    pub focus: Field,

    /// Visible notifications, most recent first.
    pub notifications: NotificationCenter,
    /// The last successfully fetched summary, in server order.
    pub summary: Vec<SummaryBlock>,
    /// Whether any summary has arrived yet.
    pub summary_loaded: bool,
    /// Index of the first summary block drawn.
    pub summary_scroll: usize,
    /// Requests issued and not yet finished.
    pub in_flight: usize,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<DashboardEvent>,
    /// Past notifications for the activity log
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(service_url: String, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            service_url,
            start_time,
            with_background_color: ui_config.with_background_color,
            inputs: FormInputs::default(),
            focus: Field::default(),
            notifications: NotificationCenter::new(),
            summary: Vec::new(),
            summary_loaded: false,
            summary_scroll: 0,
            in_flight: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: DashboardEvent) {
        self.pending_events.push_back(event);
    }

    pub fn scroll_summary_down(&mut self) {
        self.summary_scroll = (self.summary_scroll + 1).min(self.summary.len().saturating_sub(1));
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        self.inputs.get_mut(self.focus)
    }

    /// Current text of the form owning the focused input, as (category, amount).
    pub fn focused_form_values(&self) -> (Form, String, String) {
        match self.focus.form() {
            Form::Expense => (
                Form::Expense,
                self.inputs.expense_category.clone(),
                self.inputs.expense_amount.clone(),
            ),
            Form::Budget => (
                Form::Budget,
                self.inputs.budget_category.clone(),
                self.inputs.budget_amount.clone(),
            ),
        }
    }
}
