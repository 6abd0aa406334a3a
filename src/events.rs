//! Event System
//!
//! Events sent from request tasks to the UI loop (or to the headless printer).

use crate::notifications::NotificationKind;
use crate::service::types::SummaryItem;
use chrono::Local;
use std::fmt::Display;

/// The three request/response flows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Flow {
    LogExpense,
    AddBudget,
    FetchSummary,
}

/// The two input forms on the dashboard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Form {
    Expense,
    Budget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A user-facing outcome to show as a notification.
    Notify {
        message: String,
        kind: NotificationKind,
        timestamp: String,
    },
    /// A form's submission succeeded; its inputs should be cleared.
    FormSubmitted(Form),
    /// A fresh summary arrived and replaces the rendered one.
    SummaryLoaded(Vec<SummaryItem>),
    /// A request was issued.
    RequestStarted(Flow),
    /// A request finished, successfully or not.
    RequestFinished(Flow),
}

impl Event {
    pub fn notify(message: impl Into<String>, kind: NotificationKind) -> Self {
        Event::Notify {
            message: message.into(),
            kind,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::notify(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::notify(message, NotificationKind::Error)
    }

    /// Whether the headless printer shows this event.
    pub fn should_display(&self) -> bool {
        matches!(self, Event::Notify { .. })
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Notify {
                message,
                kind,
                timestamp,
            } => write!(f, "{} [{}] {}", kind, timestamp, message),
            Event::FormSubmitted(form) => write!(f, "{} form submitted", form),
            Event::SummaryLoaded(items) => write!(f, "Summary loaded ({} categories)", items.len()),
            Event::RequestStarted(flow) => write!(f, "{} started", flow),
            Event::RequestFinished(flow) => write!(f, "{} finished", flow),
        }
    }
}
