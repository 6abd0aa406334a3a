//! Transient notifications
//!
//! Each notification carries its own deadline. Expiring one never touches
//! another, so overlapping notifications disappear independently.

use crate::consts::cli_consts::NOTIFICATION_TTL;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Stack of visible notifications, most recent first.
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    visible: VecDeque<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            visible: VecDeque::new(),
        }
    }

    /// Inserts a notification on top of the stack.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.visible.push_front(Notification {
            message: message.into(),
            kind,
            created_at: now,
        });
    }

    /// Removes every notification whose window has elapsed.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.visible.retain(|n| !n.is_expired(now, ttl));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
