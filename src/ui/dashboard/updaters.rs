//! Dashboard state update logic
//!
//! Applies queued events to the dashboard state

use super::state::DashboardState;

use crate::events::Event as DashboardEvent;
use crate::summary::render_summary;

use std::time::Instant;

impl DashboardState {
    /// Processes queued events and drops expired notifications.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event, now);
        }

        self.notifications.expire(now);
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: DashboardEvent, now: Instant) {
        match event {
            DashboardEvent::Notify {
                ref message, kind, ..
            } => {
                self.notifications.push(message.clone(), kind, now);
                self.add_to_activity_log(event);
            }
            DashboardEvent::FormSubmitted(form) => self.inputs.clear(form),
            DashboardEvent::SummaryLoaded(items) => {
                self.summary = render_summary(&items);
                self.summary_loaded = true;
                self.summary_scroll = self
                    .summary_scroll
                    .min(self.summary.len().saturating_sub(1));
            }
            DashboardEvent::RequestStarted(_) => self.in_flight += 1,
            DashboardEvent::RequestFinished(_) => {
                self.in_flight = self.in_flight.saturating_sub(1);
            }
        }
    }
}
