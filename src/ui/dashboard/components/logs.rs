//! Dashboard logs panel component
//!
//! Renders past notifications with timestamps

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, notification_color, notification_icon};
use crate::events::Event;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let log_count = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .filter_map(|event| match event {
            Event::Notify {
                message,
                kind,
                timestamp,
            } => Some(Line::from(vec![
                Span::raw(format!("{} ", notification_icon(*kind))),
                Span::styled(
                    format!("{} ", format_compact_timestamp(timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(message.clone(), Style::default().fg(notification_color(*kind))),
            ])),
            _ => None,
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}
