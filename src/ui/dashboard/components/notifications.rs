//! Notification stack component

use super::super::state::DashboardState;
use super::super::utils::{notification_color, notification_icon};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Most recent notification first.
pub fn render_notifications(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .notifications
        .visible()
        .map(|n| {
            Line::from(vec![
                Span::raw(format!("{} ", notification_icon(n.kind))),
                Span::styled(
                    n.message.clone(),
                    Style::default()
                        .fg(notification_color(n.kind))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let title = if state.notifications.is_empty() {
        "NOTIFICATIONS".to_string()
    } else {
        format!("NOTIFICATIONS ({})", state.notifications.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
