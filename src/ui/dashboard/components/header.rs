//! Dashboard header component
//!
//! Renders the title and connection line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Duration;

/// Render header with title, service address and request activity.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("BUDGET DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Spinner while any request is outstanding
    const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
    let activity = if state.in_flight > 0 {
        Span::styled(
            format!(
                "{} {} request(s) in flight",
                SPINNER[(state.tick / 2) % SPINNER.len()],
                state.in_flight
            ),
            Style::default().fg(Color::LightYellow),
        )
    } else {
        Span::styled("Idle", Style::default().fg(Color::DarkGray))
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Service: {}  ", state.service_url),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(
            format!("Uptime: {}  ", format_uptime(state.start_time.elapsed())),
            Style::default().fg(Color::LightGreen),
        ),
        activity,
    ]))
    .alignment(Alignment::Center);
    f.render_widget(status, header_chunks[1]);
}

/// `1h 2m 3s`, dropping the leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
