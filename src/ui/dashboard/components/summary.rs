//! Summary component
//!
//! One bordered block per category: a tier-colored gauge plus the spent and
//! remaining lines.

use super::super::state::DashboardState;
use super::super::utils::tier_color;
use crate::summary::SummaryBlock;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

/// Rows used by one category block: borders, gauge and two text lines.
const BLOCK_HEIGHT: u16 = 5;

pub fn render_summary_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let panel = Block::default()
        .title("BUDGET SUMMARY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = panel.inner(area);
    f.render_widget(panel, area);

    if state.summary.is_empty() {
        let text = if state.summary_loaded {
            "No budget categories yet"
        } else {
            "Loading summary..."
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let (offset, shown) = visible_window(state.summary.len(), state.summary_scroll, inner.height);
    let overflow = shown < state.summary.len();

    let mut constraints = vec![Constraint::Length(BLOCK_HEIGHT); shown];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (block, row) in state.summary[offset..offset + shown].iter().zip(rows.iter()) {
        render_block(f, *row, block);
    }

    if overflow {
        let marker = Paragraph::new(format!(
            "Categories {}-{} of {} (PgUp/PgDn)",
            offset + 1,
            offset + shown,
            state.summary.len()
        ))
        .style(Style::default().fg(Color::LightYellow));
        f.render_widget(marker, rows[shown]);
    }
}

/// First block index and number of blocks drawn for `total` blocks in
/// `height` rows, starting near `scroll`. One row is kept for the position
/// marker whenever not every block fits.
pub fn visible_window(total: usize, scroll: usize, height: u16) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total * BLOCK_HEIGHT as usize <= height as usize {
        return (0, total);
    }
    let capacity = (height.saturating_sub(1) / BLOCK_HEIGHT).max(1) as usize;
    let shown = capacity.min(total);
    let offset = scroll.min(total - shown);
    (offset, shown)
}

fn render_block(f: &mut Frame, area: Rect, block: &SummaryBlock) {
    let color = tier_color(block.tier);

    let frame = Block::default()
        .title(Line::styled(
            block.category.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(40, 44, 52)))
        .ratio(block.fill_percent / 100.0)
        .label(format!("{:.1}%", block.percentage));
    f.render_widget(gauge, rows[0]);

    let text = Paragraph::new(vec![
        Line::from(block.spent_line.clone()),
        Line::from(block.remaining_line.clone()),
    ])
    .style(Style::default().fg(Color::White));
    f.render_widget(text, rows[1]);
}
