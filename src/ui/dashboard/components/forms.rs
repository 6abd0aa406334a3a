//! Input form components
//!
//! Renders the Log Expense and Add Budget forms side by side

use super::super::state::{DashboardState, Field};
use crate::events::Form;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_forms(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_form(
        f,
        chunks[0],
        state,
        Form::Expense,
        "LOG EXPENSE",
        [Field::ExpenseCategory, Field::ExpenseAmount],
    );
    render_form(
        f,
        chunks[1],
        state,
        Form::Budget,
        "ADD BUDGET",
        [Field::BudgetCategory, Field::BudgetAmount],
    );
}

fn render_form(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    form: Form,
    title: &str,
    fields: [Field; 2],
) {
    let focused = state.focus.form() == form;
    let border_color = if focused { Color::LightCyan } else { Color::DarkGray };

    let lines: Vec<Line> = fields
        .iter()
        .map(|field| input_line(*field, state.inputs.get(*field), state.focus == *field))
        .collect();

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn input_line(field: Field, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<9}", format!("{}:", field.label())), label_style),
        Span::styled(
            format!("{}{}", value, cursor),
            Style::default().fg(Color::White),
        ),
    ])
}
