//! Main application state and UI loop
//!
//! Contains the App struct, key handling and the main UI loop

use crate::consts::cli_consts::UI_TICK;
use crate::controller::DashboardController;
use crate::events::{Event as DashboardEvent, Form};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// UI configuration data
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Refresh,
    Submit {
        form: Form,
        category: String,
        amount: String,
    },
}

/// Application state
pub struct App {
    controller: DashboardController,

    /// Receives events from request tasks.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    state: DashboardState,
}

impl App {
    pub fn new(
        controller: DashboardController,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let state = DashboardState::new(controller.service_url(), Instant::now(), ui_config);
        Self {
            controller,
            event_receiver,
            state,
        }
    }

    /// Loads the summary once on entering the dashboard. Failures are
    /// reported and never retried.
    pub fn start(&self) -> JoinHandle<()> {
        self.controller.spawn_fetch_summary()
    }

    fn dispatch(&self, action: Action) {
        match action {
            Action::Submit {
                form: Form::Expense,
                category,
                amount,
            } => {
                self.controller.spawn_submit_expense(category, amount);
            }
            Action::Submit {
                form: Form::Budget,
                category,
                amount,
            } => {
                self.controller.spawn_submit_budget(category, amount);
            }
            Action::Refresh => {
                self.controller.spawn_fetch_summary();
            }
            Action::None | Action::Quit => {}
        }
    }
}

/// Applies a key press to the dashboard and returns the resulting action.
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('r') if ctrl => Action::Refresh,
        KeyCode::F(5) => Action::Refresh,
        KeyCode::PageDown | KeyCode::Down => {
            state.scroll_summary_down();
            Action::None
        }
        KeyCode::PageUp | KeyCode::Up => {
            state.scroll_summary_up();
            Action::None
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            Action::None
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
            Action::None
        }
        KeyCode::Backspace => {
            state.focused_input_mut().pop();
            Action::None
        }
        KeyCode::Enter => {
            let (form, category, amount) = state.focused_form_values();
            Action::Submit {
                form,
                category,
                amount,
            }
        }
        KeyCode::Char(c) if !ctrl => {
            state.focused_input_mut().push(c);
            Action::None
        }
        _ => Action::None,
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.start();

    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            debug!("UI received: {}", event);
            app.state.add_event(event);
        }

        app.state.update(Instant::now());
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(UI_TICK)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match handle_key(&mut app.state, key) {
                    Action::Quit => return Ok(()),
                    action => app.dispatch(action),
                }
            }
        }
    }
}
