use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::config::CalculatorConfig;
use crate::screens::{calculator::CalculatorScreen, chart::ChartScreen};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    calculator_screen: CalculatorScreen,
    chart_screen: ChartScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), PathBuf::from("."))
    }
}

impl App {
    pub fn new(config: CalculatorConfig, data_dir: PathBuf) -> Self {
        let mut state = AppState::new(config);
        state.data_dir = Some(data_dir);

        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            calculator_screen: CalculatorScreen::new(),
            chart_screen: ChartScreen::new(),
        }
    }

    /// Apply CLI-provided starting values, clamped to the configured grid.
    pub fn seed_input(&mut self, principal: Option<f64>, months: Option<f64>) {
        if principal.is_none() && months.is_none() {
            return;
        }
        let current = self.state.input;
        self.state.set_raw_input(
            principal.unwrap_or(current.principal),
            months.unwrap_or(current.duration_months as f64),
        );
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Calculator => self.calculator_screen.render(frame, area, &self.state),
            TabId::Chart => self.chart_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_messages();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Calculator => self.calculator_screen.handle_key(key_event, &mut self.state),
            TabId::Chart => self.chart_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }
}
