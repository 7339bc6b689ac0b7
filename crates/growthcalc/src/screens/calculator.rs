use crate::components::{Component, EventResult, slider::render_slider};
use crate::state::{AppState, SliderField};
use crate::util::format::{format_currency, format_rate_pct};
use crate::util::styles::{HELP_COLOR, STRATEGY_COLOR, value_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

/// PgUp/PgDn move ten grid steps at once
const BIG_STEP: i32 = 10;

pub struct CalculatorScreen;

impl CalculatorScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_sliders(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(5)])
            .split(area);

        let focused = state.calculator_state.focused_field;
        let bounds = &state.config.bounds;

        render_slider(
            frame,
            chunks[0],
            " Principal ",
            &format_currency(state.input.principal),
            &format_currency(bounds.principal.min),
            &format_currency(bounds.principal.max),
            &bounds.principal,
            state.input.principal,
            focused == SliderField::Principal,
        );

        render_slider(
            frame,
            chunks[1],
            " Duration ",
            &format!("{} months", state.input.duration_months),
            &format!("{} mo", bounds.duration.min as u32),
            &format!("{} mo", bounds.duration.max as u32),
            &bounds.duration,
            state.input.duration_months as f64,
            focused == SliderField::Duration,
        );
    }

    fn render_metric_card(&self, frame: &mut Frame, area: Rect, title: &str, value: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(STRATEGY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(card, area);
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        let projection = &state.projection;
        self.render_metric_card(
            frame,
            chunks[0],
            " Monthly Rate ",
            &format_rate_pct(projection.monthly_rate_pct),
        );
        self.render_metric_card(
            frame,
            chunks[1],
            " Annualized Rate ",
            &format_rate_pct(projection.annualized_rate_pct),
        );
        self.render_metric_card(
            frame,
            chunks[2],
            " Total Return ",
            &format_currency(projection.total_return),
        );
    }

    fn render_narrative(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let projection = &state.projection;
        let months = state.input.duration_months;
        let baseline_pct = state.config.rates.baseline_annual_rate * 100.0;

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Over "),
                Span::styled(
                    format!("{months} months"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(", an initial "),
                Span::styled(
                    format_currency(state.input.principal),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" is projected to grow to "),
                Span::styled(
                    format_currency(projection.total_value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("."),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("That is "),
                Span::styled(
                    format_currency(projection.opportunity_cost),
                    value_style(projection.opportunity_cost).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " more than the {} a traditional account earning {:.0}% simple interest would return over the same {} months.",
                    format_currency(projection.baseline_return),
                    baseline_pct,
                    months
                )),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Hypothetical projection at fixed assumed rates. Not investment advice.",
                Style::default().fg(HELP_COLOR),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" OPPORTUNITY COST "));

        frame.render_widget(paragraph, area);
    }
}

impl Component for CalculatorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up => {
                state.calculator_state.focused_field = state.calculator_state.focused_field.next();
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust_focused(1);
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust_focused(-1);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                state.adjust_focused(BIG_STEP);
                EventResult::Handled
            }
            KeyCode::PageDown => {
                state.adjust_focused(-BIG_STEP);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.reset_to_defaults();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Sliders
                Constraint::Length(4),  // Metric cards
                Constraint::Min(0),     // Narrative
            ])
            .split(area);

        self.render_sliders(frame, chunks[0], state);
        self.render_metrics(frame, chunks[1], state);
        self.render_narrative(frame, chunks[2], state);
    }
}

impl Screen for CalculatorScreen {
    fn title(&self) -> &str {
        "Calculator"
    }
}
