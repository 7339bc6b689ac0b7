use crate::components::{Component, EventResult, charts::render_comparison_chart};
use crate::state::AppState;
use crate::util::format::format_currency;
use crate::util::io::atomic_write;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Screen;

pub struct ChartScreen;

impl ChartScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let start_idx = state.chart_state.scroll_offset;
        let visible_count = (area.height as usize).saturating_sub(3); // Borders and header

        // Header
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!(
                "{:>10} {:>14} {:>14} {:>14}",
                "Month", "Strategy", "Baseline", "Advantage"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )))];

        // Data rows
        for point in state.series.points.iter().skip(start_idx).take(visible_count) {
            items.push(ListItem::new(Line::from(format!(
                "{:>10} {:>14} {:>14} {:>14}",
                point.label,
                format_currency(point.strategy),
                format_currency(point.baseline),
                format_currency(point.strategy - point.baseline)
            ))));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MONTHLY BREAKDOWN "),
        );

        frame.render_widget(list, area);
    }

    /// Write the current series as CSV into the data directory.
    fn export_csv(&self, state: &mut AppState) {
        let Some(data_dir) = state.data_dir.clone() else {
            state.set_error("No data directory available for export".to_string());
            return;
        };

        let mut csv = String::from("month,label,strategy,baseline\n");
        for point in &state.series.points {
            csv.push_str(&format!(
                "{},{},{:.2},{:.2}\n",
                point.month, point.label, point.strategy, point.baseline
            ));
        }

        let path = data_dir.join("projection.csv");
        match atomic_write(&path, &csv) {
            Ok(()) => {
                tracing::info!("exported series to {}", path.display());
                state.set_status(format!("Exported {} points to {}", state.series.len(), path.display()));
            }
            Err(e) => state.set_error(format!("Failed to export CSV: {}", e)),
        }
    }
}

impl Component for ChartScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if state.chart_state.scroll_offset + 1 < state.series.len() {
                    state.chart_state.scroll_offset += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.chart_state.scroll_offset = state.chart_state.scroll_offset.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                self.export_csv(state);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),    // Chart
                Constraint::Length(12), // Monthly breakdown
            ])
            .split(area);

        render_comparison_chart(frame, chunks[0], &state.series);
        self.render_breakdown(frame, chunks[1], state);
    }
}

impl Screen for ChartScreen {
    fn title(&self) -> &str {
        "Chart"
    }
}
