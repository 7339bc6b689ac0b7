//! Strategy-vs-baseline line chart.

use growthcalc_core::{BASELINE_SERIES_NAME, ComparisonSeries, STRATEGY_SERIES_NAME};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::util::format::format_compact_currency;
use crate::util::styles::{BASELINE_COLOR, STRATEGY_COLOR};

/// Render the two aligned series as line plots with shared axes.
pub fn render_comparison_chart(frame: &mut Frame, area: Rect, series: &ComparisonSeries) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" PROJECTED GROWTH ");

    if series.is_empty() {
        let paragraph = Paragraph::new("No data to display").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let strategy_data: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.month as f64, p.strategy))
        .collect();
    let baseline_data: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.month as f64, p.baseline))
        .collect();

    let last_month = series.points.last().map_or(0, |p| p.month);
    let principal = series.points[0].strategy;

    // A little headroom above the top curve, a little floor below the start
    let y_max = series.max_value() * 1.02;
    let y_min = principal * 0.98;
    let y_mid = (y_min + y_max) / 2.0;

    let datasets = vec![
        Dataset::default()
            .name(BASELINE_SERIES_NAME)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(BASELINE_COLOR))
            .data(&baseline_data),
        Dataset::default()
            .name(STRATEGY_SERIES_NAME)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(STRATEGY_COLOR))
            .data(&strategy_data),
    ];

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([0.0, last_month as f64])
        .labels([
            "Start".to_string(),
            format!("Month {}", last_month / 2),
            format!("Month {last_month}"),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([y_min, y_max])
        .labels([
            format_compact_currency(y_min),
            format_compact_currency(y_mid),
            format_compact_currency(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
