//! Horizontal slider rendering for the calculator inputs.

use growthcalc_core::SliderBounds;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::styles::{FOCUS_COLOR, focused_block};

/// Horizontal fill characters for sub-character precision (empty to full)
const FILL_CHARS: [&str; 9] = [" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];

/// Render a labeled slider: current value, a filled track, and the range
/// ends underneath. The track fill position comes from `bounds.ratio`.
pub fn render_slider(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value_text: &str,
    min_text: &str,
    max_text: &str,
    bounds: &SliderBounds,
    value: f64,
    focused: bool,
) {
    let block = focused_block(title, focused);

    let track_width = (area.width as usize).saturating_sub(4).max(1);
    let fill_eighths = (bounds.ratio(value) * (track_width * 8) as f64).round() as usize;
    let full = fill_eighths / 8;
    let partial = fill_eighths % 8;

    let mut track = String::with_capacity(track_width * 3);
    for _ in 0..full {
        track.push_str(FILL_CHARS[8]);
    }
    if full < track_width {
        track.push_str(FILL_CHARS[partial]);
        for _ in full + 1..track_width {
            track.push('·');
        }
    }

    let track_color = if focused { FOCUS_COLOR } else { Color::Cyan };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let gap = track_width
        .saturating_sub(min_text.len() + max_text.len())
        .max(1);
    let lines = vec![
        Line::from(Span::styled(format!(" {value_text}"), value_style)),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(track, Style::default().fg(track_color)),
        ]),
        Line::from(Span::styled(
            format!(" {min_text}{}{max_text}", " ".repeat(gap)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
