//! Definitions per source bar chart.

use super::styling;
use crate::types::SourceCount;
use crate::utils::{format_number, sort_sources_desc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const BAR_GAP: u16 = 1;
const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 14;

/// Render sources as bars, biggest first. No data renders an empty chart.
pub fn render_definitions_chart(frame: &mut Frame, area: Rect, sources: &[SourceCount]) {
    let sorted = sort_sources_desc(sources);

    let bars: Vec<Bar> = sorted
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.count)
                .label(Line::from(entry.source.clone()))
                .text_value(format_number(entry.count))
        })
        .collect();

    let block = Block::default()
        .title("Definitions per source")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::MUTED));
    let bar_width = bar_width_for(block.inner(area).width, bars.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Gray))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(styling::LABEL));

    frame.render_widget(chart, area);
}

/// Widest bar that still fits every source in the available width
fn bar_width_for(available: u16, bar_count: usize) -> u16 {
    if bar_count == 0 {
        return MIN_BAR_WIDTH;
    }
    let count = bar_count as u16;
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (available.saturating_sub(gaps) / count).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}
