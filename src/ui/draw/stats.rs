//! Stats strip: one bordered card per metric, side by side.

use super::styling;
use crate::types::MetricCard;
use crate::utils::format_metric;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_stats_strip(frame: &mut Frame, area: Rect, stats: &[MetricCard]) {
    if stats.is_empty() {
        let empty = Paragraph::new("No statistics")
            .style(Style::default().fg(styling::MUTED))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let count = stats.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, column) in stats.iter().zip(columns.iter()) {
        let paragraph = Paragraph::new(card_lines(card))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(styling::MUTED)),
            );
        frame.render_widget(paragraph, *column);
    }
}

/// Label on top, formatted value below
fn card_lines(card: &MetricCard) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            card.label.clone(),
            Style::default().fg(styling::LABEL),
        )),
        Line::from(Span::styled(
            format_metric(&card.value),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]
}
