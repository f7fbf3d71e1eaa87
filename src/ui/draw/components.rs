//! Reusable UI components
//!
//! Header with the title and base URL, footer with command help.

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Definition API";

/// Render the application header with the base URL used for copied links
pub fn render_header(frame: &mut Frame, area: Rect, base_url: &str) {
    let header_text = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(base_url.to_string(), Style::default().fg(Color::Cyan)),
    ]);

    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = if state.ui.expanded_row.is_some() {
        "j/k/↑/↓:Nav Enter/Space:Copy URL & collapse Esc:Collapse | q:Quit"
    } else {
        "j/k/↑/↓:Nav Enter/Space:Copy URL & expand g/G:Top/Bottom | q:Quit"
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
