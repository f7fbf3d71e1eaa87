//! Endpoint list rendering
//!
//! Every descriptor is one list item. The expanded row grows to show the full URL and,
//! when enabled, the request body schema and example response.

use super::json::{json_lines, KeyHighlight};
use super::styling::{self, method_style, METHOD_COLUMN_WIDTH};
use crate::state::AppState;
use crate::types::EndpointDescriptor;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const DETAIL_INDENT: &str = "    ";

/// Per-row flags that affect how a row is drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct RowFlags {
    pub copied: bool,
    pub expanded: bool,
    pub show_examples: bool,
}

pub fn render_endpoint_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list_state: &mut ListState,
) {
    let endpoints = state.endpoints();
    let title = format!("API Endpoints ({})", endpoints.len());

    if endpoints.is_empty() {
        let empty = Paragraph::new("No endpoints configured")
            .style(Style::default().fg(styling::MUTED))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = endpoints
        .iter()
        .enumerate()
        .map(|(index, endpoint)| {
            let flags = RowFlags {
                copied: state.ui.copied_row == Some(index),
                expanded: state.ui.expanded_row == Some(index),
                show_examples: state.dashboard.show_examples,
            };
            ListItem::new(endpoint_row_lines(
                endpoint,
                &state.dashboard.base_url,
                flags,
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Rgb(30, 30, 30)))
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Lines of a single endpoint row: the header line, plus details when expanded
pub fn endpoint_row_lines(
    endpoint: &EndpointDescriptor,
    base_url: &str,
    flags: RowFlags,
) -> Vec<Line<'static>> {
    let icon = if flags.expanded { "▼" } else { "▶" };
    let copy_marker = if flags.copied {
        Span::styled(
            "✓ copied",
            Style::default()
                .fg(styling::COPIED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("⧉ copy", Style::default().fg(styling::MUTED))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(styling::MUTED)),
        Span::styled(
            format!("{:width$}", endpoint.method.as_str(), width = METHOD_COLUMN_WIDTH),
            method_style(endpoint.method),
        ),
        Span::styled(endpoint.path.clone(), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(
            endpoint.description.clone(),
            Style::default().fg(styling::LABEL),
        ),
        Span::raw("  "),
        copy_marker,
    ])];

    if !flags.expanded {
        return lines;
    }

    lines.push(Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled("URL: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            endpoint.full_url(base_url),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    if flags.show_examples {
        if let Some(schema) = &endpoint.request_body_schema {
            push_section(
                &mut lines,
                "Request body:",
                json_lines(schema, KeyHighlight::SchemaFields),
            );
        }
        if let Some(example) = &endpoint.example_response {
            push_section(
                &mut lines,
                "Example response:",
                json_lines(example, KeyHighlight::Plain),
            );
        }
        if !endpoint.has_details() {
            lines.push(Line::from(vec![
                Span::raw(DETAIL_INDENT),
                Span::styled(
                    "No request body or example for this endpoint",
                    Style::default().fg(styling::MUTED),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, heading: &str, body: Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled(
            heading.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    for line in body {
        let mut spans = vec![Span::raw(DETAIL_INDENT)];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::types::HttpMethod;
    use crate::ui::draw::test_support::render_to_lines;
    use serde_json::json;

    const BASE: &str = "https://api.example.com";

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn find_words() -> EndpointDescriptor {
        EndpointDescriptor::new(HttpMethod::Post, "/find-words", "Find words")
            .with_request_body(json!({ "word": "string", "is_verb": "boolean" }))
            .with_example(json!({ "total": 3, "hasMore": false }))
    }

    #[test]
    fn test_collapsed_row_is_single_line() {
        let lines = endpoint_row_lines(&find_words(), BASE, RowFlags::default());
        assert_eq!(lines.len(), 1);

        let header = line_text(&lines[0]);
        assert!(header.contains("POST"));
        assert!(header.contains("/find-words"));
        assert!(header.contains("Find words"));
        assert!(header.contains("⧉ copy"));
    }

    #[test]
    fn test_copied_row_shows_marker() {
        let flags = RowFlags {
            copied: true,
            ..RowFlags::default()
        };
        let lines = endpoint_row_lines(&find_words(), BASE, flags);
        assert!(line_text(&lines[0]).contains("✓ copied"));
    }

    #[test]
    fn test_expanded_row_shows_schema_and_example() {
        let flags = RowFlags {
            expanded: true,
            show_examples: true,
            ..RowFlags::default()
        };
        let text = texts(&endpoint_row_lines(&find_words(), BASE, flags)).join("\n");

        assert!(text.contains("URL: https://api.example.com/find-words"));
        assert!(text.contains("Request body:"));
        assert!(text.contains("\"is_verb\": \"boolean\""));
        assert!(text.contains("Example response:"));
        assert!(text.contains("\"hasMore\": false"));
    }

    #[test]
    fn test_expanded_row_without_examples_enabled() {
        let flags = RowFlags {
            expanded: true,
            show_examples: false,
            ..RowFlags::default()
        };
        let text = texts(&endpoint_row_lines(&find_words(), BASE, flags)).join("\n");

        assert!(text.contains("URL: https://api.example.com/find-words"));
        assert!(!text.contains("Request body:"));
        assert!(!text.contains("Example response:"));
    }

    #[test]
    fn test_expanded_row_without_details() {
        let endpoint = EndpointDescriptor::new(HttpMethod::Get, "/stats", "Stats");
        let flags = RowFlags {
            expanded: true,
            show_examples: true,
            ..RowFlags::default()
        };
        let text = texts(&endpoint_row_lines(&endpoint, BASE, flags)).join("\n");
        assert!(text.contains("No request body or example"));
    }

    #[test]
    fn test_list_renders_expanded_row_inline() {
        let mut state = AppState::new(DashboardConfig {
            base_url: BASE.to_string(),
            endpoints: vec![
                EndpointDescriptor::new(HttpMethod::Get, "/words/{word}/count", "Count"),
                find_words(),
            ],
            ..DashboardConfig::default()
        });
        state.ui.expanded_row = Some(1);
        state.ui.copied_row = Some(0);

        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let screen = render_to_lines(100, 20, |frame| {
            render_endpoint_list(frame, frame.area(), &state, &mut list_state);
        })
        .join("\n");

        assert!(screen.contains("API Endpoints (2)"));
        assert!(screen.contains(">> "));
        assert!(screen.contains("✓ copied"));
        assert!(screen.contains("Request body:"));
    }

    #[test]
    fn test_empty_list() {
        let state = AppState::new(DashboardConfig {
            endpoints: vec![],
            ..DashboardConfig::default()
        });
        let mut list_state = ListState::default();
        let screen = render_to_lines(60, 5, |frame| {
            render_endpoint_list(frame, frame.area(), &state, &mut list_state);
        })
        .join("\n");
        assert!(screen.contains("No endpoints configured"));
    }
}
