//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Cyan,
    }
}

pub fn method_style(method: HttpMethod) -> Style {
    Style::default()
        .fg(get_method_color(method))
        .add_modifier(Modifier::BOLD)
}

/// Method column width for consistent formatting
pub const METHOD_COLUMN_WIDTH: usize = 7;

pub const MUTED: Color = Color::DarkGray;
pub const LABEL: Color = Color::Gray;
pub const COPIED: Color = Color::Green;

// JSON token colors
pub const JSON_KEY: Color = Color::LightBlue;
pub const JSON_STRING: Color = Color::LightGreen;
pub const JSON_NUMBER: Color = Color::LightMagenta;
pub const JSON_LITERAL: Color = Color::LightRed;
pub const JSON_PUNCT: Color = Color::Gray;

/// Color of a request body field name, known fields stand out
pub fn schema_key_color(key: &str) -> Color {
    match key {
        "word" => Color::Yellow,
        "is_verb" => Color::Magenta,
        _ => JSON_KEY,
    }
}
