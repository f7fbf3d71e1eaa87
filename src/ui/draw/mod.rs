//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Header and footer
//! - `stats`: Metric cards strip
//! - `chart`: Definitions per source bar chart
//! - `endpoints`: Endpoint list with expandable rows
//! - `json`: Styled JSON token rendering
//! - `styling`: Color schemes and style constants

mod chart;
mod components;
mod endpoints;
mod json;
mod stats;
mod styling;

pub use chart::render_definitions_chart;
pub use components::{render_footer, render_header};
pub use endpoints::render_endpoint_list;
pub use stats::render_stats_strip;

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame,
};

/// Draw the whole dashboard: header, stats, chart, endpoints, footer
pub fn draw_dashboard(frame: &mut Frame, state: &AppState, list_state: &mut ListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(4),  // Stats strip
            Constraint::Length(12), // Chart
            Constraint::Min(0),     // Endpoints
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    // keep the highlighted row in sync with the keyboard cursor
    if state.endpoints().is_empty() {
        list_state.select(None);
    } else {
        list_state.select(Some(state.ui.selected_row));
    }

    render_header(frame, chunks[0], &state.dashboard.base_url);
    render_stats_strip(frame, chunks[1], &state.dashboard.stats);
    render_definitions_chart(frame, chunks[2], &state.dashboard.sources);
    render_endpoint_list(frame, chunks[3], state, list_state);
    render_footer(frame, chunks[4], state);
}
