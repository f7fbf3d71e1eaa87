use crate::state::AppState;

/// Represents all state-changing actions of the dashboard
/// Input handling and the copy timer produce actions, apply_action is the only place
/// that mutates UiState
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateUp,
    NavigateDown,
    NavigateTop,
    NavigateBottom,

    // Row expansion
    ToggleExpanded(usize),
    CollapseExpanded,

    // Copy indicator
    MarkCopied(usize),
    ClearCopied { generation: u64 },
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    let row_count = state.endpoints().len();

    match action {
        AppAction::NavigateUp => {
            state.ui.selected_row = state.ui.selected_row.saturating_sub(1);
        }
        AppAction::NavigateDown => {
            if state.ui.selected_row + 1 < row_count {
                state.ui.selected_row += 1;
            }
        }
        AppAction::NavigateTop => {
            state.ui.selected_row = 0;
        }
        AppAction::NavigateBottom => {
            state.ui.selected_row = row_count.saturating_sub(1);
        }
        AppAction::ToggleExpanded(index) => {
            state.ui.expanded_row = if state.ui.expanded_row == Some(index) {
                None
            } else {
                Some(index)
            };
        }
        AppAction::CollapseExpanded => {
            state.ui.expanded_row = None;
        }
        AppAction::MarkCopied(index) => {
            state.ui.copied_row = Some(index);
            state.ui.copy_generation = state.ui.copy_generation.wrapping_add(1);
        }
        AppAction::ClearCopied { generation } => {
            // a newer copy owns the indicator now
            if state.ui.copy_generation == generation {
                state.ui.copied_row = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::types::{EndpointDescriptor, HttpMethod};

    fn create_test_state() -> AppState {
        let dashboard = DashboardConfig {
            endpoints: vec![
                EndpointDescriptor::new(HttpMethod::Get, "/words/{word}/count", "Count"),
                EndpointDescriptor::new(HttpMethod::Get, "/stats", "Stats"),
                EndpointDescriptor::new(HttpMethod::Post, "/find-words", "Find"),
            ],
            ..DashboardConfig::default()
        };
        AppState::new(dashboard)
    }

    #[test]
    fn test_navigate_down_stops_at_last_row() {
        let mut state = create_test_state();
        for _ in 0..5 {
            apply_action(AppAction::NavigateDown, &mut state);
        }
        assert_eq!(state.ui.selected_row, 2);
    }

    #[test]
    fn test_navigate_up_stops_at_first_row() {
        let mut state = create_test_state();
        apply_action(AppAction::NavigateUp, &mut state);
        assert_eq!(state.ui.selected_row, 0);
    }

    #[test]
    fn test_navigate_top_and_bottom() {
        let mut state = create_test_state();
        apply_action(AppAction::NavigateBottom, &mut state);
        assert_eq!(state.ui.selected_row, 2);

        apply_action(AppAction::NavigateTop, &mut state);
        assert_eq!(state.ui.selected_row, 0);
    }

    #[test]
    fn test_navigate_empty_list() {
        let mut state = AppState::new(DashboardConfig {
            endpoints: vec![],
            ..DashboardConfig::default()
        });
        apply_action(AppAction::NavigateDown, &mut state);
        apply_action(AppAction::NavigateBottom, &mut state);
        assert_eq!(state.ui.selected_row, 0);
    }

    #[test]
    fn test_toggle_expanded_twice_collapses() {
        let mut state = create_test_state();
        assert_eq!(state.ui.expanded_row, None);

        apply_action(AppAction::ToggleExpanded(1), &mut state);
        assert_eq!(state.ui.expanded_row, Some(1));

        apply_action(AppAction::ToggleExpanded(1), &mut state);
        assert_eq!(state.ui.expanded_row, None);
    }

    #[test]
    fn test_toggle_expanded_moves_to_other_row() {
        let mut state = create_test_state();
        apply_action(AppAction::ToggleExpanded(0), &mut state);
        apply_action(AppAction::ToggleExpanded(2), &mut state);
        assert_eq!(state.ui.expanded_row, Some(2));
    }

    #[test]
    fn test_collapse_expanded() {
        let mut state = create_test_state();
        apply_action(AppAction::ToggleExpanded(0), &mut state);
        apply_action(AppAction::CollapseExpanded, &mut state);
        assert_eq!(state.ui.expanded_row, None);
    }

    #[test]
    fn test_clear_copied_matching_generation() {
        let mut state = create_test_state();
        apply_action(AppAction::MarkCopied(1), &mut state);
        let generation = state.ui.copy_generation;

        apply_action(AppAction::ClearCopied { generation }, &mut state);
        assert_eq!(state.ui.copied_row, None);
    }

    #[test]
    fn test_stale_clear_does_not_reset_newer_copy() {
        let mut state = create_test_state();
        apply_action(AppAction::MarkCopied(0), &mut state);
        let stale = state.ui.copy_generation;
        apply_action(AppAction::MarkCopied(2), &mut state);

        apply_action(AppAction::ClearCopied { generation: stale }, &mut state);
        assert_eq!(state.ui.copied_row, Some(2));
    }

    #[test]
    fn test_copied_and_expanded_are_independent() {
        let mut state = create_test_state();
        apply_action(AppAction::ToggleExpanded(0), &mut state);
        apply_action(AppAction::MarkCopied(2), &mut state);

        assert_eq!(state.ui.expanded_row, Some(0));
        assert_eq!(state.ui.copied_row, Some(2));
    }
}
