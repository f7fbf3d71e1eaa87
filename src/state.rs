use crate::config::DashboardConfig;
use crate::types::EndpointDescriptor;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// State shared between the UI loop and the copy indicator timer
pub type SharedState = Arc<RwLock<AppState>>;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Static data the view renders, never mutated after startup
    pub dashboard: DashboardConfig,
    pub ui: UiState,
}

/// Transient selection state of the endpoint list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Keyboard cursor in the endpoint list
    pub selected_row: usize,
    /// Row whose schema/example block is shown
    pub expanded_row: Option<usize>,
    /// Row whose URL was most recently copied
    pub copied_row: Option<usize>,
    /// Bumped on every successful copy so an outdated clear timer is a no-op
    pub copy_generation: u64,
}

impl AppState {
    pub fn new(dashboard: DashboardConfig) -> Self {
        Self {
            dashboard,
            ui: UiState::default(),
        }
    }

    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.dashboard.endpoints
    }

    pub fn endpoint(&self, index: usize) -> Option<&EndpointDescriptor> {
        self.dashboard.endpoints.get(index)
    }
}

/// Read lock that survives a panicked writer
pub fn read_state(state: &SharedState) -> RwLockReadGuard<'_, AppState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write lock that survives a panicked writer
pub fn write_state(state: &SharedState) -> RwLockWriteGuard<'_, AppState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}
