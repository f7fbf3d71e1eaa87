//! Helper functions for event handling

use crate::actions::{apply_action, AppAction};
use crate::state::{write_state, SharedState};

/// Apply a single action to state
pub fn apply(state: SharedState, action: AppAction) {
    tracing::trace!("Applying {:?}", action);
    let mut s = write_state(&state);
    apply_action(action, &mut s);
}
