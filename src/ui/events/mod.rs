//! Event handling for the dashboard
//!
//! Key presses are first translated into a [`KeyCommand`], which is either a pure
//! [`AppAction`] applied to the shared state, a row selection handed to the
//! [`EndpointBrowser`] (clipboard + expansion), or quitting.

mod helpers;

pub use helpers::apply;

use crate::actions::AppAction;
use crate::browser::EndpointBrowser;
use crate::clipboard::ClipboardWriter;
use crate::state::read_state;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    Quit,
    /// Copy + toggle the row under the cursor
    SelectCurrent,
    Apply(AppAction),
}

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait briefly for one input event and act on it
    pub fn handle_events<C: ClipboardWriter>(
        &mut self,
        browser: &mut EndpointBrowser<C>,
    ) -> Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // ignore release/repeat events reported by some terminals
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, browser);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key<C: ClipboardWriter>(
        &mut self,
        key: KeyEvent,
        browser: &mut EndpointBrowser<C>,
    ) {
        let Some(command) = command_for_key(key) else {
            return;
        };

        match command {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::SelectCurrent => {
                let row = read_state(browser.state()).ui.selected_row;
                browser.select_row(row);
            }
            KeyCommand::Apply(action) => apply(Arc::clone(browser.state()), action),
        }
    }
}

pub fn command_for_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') => KeyCommand::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => KeyCommand::SelectCurrent,
        KeyCode::Up | KeyCode::Char('k') => KeyCommand::Apply(AppAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => KeyCommand::Apply(AppAction::NavigateDown),
        KeyCode::Home | KeyCode::Char('g') => KeyCommand::Apply(AppAction::NavigateTop),
        KeyCode::End | KeyCode::Char('G') => KeyCommand::Apply(AppAction::NavigateBottom),
        KeyCode::Esc => KeyCommand::Apply(AppAction::CollapseExpanded),
        _ => return None,
    };
    Some(command)
}
