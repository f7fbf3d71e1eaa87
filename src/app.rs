use crate::browser::EndpointBrowser;
use crate::clipboard::SystemClipboard;
use crate::config::DashboardConfig;
use crate::state::{read_state, AppState};
use crate::ui;
use color_eyre::Result;
use ratatui::{widgets::ListState, DefaultTerminal, Frame};
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct App {
    browser: EndpointBrowser<SystemClipboard>,
    list_state: ListState,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(dashboard: DashboardConfig) -> Self {
        tracing::info!(
            "Dashboard with {} endpoints, {} sources, {} stats (examples {})",
            dashboard.endpoints.len(),
            dashboard.sources.len(),
            dashboard.stats.len(),
            if dashboard.show_examples { "on" } else { "off" },
        );

        let state = Arc::new(RwLock::new(AppState::new(dashboard)));

        Self {
            browser: EndpointBrowser::new(state, SystemClipboard::new()),
            list_state: ListState::default(),
            event_handler: ui::EventHandler::new(),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.event_handler.handle_events(&mut self.browser)?;
        }

        self.browser.shutdown();
        tracing::info!("Dashboard closed");
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = read_state(self.browser.state());
        ui::draw_dashboard(frame, &state, &mut self.list_state);
    }
}
