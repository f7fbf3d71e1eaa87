mod actions;
mod app;
mod browser;
mod clipboard;
mod config;
mod data;
mod logging;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // The terminal is not ours yet, so setup problems can still go to stderr
    match Config::app_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init(&dir.join("logs")) {
                eprintln!("Logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using built-in dashboard data: {}", e);
        Config::default()
    });

    let terminal = ratatui::init();
    let app_result = App::new(config.dashboard).run(terminal).await;
    ratatui::restore();
    app_result
}
