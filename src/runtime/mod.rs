use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::engine::Engine;
use crate::logging;

mod event_loop;
mod settings;
mod startup;

#[cfg(test)]
mod tests;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();
    logging::init_tracing(&settings.logging)?;
    if let Some(msg) = warning {
        warn!("{msg}");
    }

    let catalog = startup::load_catalog(&settings.catalog)?;
    let engine = Engine::new(startup::engine_options(&settings.playback))?;
    info!(
        tracks = catalog.len(),
        tick_ms = settings.playback.tick_ms,
        "engine started"
    );
    let mut app = App::new(catalog);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &engine);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Both threads reach their terminal points before the process exits.
    let shutdown_result = engine.shutdown();
    info!("engine stopped");

    run_result?;
    shutdown_result?;
    Ok(())
}
