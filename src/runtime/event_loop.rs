use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error};

use crate::app::{App, Focus};
use crate::catalog::Catalog;
use crate::config;
use crate::engine::{self, Engine, EngineError, Removal, TraversalOrder};
use crate::ui;

/// What a key press asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SwitchPane,
    Next,
    Prev,
    Add,
    Remove,
    PauseToggle,
    Skip,
    OrderToggle,
    Quit,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchPane,
        KeyCode::Char('j') | KeyCode::Down => Action::Next,
        KeyCode::Char('k') | KeyCode::Up => Action::Prev,
        KeyCode::Enter | KeyCode::Insert | KeyCode::Char('a') => Action::Add,
        KeyCode::Char('d') | KeyCode::Delete => Action::Remove,
        KeyCode::Char('p') | KeyCode::Char(' ') => Action::PauseToggle,
        KeyCode::Char('s') => Action::Skip,
        KeyCode::Char('r') => Action::OrderToggle,
        KeyCode::Char('q') | KeyCode::Backspace => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Which catalog rows are already in the playlist.
pub fn queued_flags(engine: &Engine, catalog: &Catalog) -> engine::Result<Vec<bool>> {
    catalog.tracks().iter().map(|t| engine.contains(t)).collect()
}

/// Route caller mistakes to the status line; anything else is fatal.
fn report<T>(app: &mut App, result: Result<T, EngineError>) -> Result<Option<T>, EngineError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_precondition() => {
            debug!(error = %e, "request rejected");
            app.set_status(e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Apply one action. Returns `Ok(true)` when the user asked to quit.
pub fn apply(
    action: Action,
    app: &mut App,
    engine: &Engine,
    playlist_len: usize,
) -> engine::Result<bool> {
    app.clear_status();
    match action {
        Action::SwitchPane => app.toggle_focus(),
        Action::Next => app.next(playlist_len),
        Action::Prev => app.prev(playlist_len),
        Action::Add => {
            if let Some(track) = app.selected_track().cloned() {
                let title = track.title.clone();
                if engine.contains(&track)? {
                    app.set_status(format!("{title} is already queued"));
                } else if report(app, engine.request_add(track))?.is_some() {
                    app.set_status(format!("Added: {title}"));
                }
            }
        }
        Action::Remove if app.focus != Focus::Playlist => {
            app.set_status("Switch to the playlist pane to remove");
        }
        Action::Remove => {
            let position = app.playlist_selected;
            match report(app, engine.request_remove(position))? {
                Some(Removal::Removed(t)) => app.set_status(format!("Removed: {}", t.title)),
                Some(Removal::Deferred) => {
                    app.set_status("Removing the playing track once playback moves on")
                }
                None => {}
            }
        }
        Action::PauseToggle => {
            let paused = engine.request_pause_toggle()?;
            app.set_status(if paused { "Paused" } else { "Resumed" });
        }
        Action::Skip => {
            if engine.request_skip()? {
                app.set_status("Skipped");
            } else {
                app.set_status("Nothing to skip");
            }
        }
        Action::OrderToggle => {
            let order = engine.request_order_toggle()?;
            app.set_status(match order {
                TraversalOrder::Sequential => "Order: Sequential",
                TraversalOrder::Random => "Order: Random",
            });
        }
        Action::Quit => {
            engine.request_quit()?;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Main terminal event loop: draws engine snapshots and forwards key presses
/// to the engine. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    engine: &Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Err(e) = engine.health() {
            error!(error = %e, "playback engine stopped");
            return Err(e.into());
        }

        let info = engine.snapshot()?;
        let queue = engine.queue()?;
        let queued = queued_flags(engine, &app.catalog)?;
        app.follow_playing(&info);
        app.clamp_playlist_selection(queue.len());

        terminal.draw(|f| ui::draw(f, app, &info, &queue, &queued, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = action_for(key) else {
                    continue;
                };
                if apply(action, app, engine, queue.len())? {
                    break;
                }
            }
        }
    }

    Ok(())
}
