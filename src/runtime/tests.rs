use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{Action, action_for, apply, queued_flags};
use super::startup::{engine_options, load_catalog};
use crate::app::{App, Focus};
use crate::catalog::Catalog;
use crate::config::{CatalogSettings, OrderSetting, PlaybackSettings};
use crate::engine::{Engine, EngineOptions, Track, TraversalOrder};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn test_engine() -> Engine {
    Engine::new(EngineOptions {
        tick: Duration::from_millis(5),
        order: TraversalOrder::Sequential,
        seed: Some(7),
    })
    .unwrap()
}

fn test_app() -> App {
    App::new(
        Catalog::new(vec![
            Track::new("A", "x", "Alpha", 1_000),
            Track::new("B", "x", "Beta", 1_000),
        ])
        .unwrap(),
    )
}

fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for(key(KeyCode::Tab)), Some(Action::SwitchPane));
    assert_eq!(action_for(key(KeyCode::Down)), Some(Action::Next));
    assert_eq!(action_for(key(KeyCode::Char('k'))), Some(Action::Prev));
    assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Add));
    assert_eq!(action_for(key(KeyCode::Insert)), Some(Action::Add));
    assert_eq!(action_for(key(KeyCode::Delete)), Some(Action::Remove));
    assert_eq!(action_for(key(KeyCode::Char(' '))), Some(Action::PauseToggle));
    assert_eq!(action_for(key(KeyCode::Char('s'))), Some(Action::Skip));
    assert_eq!(action_for(key(KeyCode::Char('r'))), Some(Action::OrderToggle));
    assert_eq!(action_for(key(KeyCode::Backspace)), Some(Action::Quit));
    assert_eq!(action_for(key(KeyCode::Char('x'))), None);
    assert_eq!(
        action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
}

#[test]
fn engine_options_follow_playback_settings() {
    let opts = engine_options(&PlaybackSettings {
        tick_ms: 20,
        order: OrderSetting::Random,
        seed: Some(5),
    });
    assert_eq!(opts.tick, Duration::from_millis(20));
    assert_eq!(opts.order, TraversalOrder::Random);
    assert_eq!(opts.seed, Some(5));
}

#[test]
fn load_catalog_defaults_to_builtin() {
    let c = load_catalog(&CatalogSettings::default()).unwrap();
    assert_eq!(c.len(), Catalog::builtin().len());

    let missing = CatalogSettings {
        path: Some("/nonexistent/segue/catalog.toml".into()),
    };
    assert!(load_catalog(&missing).is_err());
}

#[test]
fn duplicate_add_is_reported_in_status_line() {
    let engine = test_engine();
    let mut app = test_app();

    assert!(!apply(Action::Add, &mut app, &engine, 0).unwrap());
    assert_eq!(app.status.as_deref(), Some("Added: Alpha"));
    assert!(!apply(Action::Add, &mut app, &engine, 1).unwrap());
    assert!(app.status.as_deref().unwrap().contains("already queued"));
    assert_eq!(engine.queue().unwrap().len(), 1);
}

#[test]
fn remove_requires_playlist_focus_and_defers_playing_track() {
    let engine = test_engine();
    let mut app = test_app();

    apply(Action::Remove, &mut app, &engine, 0).unwrap();
    assert!(app.status.as_deref().unwrap().contains("playlist pane"));

    app.toggle_focus();
    assert_eq!(app.focus, Focus::Playlist);
    apply(Action::Remove, &mut app, &engine, 0).unwrap();
    assert_eq!(app.status.as_deref(), Some("playlist is empty"));

    apply(Action::Add, &mut app, &engine, 0).unwrap();
    assert!(wait_until(|| engine.snapshot().unwrap().now_playing.track().is_some()));

    apply(Action::Remove, &mut app, &engine, 1).unwrap();
    assert!(app.status.as_deref().unwrap().contains("once playback moves on"));
    assert!(wait_until(|| engine.queue().unwrap().is_empty()));
}

#[test]
fn playback_controls_update_status() {
    let engine = test_engine();
    let mut app = test_app();

    apply(Action::Skip, &mut app, &engine, 0).unwrap();
    assert_eq!(app.status.as_deref(), Some("Nothing to skip"));

    apply(Action::PauseToggle, &mut app, &engine, 0).unwrap();
    assert_eq!(app.status.as_deref(), Some("Paused"));
    assert!(engine.snapshot().unwrap().paused);
    apply(Action::PauseToggle, &mut app, &engine, 0).unwrap();
    assert_eq!(app.status.as_deref(), Some("Resumed"));

    apply(Action::OrderToggle, &mut app, &engine, 0).unwrap();
    assert_eq!(app.status.as_deref(), Some("Order: Random"));
    assert_eq!(engine.snapshot().unwrap().order, TraversalOrder::Random);
}

#[test]
fn quit_stops_the_scheduler() {
    let engine = test_engine();
    let mut app = test_app();

    assert!(apply(Action::Quit, &mut app, &engine, 0).unwrap());
    assert!(wait_until(|| engine.health().is_err()));
    assert!(engine.health().is_err());
    assert!(engine.shutdown().is_ok());
}

#[test]
fn queued_catalog_rows_follow_playlist_membership() {
    let engine = test_engine();
    let mut app = test_app();
    assert_eq!(queued_flags(&engine, &app.catalog).unwrap(), vec![false, false]);

    apply(Action::Add, &mut app, &engine, 0).unwrap();
    app.next(1);
    apply(Action::Add, &mut app, &engine, 1).unwrap();
    assert_eq!(queued_flags(&engine, &app.catalog).unwrap(), vec![true, true]);

    // Beta is not under the cursor, so it leaves the playlist at once.
    app.toggle_focus();
    app.playlist_selected = 1;
    apply(Action::Remove, &mut app, &engine, 2).unwrap();
    assert_eq!(app.status.as_deref(), Some("Removed: Beta"));
    assert_eq!(queued_flags(&engine, &app.catalog).unwrap(), vec![true, false]);
}

#[test]
fn adding_a_queued_track_is_refused_before_reaching_the_playlist() {
    let engine = test_engine();
    let mut app = test_app();

    apply(Action::Add, &mut app, &engine, 0).unwrap();
    apply(Action::Add, &mut app, &engine, 1).unwrap();
    assert_eq!(app.status.as_deref(), Some("Alpha is already queued"));
    assert_eq!(engine.queue().unwrap().len(), 1);
}
