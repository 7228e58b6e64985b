use super::*;
use crate::catalog::Catalog;
use crate::engine::{NowPlaying, PlaybackInfo, Track};

fn small_catalog() -> Catalog {
    Catalog::new(vec![
        Track::new("A", "x", "Alpha", 10),
        Track::new("B", "x", "Beta", 10),
        Track::new("C", "x", "Gamma", 10),
    ])
    .unwrap()
}

#[test]
fn catalog_selection_wraps_both_ways() {
    let mut app = App::new(small_catalog());
    assert_eq!(app.focus, Focus::Catalog);
    assert_eq!(app.selected_track().unwrap().title, "Alpha");

    app.prev(0);
    assert_eq!(app.catalog_selected, 2);
    app.next(0);
    assert_eq!(app.catalog_selected, 0);
    app.next(0);
    assert_eq!(app.selected_track().unwrap().title, "Beta");
}

#[test]
fn navigation_moves_only_the_focused_list() {
    let mut app = App::new(small_catalog());
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Playlist);

    app.next(4);
    app.next(4);
    assert_eq!(app.playlist_selected, 2);
    assert_eq!(app.catalog_selected, 0);

    app.prev(4);
    assert_eq!(app.playlist_selected, 1);

    app.toggle_focus();
    assert_eq!(app.focus, Focus::Catalog);
}

#[test]
fn empty_playlist_navigation_stays_at_zero() {
    let mut app = App::new(small_catalog());
    app.toggle_focus();
    app.next(0);
    assert_eq!(app.playlist_selected, 0);
    app.prev(0);
    assert_eq!(app.playlist_selected, 0);
}

#[test]
fn prev_recovers_from_stale_selection() {
    let mut app = App::new(small_catalog());
    app.toggle_focus();
    app.playlist_selected = 9;
    app.prev(3);
    assert_eq!(app.playlist_selected, 2);
}

#[test]
fn clamp_follows_a_shrinking_playlist() {
    let mut app = App::new(small_catalog());
    app.playlist_selected = 5;
    app.clamp_playlist_selection(3);
    assert_eq!(app.playlist_selected, 2);
    app.clamp_playlist_selection(10);
    assert_eq!(app.playlist_selected, 2);
    app.clamp_playlist_selection(0);
    assert_eq!(app.playlist_selected, 0);
}

#[test]
fn status_line_can_be_set_and_cleared() {
    let mut app = App::new(small_catalog());
    assert!(app.status.is_none());
    app.set_status("track already queued");
    assert_eq!(app.status.as_deref(), Some("track already queued"));
    app.clear_status();
    assert!(app.status.is_none());
}

fn playing_at(position: usize, revision: u64) -> PlaybackInfo {
    PlaybackInfo {
        now_playing: NowPlaying::Track {
            track: Track::new("A", "x", "Alpha", 10),
            position,
            elapsed_secs: 0,
        },
        revision,
        ..PlaybackInfo::default()
    }
}

#[test]
fn playlist_selection_follows_new_revisions() {
    let mut app = App::new(small_catalog());
    app.follow_playing(&playing_at(2, 1));
    assert_eq!(app.playlist_selected, 2);

    // Same revision: a manual selection is left alone.
    app.playlist_selected = 0;
    app.follow_playing(&playing_at(2, 1));
    assert_eq!(app.playlist_selected, 0);

    app.follow_playing(&playing_at(1, 2));
    assert_eq!(app.playlist_selected, 1);
}

#[test]
fn browsing_the_playlist_stops_following() {
    let mut app = App::new(small_catalog());
    app.toggle_focus();
    app.playlist_selected = 3;
    app.follow_playing(&playing_at(0, 5));
    assert_eq!(app.playlist_selected, 3);

    // Returning to the catalog picks up the next change.
    app.toggle_focus();
    app.follow_playing(&playing_at(1, 6));
    assert_eq!(app.playlist_selected, 1);
}
