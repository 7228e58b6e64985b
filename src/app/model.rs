//! Application model types: `App` and `Focus`.

use crate::catalog::Catalog;
use crate::engine::{NowPlaying, PlaybackInfo, Track};

/// Which list receives navigation keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Catalog,
    Playlist,
}

/// The main application model.
///
/// Playback state itself lives in the engine; the model only tracks what
/// the user is pointing at.
pub struct App {
    pub catalog: Catalog,
    pub focus: Focus,
    pub catalog_selected: usize,
    pub playlist_selected: usize,
    /// Last message shown in the status line.
    pub status: Option<String>,
    /// Revision of the last "now playing" the model caught up with.
    seen_revision: u64,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            focus: Focus::Catalog,
            catalog_selected: 0,
            playlist_selected: 0,
            status: None,
            seen_revision: 0,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Catalog => Focus::Playlist,
            Focus::Playlist => Focus::Catalog,
        };
    }

    /// The catalog track under the catalog selection.
    pub fn selected_track(&self) -> Option<&Track> {
        self.catalog.get(self.catalog_selected)
    }

    /// Move the focused selection down, wrapping to the first entry.
    pub fn next(&mut self, playlist_len: usize) {
        match self.focus {
            Focus::Catalog => {
                self.catalog_selected = wrap_next(self.catalog_selected, self.catalog.len())
            }
            Focus::Playlist => {
                self.playlist_selected = wrap_next(self.playlist_selected, playlist_len)
            }
        }
    }

    /// Move the focused selection up, wrapping to the last entry.
    pub fn prev(&mut self, playlist_len: usize) {
        match self.focus {
            Focus::Catalog => {
                self.catalog_selected = wrap_prev(self.catalog_selected, self.catalog.len())
            }
            Focus::Playlist => {
                self.playlist_selected = wrap_prev(self.playlist_selected, playlist_len)
            }
        }
    }

    /// Keep the playlist selection inside a playlist that may have shrunk
    /// since the last frame.
    pub fn clamp_playlist_selection(&mut self, playlist_len: usize) {
        if playlist_len == 0 {
            self.playlist_selected = 0;
        } else if self.playlist_selected >= playlist_len {
            self.playlist_selected = playlist_len - 1;
        }
    }

    /// Put the playlist selection on the playing entry whenever playback
    /// moves on, unless the user is browsing the playlist pane.
    pub fn follow_playing(&mut self, info: &PlaybackInfo) {
        if info.revision == self.seen_revision {
            return;
        }
        self.seen_revision = info.revision;
        if self.focus == Focus::Playlist {
            return;
        }
        if let NowPlaying::Track { position, .. } = info.now_playing {
            self.playlist_selected = position;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

fn wrap_prev(current: usize, len: usize) -> usize {
    match (current, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (c, len) => (c - 1).min(len - 1),
    }
}
