//! Engine value types and snapshots.
//!
//! `Track` is the unit the playlist stores; its identity is the
//! (artist, album, title) triple and never includes the duration.
//! The snapshot types are plain copies handed to the control surface.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Identity key of a track: (artist, album, title).
pub type TrackKey = (String, String, String);

#[derive(Debug, Clone)]
pub struct Track {
    pub artist: String,
    pub album: String,
    pub title: String,
    /// Length in simulated seconds.
    pub duration_secs: u32,
}

impl Track {
    pub fn new(
        artist: impl Into<String>,
        album: impl Into<String>,
        title: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
            title: title.into(),
            duration_secs,
        }
    }

    pub fn key(&self) -> TrackKey {
        (self.artist.clone(), self.album.clone(), self.title.clone())
    }

    fn key_ref(&self) -> (&str, &str, &str) {
        (&self.artist, &self.album, &self.title)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.key_ref() == other.key_ref()
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_ref().hash(state);
    }
}

impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_ref().cmp(&other.key_ref())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Move to the next entry, wrapping to the first after the last.
    #[default]
    Sequential,
    /// Jump to a uniformly chosen entry other than the current one.
    Random,
}

impl TraversalOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Sequential => Self::Random,
            Self::Random => Self::Sequential,
        }
    }
}

/// What the scheduler currently considers "playing".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NowPlaying {
    /// The playlist is empty.
    #[default]
    Nothing,
    Track {
        track: Track,
        /// Position of the track inside the playlist.
        position: usize,
        /// Seconds elapsed in the current track.
        elapsed_secs: u32,
    },
}

impl NowPlaying {
    pub fn track(&self) -> Option<&Track> {
        match self {
            Self::Nothing => None,
            Self::Track { track, .. } => Some(track),
        }
    }

    pub fn elapsed_secs(&self) -> Option<u32> {
        match self {
            Self::Nothing => None,
            Self::Track { elapsed_secs, .. } => Some(*elapsed_secs),
        }
    }
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    pub now_playing: NowPlaying,
    /// Whether pause is in effect (requested and not yet resumed).
    pub paused: bool,
    pub order: TraversalOrder,
    /// Bumped every time the scheduler republishes "now playing".
    pub revision: u64,
}

/// Read-only copy of the playlist for rendering.
#[derive(Debug, Clone, Default)]
pub struct QueueView {
    pub tracks: Vec<Track>,
    pub cursor: Option<usize>,
    /// The cursor's track is waiting to be evicted by the scheduler.
    pub removal_pending: bool,
}

impl QueueView {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
