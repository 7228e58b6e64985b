//! The read-only track catalog the user picks from.
//!
//! The catalog is fixed for the lifetime of the process: either the builtin
//! demo list or a TOML file named in the settings.

mod builtin;
mod display;
mod load;

use std::collections::HashSet;
use std::path::PathBuf;

pub use display::{display_from_fields, format_mmss};

use crate::engine::Track;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog has no tracks")]
    Empty,

    #[error("track \"{0}\" has a zero duration")]
    ZeroDuration(String),

    #[error("track \"{0}\" appears more than once")]
    Duplicate(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, rejecting entries the engine cannot play.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for t in &tracks {
            let label = format!("{} - {} - {}", t.artist, t.album, t.title);
            if t.duration_secs == 0 {
                return Err(CatalogError::ZeroDuration(label));
            }
            if !seen.insert(t.key()) {
                return Err(CatalogError::Duplicate(label));
            }
        }

        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}
