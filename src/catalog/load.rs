use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::engine::Track;

use super::{Catalog, CatalogError};

/// On-disk layout:
///
/// ```toml
/// [[track]]
/// artist = "Queen"
/// album = "Hot Space"
/// title = "Under Pressure"
/// duration = 248
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "track")]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    artist: String,
    album: String,
    title: String,
    /// Seconds.
    duration: u32,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let tracks = file
            .tracks
            .into_iter()
            .map(|e| Track::new(e.artist, e.album, e.title, e.duration))
            .collect();
        let catalog = Catalog::new(tracks)?;

        info!(path = %path.display(), tracks = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}
