use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/segue/config.toml` or `~/.config/segue/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEGUE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Wall-clock length of one simulated second (milliseconds).
    pub tick_ms: u64,
    /// Traversal order the engine starts with.
    pub order: OrderSetting,
    /// Fixed seed for random traversal. Unset = seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            order: OrderSetting::Sequential,
            seed: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderSetting {
    #[serde(alias = "seq", alias = "in-order", alias = "in_order")]
    Sequential,
    #[serde(alias = "shuffle", alias = "rand")]
    Random,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// TOML file with `[[track]]` entries. Unset = the builtin catalog.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title of the catalog pane.
    pub header_text: String,

    /// Which track fields to show in the "Playing Now" pane, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub now_playing_fields: Vec<TrackDisplayField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,

    /// Fields used for rows in the catalog and playlist panes.
    pub list_fields: Vec<TrackDisplayField>,

    /// Separator used to join `list_fields`.
    pub list_separator: String,

    /// Whether to render the key help line.
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Available Songs ".to_string(),
            now_playing_fields: vec![
                TrackDisplayField::Title,
                TrackDisplayField::Artist,
                TrackDisplayField::Album,
            ],
            now_playing_separator: " - ".to_string(),
            list_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            list_separator: " - ".to_string(),
            show_help: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    /// Track length as `MM:SS`.
    Duration,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file to append to. Unset = logs are discarded, since the
    /// terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
