use std::env;
use std::path::PathBuf;

use ::config::{Config, ConfigError, Environment, File};
use tracing_subscriber::EnvFilter;

use super::schema::Settings;

const PATH_VAR: &str = "SEGUE_CONFIG_PATH";
const ENV_PREFIX: &str = "SEGUE";
const APP_DIR: &str = "segue";
const FILE_NAME: &str = "config.toml";

impl Settings {
    /// Struct defaults, then the config file when one exists, then
    /// `SEGUE__SECTION__KEY` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_path() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.tick_ms == 0 {
            return Err("playback.tick_ms must be >= 1".to_string());
        }
        EnvFilter::try_new(&self.logging.level)
            .map(|_| ())
            .map_err(|e| format!("logging.level is not a valid filter: {e}"))
    }
}

/// An explicit `SEGUE_CONFIG_PATH` wins over the per-user location.
pub(super) fn config_path() -> Option<PathBuf> {
    env::var_os(PATH_VAR)
        .map(PathBuf::from)
        .or_else(user_config_path)
}

/// `segue/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
pub(super) fn user_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}
