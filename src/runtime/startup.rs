use std::time::Duration;

use crate::catalog::{Catalog, CatalogError};
use crate::config;
use crate::engine::{EngineOptions, TraversalOrder};

pub fn engine_options(playback: &config::PlaybackSettings) -> EngineOptions {
    EngineOptions {
        tick: Duration::from_millis(playback.tick_ms.max(1)),
        order: match playback.order {
            config::OrderSetting::Sequential => TraversalOrder::Sequential,
            config::OrderSetting::Random => TraversalOrder::Random,
        },
        seed: playback.seed,
    }
}

/// A configured catalog that cannot be loaded is an error; no path means
/// the builtin demo catalog.
pub fn load_catalog(settings: &config::CatalogSettings) -> Result<Catalog, CatalogError> {
    match &settings.path {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::builtin()),
    }
}
