//! Playlist playback engine.
//!
//! A background scheduler thread advances "now playing" once per simulated
//! second while the control surface mutates the playlist through
//! [`Engine`]. All shared state sits behind a single mutex; the scheduler
//! blocks on dedicated condition variables while the playlist is empty or
//! playback is paused.

mod error;
mod player;
mod playlist;
mod scheduler;
mod state;
mod types;

pub use error::{EngineError, Result};
pub use player::{Engine, EngineOptions};
pub use state::Removal;
pub use types::*;
