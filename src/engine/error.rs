//! Error types for the playback engine.

/// Errors reported by engine operations.
///
/// The first three are caller preconditions: they are returned
/// synchronously and leave the engine untouched. `InternalConsistency`
/// signals a synchronization defect and is fatal for the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("track already queued: {0}")]
    AlreadyQueued(String),

    #[error("playlist is empty")]
    EmptyPlaylist,

    #[error("position {position} out of range (playlist has {len} tracks)")]
    OutOfRange { position: usize, len: usize },

    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("scheduler thread is no longer running")]
    SchedulerGone,

    #[error("failed to start scheduler thread: {0}")]
    Spawn(String),
}

impl EngineError {
    /// True for errors caused by the caller rather than by the engine.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::AlreadyQueued(_) | Self::EmptyPlaylist | Self::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
