//! Shared engine state and the synchronization primitives around it.
//!
//! Everything the two threads share lives in one `PlayerState` behind one
//! mutex. The two condition variables are created once and live as long as
//! the engine; every wait on them re-tests its predicate after waking.

use std::sync::{Condvar, Mutex, MutexGuard};

use rand::Rng;
use tracing::debug;

use super::error::{EngineError, Result};
use super::playlist::Playlist;
use super::types::{NowPlaying, PlaybackInfo, QueueView, TraversalOrder, Track};

/// Intents set by the control surface and consumed by the scheduler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    pub quit: bool,
    pub pause: bool,
    /// Resume token: set while paused, consumed together with `pause`.
    pub resume: bool,
    pub skip: bool,
    pub remove_current: bool,
}

/// Which branch the scheduler takes next, in priority order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Quit,
    Paused,
    Empty,
    RemovePending,
    SkipPending,
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The track was not playing and is gone already.
    Removed(Track),
    /// The track is playing; the scheduler will advance past it and evict it.
    Deferred,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PauseToggle {
    Paused,
    Resumed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Elapsed time moved forward within the same track.
    Elapsed(u32),
    /// The track ran out and the cursor moved on.
    Advanced,
}

#[derive(Debug, Default)]
pub struct PlayerState {
    pub playlist: Playlist,
    pub flags: ControlFlags,
    pub order: TraversalOrder,
    pub elapsed_secs: u32,
    pub revision: u64,
    /// Set when the scheduler stopped on an internal consistency error.
    pub failure: Option<EngineError>,
    pub running: bool,
}

impl PlayerState {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            running: true,
            ..Self::default()
        }
    }

    pub fn is_paused(&self) -> bool {
        self.flags.pause && !self.flags.resume
    }

    pub fn next_step(&self) -> Step {
        if self.flags.quit {
            Step::Quit
        } else if self.flags.pause {
            Step::Paused
        } else if self.playlist.is_empty() {
            Step::Empty
        } else if self.flags.remove_current {
            Step::RemovePending
        } else if self.flags.skip {
            Step::SkipPending
        } else {
            Step::Tick
        }
    }

    pub fn now_playing(&self) -> NowPlaying {
        match (self.playlist.cursor(), self.playlist.current()) {
            (Some(position), Some(track)) => NowPlaying::Track {
                track: track.clone(),
                position,
                elapsed_secs: self.elapsed_secs,
            },
            _ => NowPlaying::Nothing,
        }
    }

    pub fn info(&self) -> PlaybackInfo {
        PlaybackInfo {
            now_playing: self.now_playing(),
            paused: self.is_paused(),
            order: self.order,
            revision: self.revision,
        }
    }

    pub fn queue_view(&self) -> QueueView {
        QueueView {
            tracks: self.playlist.tracks().to_vec(),
            cursor: self.playlist.cursor(),
            removal_pending: self.flags.remove_current,
        }
    }

    fn publish(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        match self.playlist.current() {
            Some(t) => debug!(
                artist = %t.artist,
                title = %t.title,
                revision = self.revision,
                "now playing"
            ),
            None => debug!(revision = self.revision, "nothing playing"),
        }
    }

    // Control-surface side.

    /// Queue `track`. Returns `true` when the playlist just became non-empty
    /// and a scheduler blocked on the empty wait must be woken.
    pub fn add(&mut self, track: Track) -> Result<bool> {
        let became_non_empty = self.playlist.push(track)?;
        if became_non_empty {
            self.elapsed_secs = 0;
        }
        Ok(became_non_empty)
    }

    pub fn remove(&mut self, position: usize) -> Result<Removal> {
        self.playlist.validate_position(position)?;
        if self.playlist.cursor() == Some(position) {
            self.flags.remove_current = true;
            return Ok(Removal::Deferred);
        }
        self.playlist.remove_at(position).map(Removal::Removed)
    }

    pub fn toggle_pause(&mut self) -> PauseToggle {
        if !self.flags.pause {
            self.flags.pause = true;
            self.flags.resume = false;
            PauseToggle::Paused
        } else if !self.flags.resume {
            self.flags.resume = true;
            PauseToggle::Resumed
        } else {
            // Paused again before the scheduler saw the resume.
            self.flags.resume = false;
            PauseToggle::Paused
        }
    }

    /// Returns `false` when there is nothing to skip.
    pub fn request_skip(&mut self) -> bool {
        if self.playlist.is_empty() {
            return false;
        }
        self.flags.skip = true;
        true
    }

    pub fn toggle_order(&mut self) -> TraversalOrder {
        self.order = self.order.toggled();
        self.order
    }

    // Scheduler side.

    /// Consume the resume token after waking from the paused wait.
    pub fn consume_resume(&mut self) -> bool {
        if !self.flags.resume {
            return false;
        }
        self.flags.pause = false;
        self.flags.resume = false;
        true
    }

    /// The playlist became non-empty while the scheduler was blocked.
    pub fn resume_from_empty(&mut self) {
        self.playlist.anchor_front();
        self.elapsed_secs = 0;
        self.publish();
    }

    pub fn apply_pending_removal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.flags.remove_current = false;
        let removed = self.playlist.evict_current(self.order, rng)?;
        self.playlist.check_invariants()?;
        debug!(artist = %removed.artist, title = %removed.title, "evicted playing track");
        if self.playlist.is_empty() {
            // A skip queued for the evicted track has nothing left to act on.
            self.flags.skip = false;
        }
        self.elapsed_secs = 0;
        self.publish();
        Ok(())
    }

    pub fn apply_skip<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.flags.skip = false;
        self.playlist.advance(self.order, rng);
        self.elapsed_secs = 0;
        self.publish();
    }

    /// Account for one elapsed tick of the current track.
    pub fn complete_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TickOutcome> {
        let Some(duration) = self.playlist.current().map(|t| t.duration_secs) else {
            return Err(EngineError::InternalConsistency(
                "tick completed with nothing playing".to_string(),
            ));
        };

        self.elapsed_secs += 1;
        if self.elapsed_secs >= duration && self.flags.remove_current {
            // The pending eviction advances past this track; moving the
            // cursor here would make it evict the wrong one.
            self.elapsed_secs = duration;
            Ok(TickOutcome::Elapsed(duration))
        } else if self.elapsed_secs >= duration {
            self.playlist.advance(self.order, rng);
            self.elapsed_secs = 0;
            self.publish();
            Ok(TickOutcome::Advanced)
        } else {
            Ok(TickOutcome::Elapsed(self.elapsed_secs))
        }
    }
}

/// The lock and the two wake conditions shared by both threads.
#[derive(Debug)]
pub struct Shared {
    state: Mutex<PlayerState>,
    /// Signalled when the playlist leaves the empty state, and on quit.
    pub non_empty: Condvar,
    /// Signalled when a resume is requested, and on quit.
    pub resumed: Condvar,
}

impl Shared {
    pub fn new(state: PlayerState) -> Self {
        Self {
            state: Mutex::new(state),
            non_empty: Condvar::new(),
            resumed: Condvar::new(),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, PlayerState>> {
        self.state.lock().map_err(|_| poisoned())
    }
}

pub fn poisoned() -> EngineError {
    EngineError::InternalConsistency("engine lock poisoned".to_string())
}
