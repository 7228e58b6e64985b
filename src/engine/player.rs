use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::error::{EngineError, Result};
use super::scheduler::spawn_scheduler;
use super::state::{PauseToggle, PlayerState, Removal, Shared};
use super::types::{PlaybackInfo, QueueView, TraversalOrder, Track};

/// Startup parameters for the engine.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Length of one simulated second.
    pub tick: Duration,
    pub order: TraversalOrder,
    /// Fixed RNG seed for reproducible random traversal.
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            order: TraversalOrder::Sequential,
            seed: None,
        }
    }
}

/// Handle owned by the control surface. Every operation takes the engine
/// lock for a short critical section and never waits on playback timing.
pub struct Engine {
    shared: Arc<Shared>,
    join: Mutex<Option<JoinHandle<Result<()>>>>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Result<Self> {
        let shared = Arc::new(Shared::new(PlayerState::new(options.order)));
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let handle = spawn_scheduler(shared.clone(), options.tick, rng)?;

        Ok(Self {
            shared,
            join: Mutex::new(Some(handle)),
        })
    }

    pub fn request_add(&self, track: Track) -> Result<()> {
        let mut state = self.shared.lock()?;
        let label = format!("{} - {}", track.artist, track.title);
        if state.add(track)? {
            self.shared.non_empty.notify_one();
        }
        debug!(track = %label, queued = state.playlist.len(), "track added");
        Ok(())
    }

    pub fn request_remove(&self, position: usize) -> Result<Removal> {
        let mut state = self.shared.lock()?;
        let removal = state.remove(position)?;
        match &removal {
            Removal::Removed(t) => debug!(position, title = %t.title, "track removed"),
            Removal::Deferred => debug!(position, "removal of playing track deferred"),
        }
        Ok(removal)
    }

    /// Toggle pause. Returns `true` when pause is now in effect.
    pub fn request_pause_toggle(&self) -> Result<bool> {
        let mut state = self.shared.lock()?;
        let toggled = state.toggle_pause();
        if toggled == PauseToggle::Resumed {
            self.shared.resumed.notify_one();
        }
        debug!(?toggled, "pause toggled");
        Ok(toggled == PauseToggle::Paused)
    }

    /// Ask the scheduler to advance. Returns `false` when the playlist is
    /// empty and the request was ignored.
    pub fn request_skip(&self) -> Result<bool> {
        let mut state = self.shared.lock()?;
        let accepted = state.request_skip();
        if !accepted {
            debug!("skip ignored on empty playlist");
        }
        Ok(accepted)
    }

    pub fn request_order_toggle(&self) -> Result<TraversalOrder> {
        let mut state = self.shared.lock()?;
        let order = state.toggle_order();
        debug!(?order, "traversal order changed");
        Ok(order)
    }

    /// Set the quit flag and wake the scheduler from whichever wait it is in.
    pub fn request_quit(&self) -> Result<()> {
        let mut state = self.shared.lock()?;
        state.flags.quit = true;
        self.shared.non_empty.notify_all();
        self.shared.resumed.notify_all();
        info!("quit requested");
        Ok(())
    }

    pub fn snapshot(&self) -> Result<PlaybackInfo> {
        Ok(self.shared.lock()?.info())
    }

    pub fn queue(&self) -> Result<QueueView> {
        Ok(self.shared.lock()?.queue_view())
    }

    pub fn contains(&self, track: &Track) -> Result<bool> {
        Ok(self.shared.lock()?.playlist.contains(track))
    }

    /// `Err` once the scheduler has stopped, carrying its failure if it had one.
    pub fn health(&self) -> Result<()> {
        let state = self.shared.lock()?;
        match &state.failure {
            Some(e) => Err(e.clone()),
            None if !state.running => Err(EngineError::SchedulerGone),
            None => Ok(()),
        }
    }

    /// Request quit and wait for the scheduler to reach its terminal state.
    pub fn shutdown(&self) -> Result<()> {
        self.request_quit()?;

        let handle = match self.join.lock() {
            Ok(mut j) => j.take(),
            Err(_) => return Err(super::state::poisoned()),
        };
        match handle {
            Some(h) => h.join().map_err(|_| {
                EngineError::InternalConsistency("scheduler thread panicked".to_string())
            })?,
            None => Ok(()),
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
