use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{debug, error, info};

use super::error::{EngineError, Result};
use super::state::{Shared, Step, TickOutcome, poisoned};

pub(super) fn spawn_scheduler(
    shared: Arc<Shared>,
    tick: Duration,
    mut rng: StdRng,
) -> Result<JoinHandle<Result<()>>> {
    thread::Builder::new()
        .name("segue-scheduler".to_string())
        .spawn(move || {
            info!(tick_ms = tick.as_millis() as u64, "scheduler started");
            let result = run(&shared, tick, &mut rng);

            // Record the outcome so the control surface can see it without joining.
            if let Ok(mut state) = shared.lock() {
                state.running = false;
                if let Err(ref e) = result {
                    state.failure = Some(e.clone());
                }
            }
            match &result {
                Ok(()) => info!("scheduler stopped"),
                Err(e) => error!(error = %e, "scheduler stopped on internal error"),
            }
            result
        })
        .map_err(|e| EngineError::Spawn(e.to_string()))
}

fn run(shared: &Shared, tick: Duration, rng: &mut StdRng) -> Result<()> {
    loop {
        let mut state = shared.lock()?;

        match state.next_step() {
            Step::Quit => {
                state.flags.quit = false;
                return Ok(());
            }

            Step::Paused => {
                debug!("paused");
                while !state.flags.resume && !state.flags.quit {
                    state = shared.resumed.wait(state).map_err(|_| poisoned())?;
                }
                // On quit the flag is left for the Quit branch to observe.
                if state.consume_resume() {
                    debug!("resumed");
                }
            }

            Step::Empty => {
                debug!("playlist empty, waiting");
                while state.playlist.is_empty() && !state.flags.quit {
                    state = shared.non_empty.wait(state).map_err(|_| poisoned())?;
                }
                if !state.flags.quit {
                    state.resume_from_empty();
                }
            }

            Step::RemovePending => state.apply_pending_removal(rng)?,

            Step::SkipPending => state.apply_skip(rng),

            Step::Tick => {
                // Sleep outside the lock so control operations never queue
                // behind playback timing.
                drop(state);
                thread::sleep(tick);

                let mut state = shared.lock()?;
                if let TickOutcome::Advanced = state.complete_tick(rng)? {
                    debug!("track finished");
                }
            }
        }
    }
}
