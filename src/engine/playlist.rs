//! The playlist store: queued tracks, the "now playing" cursor and the
//! membership set used to reject duplicates.
//!
//! Nothing here locks; callers hold the engine mutex around every call.
//! The cursor is an index that is re-validated against the vector after
//! every structural change, so it can never point past the end.

use std::collections::HashSet;

use rand::Rng;

use super::error::{EngineError, Result};
use super::types::{TraversalOrder, Track, TrackKey};

#[derive(Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    cursor: Option<usize>,
    members: HashSet<TrackKey>,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The track under the cursor, if the playlist is non-empty.
    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|i| self.tracks.get(i))
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.members.contains(&track.key())
    }

    /// Append `track`. Returns `true` when the playlist went from empty to
    /// non-empty, in which case the cursor is anchored to the new track.
    pub fn push(&mut self, track: Track) -> Result<bool> {
        let key = track.key();
        if self.members.contains(&key) {
            return Err(EngineError::AlreadyQueued(format!(
                "{} - {}",
                track.artist, track.title
            )));
        }

        self.members.insert(key);
        self.tracks.push(track);

        if self.tracks.len() == 1 {
            self.cursor = Some(0);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check a caller-supplied position against the current contents.
    pub fn validate_position(&self, position: usize) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(EngineError::EmptyPlaylist);
        }
        if position >= self.tracks.len() {
            return Err(EngineError::OutOfRange {
                position,
                len: self.tracks.len(),
            });
        }
        Ok(())
    }

    /// Remove a track that is not under the cursor.
    ///
    /// The cursor's own track is only ever removed by the scheduler through
    /// [`Playlist::evict_current`].
    pub fn remove_at(&mut self, position: usize) -> Result<Track> {
        self.validate_position(position)?;
        if self.cursor == Some(position) {
            return Err(EngineError::InternalConsistency(format!(
                "inline removal of the playing track at position {position}"
            )));
        }

        let removed = self.tracks.remove(position);
        self.members.remove(&removed.key());

        // Keep the cursor on the same track after the shift.
        if let Some(c) = self.cursor {
            if c > position {
                self.cursor = Some(c - 1);
            }
        }

        Ok(removed)
    }

    /// Move the cursor one step according to `order`.
    ///
    /// Random order draws `k` uniformly from `[1, len - 1]` and steps `k`
    /// times, so the same track is never chosen twice in a row while an
    /// alternative exists. With one track left this is a no-op.
    pub fn advance<R: Rng + ?Sized>(&mut self, order: TraversalOrder, rng: &mut R) {
        let Some(cur) = self.cursor else {
            return;
        };
        let len = self.tracks.len();
        if len <= 1 {
            return;
        }

        let steps = match order {
            TraversalOrder::Sequential => 1,
            TraversalOrder::Random => rng.random_range(1..len),
        };
        self.cursor = Some((cur + steps) % len);
    }

    /// Advance past the cursor's track and then erase it, as one step.
    ///
    /// When it is the last track the playlist is cleared and the cursor
    /// unset; no advance is attempted.
    pub fn evict_current<R: Rng + ?Sized>(
        &mut self,
        order: TraversalOrder,
        rng: &mut R,
    ) -> Result<Track> {
        let Some(cur) = self.cursor.filter(|&c| c < self.tracks.len()) else {
            return Err(EngineError::InternalConsistency(
                "removal of the playing track requested on an empty playlist".to_string(),
            ));
        };

        if self.tracks.len() == 1 {
            let removed = self.tracks.remove(cur);
            self.clear();
            return Ok(removed);
        }

        self.advance(order, rng);
        let next = self.cursor.unwrap_or(0);

        let removed = self.tracks.remove(cur);
        self.members.remove(&removed.key());
        self.cursor = Some(if next > cur { next - 1 } else { next });

        Ok(removed)
    }

    /// Re-anchor the cursor to the first track (or unset it when empty).
    pub fn anchor_front(&mut self) {
        self.cursor = if self.tracks.is_empty() { None } else { Some(0) };
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.members.clear();
        self.cursor = None;
    }

    /// Verify the store's structural invariants.
    pub fn check_invariants(&self) -> Result<()> {
        let keys: HashSet<TrackKey> = self.tracks.iter().map(Track::key).collect();
        if keys.len() != self.tracks.len() {
            return Err(EngineError::InternalConsistency(
                "duplicate identity inside the playlist".to_string(),
            ));
        }
        if keys != self.members {
            return Err(EngineError::InternalConsistency(
                "membership set out of sync with the playlist".to_string(),
            ));
        }
        match (self.tracks.is_empty(), self.cursor) {
            (true, None) => Ok(()),
            (false, Some(c)) if c < self.tracks.len() => Ok(()),
            (empty, cursor) => Err(EngineError::InternalConsistency(format!(
                "cursor {cursor:?} invalid for playlist (empty: {empty})"
            ))),
        }
    }
}
