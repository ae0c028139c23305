//! Playback state owned by one player.

use serde::{Deserialize, Serialize};

use crate::speed::Speed;

/// Whether the position is advancing on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Position fixed; only explicit transport calls move it.
    Idle,
    /// Position advances one step per delay.
    Playing,
}

/// Mutable state of one player. `position` is always within the loaded trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub position: usize,
    pub status: PlaybackStatus,
    pub speed: Speed,
}

impl PlaybackState {
    pub fn new(speed: Speed) -> Self {
        PlaybackState {
            position: 0,
            status: PlaybackStatus::Idle,
            speed,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}

/// What a renderer needs to know after a transition.
///
/// `generation` increments whenever a new trace is loaded, so a consumer can
/// tell which trace `position` indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub position: usize,
    pub len: usize,
    pub is_playing: bool,
    pub speed: f64,
    pub generation: u64,
}

impl PlaybackSnapshot {
    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.len
    }
}
