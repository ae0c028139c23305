//! Playback error types.
//!
//! Position mutations never fail (they clamp), so the taxonomy is small:
//! refusing an empty trace, and talking to a playback task that has stopped.

use thiserror::Error;

/// Errors produced by the playback engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// A player needs at least one step so `position` is always valid.
    #[error("cannot play an empty trace")]
    EmptyTrace,

    /// The playback task behind a handle is no longer running.
    #[error("playback task has stopped")]
    Closed,
}
