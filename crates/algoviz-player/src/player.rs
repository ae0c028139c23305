//! The playback state machine.
//!
//! A [`Player`] holds one trace and a [`PlaybackState`]. It is `Idle` or
//! `Playing`; while playing it keeps exactly one [`PendingAdvance`], a due time
//! on its [`Clock`]. Calling [`Player::tick`] consumes the pending advance once
//! it is due, moves forward one step, and either schedules the next advance or,
//! at the last step, drops back to `Idle`.
//!
//! Every schedule replaces the previous pending advance, and every transition
//! that should stop playback clears it, so there is never more than one
//! outstanding advance and a stale one can never fire against a new trace.

use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::error::PlayerError;
use crate::speed::{PlayerConfig, Speed};
use crate::state::{PlaybackSnapshot, PlaybackState, PlaybackStatus};

/// The single scheduled advance of a playing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    /// Clock time at which the advance becomes due.
    pub due: Duration,
}

/// Algorithm-agnostic playback over a trace of `S`.
#[derive(Debug)]
pub struct Player<S, C = SystemClock> {
    trace: Vec<S>,
    state: PlaybackState,
    pending: Option<PendingAdvance>,
    config: PlayerConfig,
    clock: C,
    generation: u64,
}

impl<S> Player<S, SystemClock> {
    /// Creates a wall-clock player with the default timing.
    pub fn new(trace: impl Into<Vec<S>>, speed: f64) -> Result<Self, PlayerError> {
        Player::with_clock(trace, speed, PlayerConfig::default(), SystemClock::new())
    }
}

impl<S, C: Clock> Player<S, C> {
    /// Creates an idle player at position 0.
    ///
    /// Fails with [`PlayerError::EmptyTrace`] if the trace has no steps.
    pub fn with_clock(
        trace: impl Into<Vec<S>>,
        speed: f64,
        config: PlayerConfig,
        clock: C,
    ) -> Result<Self, PlayerError> {
        let trace = trace.into();
        if trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        Ok(Player {
            trace,
            state: PlaybackState::new(Speed::new(speed)),
            pending: None,
            config,
            clock,
            generation: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Always false: a player cannot hold an empty trace.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn speed(&self) -> Speed {
        self.state.speed
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn trace(&self) -> &[S] {
        &self.trace
    }

    /// The step a renderer should draw now.
    pub fn current(&self) -> &S {
        &self.trace[self.state.position]
    }

    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    /// Clock time of the pending advance, if playing.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Delay between advances at the current speed.
    pub fn delay(&self) -> Duration {
        self.state.speed.delay(&self.config)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            position: self.state.position,
            len: self.trace.len(),
            is_playing: self.is_playing(),
            speed: self.state.speed.value(),
            generation: self.generation,
        }
    }

    fn last_index(&self) -> usize {
        self.trace.len() - 1
    }

    fn at_end(&self) -> bool {
        self.state.position >= self.last_index()
    }

    // -----------------------------------------------------------------------
    // Transport
    // -----------------------------------------------------------------------

    /// `Idle -> Playing`. No-op if already playing, or if already on the last
    /// step (playback never loops).
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        if self.at_end() {
            tracing::debug!(position = self.state.position, "play ignored at end of trace");
            return;
        }
        self.state.status = PlaybackStatus::Playing;
        self.schedule();
        tracing::debug!(position = self.state.position, "playback started");
    }

    /// `Playing -> Idle`, keeping the position.
    pub fn pause(&mut self) {
        if self.is_playing() {
            tracing::debug!(position = self.state.position, "playback paused");
        }
        self.stop();
    }

    /// Flips between playing and paused.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// One step forward, clamped. Leaves the play state and the pending advance
    /// alone, except that reaching the last step while playing ends playback.
    pub fn step_forward(&mut self) {
        let target = self.state.position + 1;
        self.move_to(target);
    }

    /// One step back, clamped at 0. Leaves the play state alone.
    pub fn step_backward(&mut self) {
        let target = self.state.position.saturating_sub(1);
        self.move_to(target);
    }

    /// Jumps to `position`, clamped into the trace.
    pub fn seek(&mut self, position: usize) {
        self.move_to(position);
    }

    /// Forces `Idle` at position 0.
    pub fn reset(&mut self) {
        self.stop();
        self.state.position = 0;
    }

    /// `reset` then `play`.
    pub fn replay(&mut self) {
        self.reset();
        self.play();
    }

    /// Changes the speed. An advance already scheduled keeps its due time; the
    /// new delay applies from the next schedule.
    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = Speed::new(speed);
        tracing::debug!(speed = self.state.speed.value(), "speed changed");
    }

    /// Replaces the trace. The pending advance is cancelled before any state
    /// changes; the player ends `Idle` at position 0 with speed kept.
    ///
    /// An empty trace is refused and leaves the player untouched.
    pub fn load(&mut self, trace: impl Into<Vec<S>>) -> Result<(), PlayerError> {
        let trace = trace.into();
        if trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        self.pending = None;
        self.trace = trace;
        self.generation += 1;
        self.reset();
        tracing::debug!(len = self.trace.len(), generation = self.generation, "trace loaded");
        Ok(())
    }

    /// Fires the pending advance if it is due.
    ///
    /// Moves exactly one step per call, never more, so a renderer sampling
    /// after each tick sees every step. Returns whether the position moved.
    pub fn tick(&mut self) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if self.clock.now() < pending.due {
            return false;
        }

        self.pending = None;
        self.state.position = (self.state.position + 1).min(self.last_index());
        if self.at_end() {
            self.state.status = PlaybackStatus::Idle;
            tracing::debug!(position = self.state.position, "playback reached end of trace");
        } else {
            self.schedule();
        }
        true
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn move_to(&mut self, target: usize) {
        self.state.position = target.min(self.last_index());
        if self.is_playing() && self.at_end() {
            self.stop();
        }
    }

    fn schedule(&mut self) {
        let due = self.clock.now() + self.delay();
        self.pending = Some(PendingAdvance { due });
    }

    fn stop(&mut self) {
        self.state.status = PlaybackStatus::Idle;
        self.pending = None;
    }
}
