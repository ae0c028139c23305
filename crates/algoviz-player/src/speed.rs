//! Playback speed and its mapping to the inter-step delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Slowest accepted speed; also what invalid input clamps to.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest accepted speed.
pub const MAX_SPEED: f64 = 10.0;

/// Timing parameters for a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Delay between steps at speed 1.0. Default: 1000 ms.
    pub base_delay: Duration,
    /// Lower bound on the delay regardless of speed. Default: 50 ms.
    pub min_delay: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            base_delay: Duration::from_millis(1000),
            min_delay: Duration::from_millis(50),
        }
    }
}

/// A user-facing speed multiplier, always within `MIN_SPEED..=MAX_SPEED`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(f64);

impl Speed {
    pub const NORMAL: Speed = Speed(1.0);

    /// Clamps `value` into range. NaN, infinities and non-positive values
    /// become `MIN_SPEED`.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Speed(MIN_SPEED);
        }
        Speed(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `max(min_delay, base_delay / speed)`: strictly decreasing in speed
    /// until it reaches the floor.
    pub fn delay(self, config: &PlayerConfig) -> Duration {
        config.base_delay.div_f64(self.0).max(config.min_delay)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::NORMAL
    }
}

impl From<f64> for Speed {
    fn from(value: f64) -> Self {
        Speed::new(value)
    }
}
