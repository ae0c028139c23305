//! Generic playback engine for step traces.
//!
//! A [`Player`] turns a static list of steps into a controllable animation:
//! play, pause, step forward and back, seek, reset, replay, variable speed.
//! It knows nothing about what a step contains; a renderer reads
//! [`Player::current`] (or `trace[snapshot.position]`) after each transition.
//!
//! Time is injected through a [`Clock`]. Drive a player synchronously by
//! calling [`Player::tick`] from your own loop, or hand it to
//! [`driver::spawn`] to run it on a tokio task.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use algoviz_player::{ManualClock, Player, PlayerConfig};
//!
//! let clock = ManualClock::new();
//! let mut player = Player::with_clock(vec!["a", "b", "c"], 1.0, PlayerConfig::default(), clock.clone()).unwrap();
//! player.play();
//! while player.is_playing() {
//!     clock.advance(player.delay());
//!     player.tick();
//! }
//! assert_eq!(*player.current(), "c");
//! ```

pub mod clock;
pub mod driver;
pub mod error;
pub mod player;
pub mod speed;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use driver::{spawn, Command, PlaybackHandle};
pub use error::PlayerError;
pub use player::{PendingAdvance, Player};
pub use speed::{PlayerConfig, Speed, MAX_SPEED, MIN_SPEED};
pub use state::{PlaybackSnapshot, PlaybackState, PlaybackStatus};
