//! Tokio-driven playback.
//!
//! [`spawn`] moves a [`Player`] onto its own task. Transport calls on the
//! returned [`PlaybackHandle`] become [`Command`]s on an mpsc channel; the task
//! serializes them with timer firings on one `select!` loop, so there is never
//! a concurrent writer to the player. The task sleeps until the player's single
//! pending due time and publishes a [`PlaybackSnapshot`] on a `watch` channel
//! after every command and every tick.
//!
//! Loading a new trace is just another command handled on the same loop, so
//! the old pending advance is gone before the next `select!` can observe it.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};

use crate::clock::TokioClock;
use crate::error::PlayerError;
use crate::player::Player;
use crate::state::PlaybackSnapshot;

/// How long the loop parks when nothing is scheduled. Only a placeholder for
/// the disabled timer branch; commands still wake it immediately.
const IDLE_PARK: Duration = Duration::from_secs(3600);

/// Transport requests accepted by the playback task.
#[derive(Debug)]
pub enum Command<S> {
    Play,
    Pause,
    Toggle,
    StepForward,
    StepBackward,
    Seek(usize),
    Reset,
    Replay,
    SetSpeed(f64),
    Load(Vec<S>),
}

/// Control surface for a player running on a tokio task.
///
/// Dropping the handle closes the command channel, which ends the task.
#[derive(Debug)]
pub struct PlaybackHandle<S> {
    commands: mpsc::UnboundedSender<Command<S>>,
    snapshots: watch::Receiver<PlaybackSnapshot>,
    task: JoinHandle<()>,
}

/// Spawns the playback task for `player`. Must be called inside a tokio runtime.
pub fn spawn<S>(player: Player<S, TokioClock>) -> PlaybackHandle<S>
where
    S: Send + 'static,
{
    let (commands, rx) = mpsc::unbounded_channel();
    let (tx, snapshots) = watch::channel(player.snapshot());
    let task = tokio::spawn(run(player, rx, tx));
    PlaybackHandle {
        commands,
        snapshots,
        task,
    }
}

async fn run<S>(
    mut player: Player<S, TokioClock>,
    mut commands: mpsc::UnboundedReceiver<Command<S>>,
    snapshots: watch::Sender<PlaybackSnapshot>,
) {
    loop {
        let due = player.next_due().map(|d| player.clock().instant_at(d));
        let deadline = due.unwrap_or_else(|| Instant::now() + IDLE_PARK);

        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => apply(&mut player, command),
                None => break,
            },
            _ = sleep_until(deadline), if due.is_some() => {
                player.tick();
            }
        }

        snapshots.send_replace(player.snapshot());
    }
    tracing::debug!("playback task stopped");
}

fn apply<S>(player: &mut Player<S, TokioClock>, command: Command<S>) {
    match command {
        Command::Play => player.play(),
        Command::Pause => player.pause(),
        Command::Toggle => player.toggle(),
        Command::StepForward => player.step_forward(),
        Command::StepBackward => player.step_backward(),
        Command::Seek(position) => player.seek(position),
        Command::Reset => player.reset(),
        Command::Replay => player.replay(),
        Command::SetSpeed(speed) => player.set_speed(speed),
        Command::Load(trace) => {
            if let Err(err) = player.load(trace) {
                tracing::warn!(%err, "ignoring trace load");
            }
        }
    }
}

impl<S> PlaybackHandle<S> {
    fn send(&self, command: Command<S>) -> Result<(), PlayerError> {
        self.commands.send(command).map_err(|_| PlayerError::Closed)
    }

    pub fn play(&self) -> Result<(), PlayerError> {
        self.send(Command::Play)
    }

    pub fn pause(&self) -> Result<(), PlayerError> {
        self.send(Command::Pause)
    }

    pub fn toggle(&self) -> Result<(), PlayerError> {
        self.send(Command::Toggle)
    }

    pub fn step_forward(&self) -> Result<(), PlayerError> {
        self.send(Command::StepForward)
    }

    pub fn step_backward(&self) -> Result<(), PlayerError> {
        self.send(Command::StepBackward)
    }

    pub fn seek(&self, position: usize) -> Result<(), PlayerError> {
        self.send(Command::Seek(position))
    }

    pub fn reset(&self) -> Result<(), PlayerError> {
        self.send(Command::Reset)
    }

    pub fn replay(&self) -> Result<(), PlayerError> {
        self.send(Command::Replay)
    }

    pub fn set_speed(&self, speed: f64) -> Result<(), PlayerError> {
        self.send(Command::SetSpeed(speed))
    }

    /// Queues a new trace. An empty trace is rejected up front.
    pub fn load(&self, trace: Vec<S>) -> Result<(), PlayerError> {
        if trace.is_empty() {
            return Err(PlayerError::EmptyTrace);
        }
        self.send(Command::Load(trace))
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        *self.snapshots.borrow()
    }

    /// A receiver that observes every published snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.snapshots.clone()
    }

    /// Waits until a snapshot satisfies `predicate` and returns it.
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&PlaybackSnapshot) -> bool,
    ) -> Result<PlaybackSnapshot, PlayerError> {
        self.snapshots
            .wait_for(predicate)
            .await
            .map(|snap| *snap)
            .map_err(|_| PlayerError::Closed)
    }

    /// Closes the command channel and waits for the task to finish.
    pub async fn shutdown(self) {
        let PlaybackHandle { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            tracing::warn!(%err, "playback task ended abnormally");
        }
    }
}
