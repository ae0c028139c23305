//! Playback properties: position bounds under arbitrary transport sequences,
//! guaranteed termination of `play`, and the tokio driver under paused time.

use std::time::Duration;

use proptest::prelude::*;

use algoviz_player::{
    spawn, ManualClock, PlaybackSnapshot, Player, PlayerConfig, PlayerError, TokioClock,
};

#[derive(Debug, Clone)]
enum Op {
    Play,
    Pause,
    StepForward,
    StepBackward,
    Reset,
    Seek(usize),
    SetSpeed(f64),
    Wait(u64),
}

fn ops() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Play),
        Just(Op::Pause),
        Just(Op::StepForward),
        Just(Op::StepBackward),
        Just(Op::Reset),
        (0usize..100).prop_map(Op::Seek),
        (-1.0f64..20.0).prop_map(Op::SetSpeed),
        (0u64..3000).prop_map(Op::Wait),
    ]
}

fn manual(len: usize) -> (Player<usize, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let player = Player::with_clock(
        (0..len).collect::<Vec<_>>(),
        1.0,
        PlayerConfig::default(),
        clock.clone(),
    )
    .unwrap();
    (player, clock)
}

proptest! {
    #[test]
    fn position_never_leaves_the_trace(len in 1usize..30, script in prop::collection::vec(ops(), 0..60)) {
        let (mut player, clock) = manual(len);
        for op in script {
            match op {
                Op::Play => player.play(),
                Op::Pause => player.pause(),
                Op::StepForward => player.step_forward(),
                Op::StepBackward => player.step_backward(),
                Op::Reset => player.reset(),
                Op::Seek(p) => player.seek(p),
                Op::SetSpeed(s) => player.set_speed(s),
                Op::Wait(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    player.tick();
                }
            }
            prop_assert!(player.position() < len);
            // Playing implies exactly one pending advance; idle implies none.
            prop_assert_eq!(player.is_playing(), player.pending().is_some());
            prop_assert_eq!(*player.current(), player.position());
        }
    }

    #[test]
    fn play_always_terminates(len in 1usize..200, speed in 0.1f64..10.0) {
        let (mut player, clock) = manual(len);
        player.set_speed(speed);
        player.play();

        let mut ticks = 0;
        let mut seen = vec![0];
        while player.is_playing() {
            clock.advance(player.delay());
            prop_assert!(player.tick());
            seen.push(player.position());
            ticks += 1;
            prop_assert!(ticks < len, "still playing after {} ticks", ticks);
        }
        prop_assert_eq!(player.position(), len - 1);
        // Every step observed, in order, none skipped.
        prop_assert_eq!(seen, (0..len).collect::<Vec<_>>());
    }
}

// ---------------------------------------------------------------------------
// Tokio driver
// ---------------------------------------------------------------------------

fn tokio_player(len: usize) -> Player<usize, TokioClock> {
    Player::with_clock(
        (0..len).collect::<Vec<_>>(),
        1.0,
        PlayerConfig::default(),
        TokioClock::new(),
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn driver_plays_to_the_end() {
    let mut handle = spawn(tokio_player(4));
    handle.play().unwrap();

    let done = handle
        .wait_for(|s: &PlaybackSnapshot| s.at_end() && !s.is_playing)
        .await
        .unwrap();
    assert_eq!(done.position, 3);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn driver_publishes_every_position() {
    let handle = spawn(tokio_player(5));
    let mut rx = handle.subscribe();
    handle.play().unwrap();

    let mut positions = vec![rx.borrow().position];
    while rx.changed().await.is_ok() {
        let snap = *rx.borrow_and_update();
        if positions.last() != Some(&snap.position) {
            positions.push(snap.position);
        }
        if snap.at_end() && !snap.is_playing {
            break;
        }
    }
    assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn driver_pause_holds_position() {
    let mut handle = spawn(tokio_player(10));
    handle.play().unwrap();
    handle.wait_for(|s| s.position == 2).await.unwrap();
    handle.pause().unwrap();
    handle.wait_for(|s| !s.is_playing).await.unwrap();

    tokio::time::sleep(Duration::from_secs(30)).await;
    let snap = handle.snapshot();
    assert_eq!(snap.position, 2);
    assert!(!snap.is_playing);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn driver_load_replaces_trace_without_stale_advance() {
    let mut handle = spawn(tokio_player(100));
    handle.play().unwrap();
    handle.wait_for(|s| s.position == 50).await.unwrap();

    handle.load(vec![0, 1]).unwrap();
    let snap = handle.wait_for(|s| s.generation == 1).await.unwrap();
    assert_eq!(snap.position, 0);
    assert_eq!(snap.len, 2);
    assert!(!snap.is_playing);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(handle.snapshot().position, 0);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn driver_rejects_empty_load() {
    let handle = spawn(tokio_player(3));
    assert_eq!(handle.load(Vec::new()), Err(PlayerError::EmptyTrace));
    handle.shutdown().await;
}
