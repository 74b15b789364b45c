//! Timer-driven playback, run on a paused Tokio clock so ticks are exact.

use std::time::Duration;

use tokio::time::sleep;

use genstudio::{AnimationPlayer, FRAME_INTERVAL};

fn frames(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("f{i}")).collect()
}

/// Sleep through `ticks` frame periods, landing between two ticks.
async fn run_ticks(ticks: u32) {
    sleep(FRAME_INTERVAL * ticks + Duration::from_millis(50)).await;
}

#[tokio::test(start_paused = true)]
async fn index_wraps_after_sequence_length() {
    let mut player = AnimationPlayer::new();
    player.load(frames(3));
    assert_eq!(player.current_frame(), 0);
    assert!(player.is_playing());

    run_ticks(2).await;
    assert_eq!(player.current_frame(), 2);

    sleep(FRAME_INTERVAL).await;
    assert_eq!(player.current_frame(), 0);
}

#[tokio::test(start_paused = true)]
async fn index_is_tick_count_mod_length() {
    let mut player = AnimationPlayer::new();
    player.load(frames(4));

    run_ticks(11).await;
    assert_eq!(player.current_frame(), 11 % 4);
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_index_and_stops_timer() {
    let mut player = AnimationPlayer::new();
    player.load(frames(5));

    run_ticks(1).await;
    assert_eq!(player.current_frame(), 1);

    player.pause();
    assert!(!player.is_ticking());
    sleep(Duration::from_secs(2)).await;
    assert_eq!(player.current_frame(), 1);

    player.toggle();
    assert!(player.is_playing());
    run_ticks(1).await;
    assert_eq!(player.current_frame(), 2);
}

#[tokio::test(start_paused = true)]
async fn empty_sequence_arms_no_timer() {
    let mut player = AnimationPlayer::new();
    player.load(Vec::new());

    assert!(player.is_playing());
    assert!(!player.is_ticking());
    sleep(Duration::from_secs(1)).await;

    let snapshot = player.snapshot();
    assert_eq!(snapshot.frame, None);
    assert_eq!(snapshot.current_frame, 0);
}

#[tokio::test(start_paused = true)]
async fn loading_shorter_sequence_replaces_old_timer() {
    let mut player = AnimationPlayer::new();
    let updates = player.subscribe();
    player.load(frames(5));

    run_ticks(3).await;
    assert_eq!(player.current_frame(), 3);

    player.load(frames(2));
    assert_eq!(player.current_frame(), 0);

    // The old timer would have fired 150ms after the reload; only the new
    // one, armed at the reload, may advance the index.
    sleep(FRAME_INTERVAL + Duration::from_millis(50)).await;
    assert_eq!(player.current_frame(), 1);
    let snapshot = updates.borrow().clone();
    assert!(snapshot.current_frame < snapshot.frame_count);
    assert_eq!(snapshot.frame.as_deref(), Some("f2"));

    sleep(FRAME_INTERVAL).await;
    assert_eq!(player.current_frame(), 0);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_each_tick() {
    let mut player = AnimationPlayer::new();
    let mut updates = player.subscribe();
    player.load(frames(3));
    assert_eq!(updates.borrow_and_update().frame.as_deref(), Some("f1"));

    updates.changed().await.expect("tick");
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.current_frame, 1);
    assert_eq!(snapshot.counter().as_deref(), Some("FRAME 2/3"));
}

#[tokio::test(start_paused = true)]
async fn dropping_player_cancels_timer() {
    let mut player = AnimationPlayer::new();
    let updates = player.subscribe();
    player.load(frames(3));
    assert!(player.is_ticking());

    drop(player);
    sleep(Duration::from_secs(1)).await;

    // Every sender clone lived in the player or its timer task.
    assert!(updates.has_changed().is_err());
}

#[tokio::test(start_paused = true)]
async fn shutdown_keeps_current_frame() {
    let mut player = AnimationPlayer::new();
    player.load(frames(3));
    run_ticks(1).await;

    player.shutdown();
    sleep(Duration::from_secs(1)).await;

    assert!(!player.is_ticking());
    assert_eq!(player.current_frame(), 1);
}
