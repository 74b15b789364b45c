use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{Playback, PlaybackSnapshot};

/// Period between frames (5 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Handle to the one running frame timer.
struct Ticker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn stop(self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

/// Drives a [`Playback`] record with a periodic timer.
///
/// The player is the single owner of both the record and the timer handle.
/// Whenever a transition changes the frame sequence or the playing flag, the
/// existing timer is cancelled before a new one is armed, and a timer that
/// fires after being superseded is ignored by [`Playback::tick`]. Dropping
/// the player cancels the timer.
///
/// Renderers observe the state through [`AnimationPlayer::subscribe`].
/// Must be used from within a Tokio runtime.
pub struct AnimationPlayer {
    playback: Arc<Mutex<Playback>>,
    updates: Arc<watch::Sender<PlaybackSnapshot>>,
    ticker: Option<Ticker>,
    interval: Duration,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        let (updates, _) = watch::channel(PlaybackSnapshot::default());
        Self {
            playback: Arc::new(Mutex::new(Playback::new())),
            updates: Arc::new(updates),
            ticker: None,
            // tokio intervals reject a zero period
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.updates.subscribe()
    }

    /// Show a freshly generated sequence from its first frame and play it.
    pub fn load(&mut self, frames: Vec<String>) {
        self.transition(|playback| playback.load(frames));
    }

    pub fn toggle(&mut self) {
        self.transition(Playback::toggle);
    }

    pub fn play(&mut self) {
        self.transition(|playback| playback.set_playing(true));
    }

    pub fn pause(&mut self) {
        self.transition(|playback| playback.set_playing(false));
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        lock(&self.playback).snapshot()
    }

    pub fn current_frame(&self) -> usize {
        lock(&self.playback).current_frame()
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.playback).is_playing()
    }

    /// Whether a frame timer is currently armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.handle.is_finished())
    }

    /// Cancel the frame timer. The current frame stays on screen.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    fn transition(&mut self, apply: impl FnOnce(&mut Playback)) {
        let (epoch, should_tick, changed) = {
            let mut playback = lock(&self.playback);
            let before = playback.epoch();
            apply(&mut *playback);
            self.updates.send_replace(playback.snapshot());
            (
                playback.epoch(),
                playback.should_tick(),
                playback.epoch() != before,
            )
        };

        if !changed {
            return;
        }

        self.shutdown();
        if should_tick {
            debug!(epoch, "Arming frame timer");
            self.ticker = Some(self.spawn_ticker(epoch));
        }
    }

    fn spawn_ticker(&self, epoch: u64) -> Ticker {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let playback = Arc::clone(&self.playback);
        let updates = Arc::clone(&self.updates);
        let period = self.interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if !advance(&playback, &updates, epoch) {
                            break;
                        }
                    }
                }
            }
        });

        Ticker { cancel, handle }
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn advance(
    playback: &Mutex<Playback>,
    updates: &watch::Sender<PlaybackSnapshot>,
    epoch: u64,
) -> bool {
    let mut playback = lock(playback);
    if !playback.tick(epoch) {
        return false;
    }
    updates.send_replace(playback.snapshot());
    true
}

fn lock(playback: &Mutex<Playback>) -> MutexGuard<'_, Playback> {
    playback.lock().unwrap_or_else(PoisonError::into_inner)
}
