/// Playback state for one displayed animation.
///
/// Only three things change it: a new generation being loaded, play/pause
/// being toggled, and a timer tick. `epoch` increases on every transition
/// that changes whether a timer should be running, so a timer armed under an
/// older epoch can be told apart from the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playback {
    frames: Vec<String>,
    current_frame: usize,
    is_playing: bool,
    epoch: u64,
}

/// Point-in-time view of a [`Playback`], cheap enough to publish per tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub frame: Option<String>,
    pub current_frame: usize,
    pub frame_count: usize,
    pub is_playing: bool,
}

impl PlaybackSnapshot {
    /// `FRAME 3/12` style label, or `None` when there is nothing to show.
    pub fn counter(&self) -> Option<String> {
        (self.frame_count > 0)
            .then(|| format!("FRAME {}/{}", self.current_frame + 1, self.frame_count))
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generation succeeded: show its first frame and start playing.
    pub fn load(&mut self, frames: Vec<String>) {
        self.frames = frames;
        self.current_frame = 0;
        self.is_playing = true;
        self.epoch += 1;
    }

    pub fn toggle(&mut self) {
        self.set_playing(!self.is_playing);
    }

    pub fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.epoch += 1;
        }
    }

    /// Advance one frame if a timer armed at `epoch` is still the live one.
    /// Returns whether the index moved.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.should_tick() {
            return false;
        }
        self.current_frame = (self.current_frame + 1) % self.frames.len();
        true
    }

    /// Whether a periodic timer should be running right now.
    pub fn should_tick(&self) -> bool {
        self.is_playing && !self.frames.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// The frame to render, or `None` for an empty sequence.
    pub fn frame(&self) -> Option<&str> {
        self.frames.get(self.current_frame).map(String::as_str)
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            frame: self.frame().map(str::to_string),
            current_frame: self.current_frame,
            frame_count: self.frames.len(),
            is_playing: self.is_playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("f{i}")).collect()
    }

    #[test]
    fn index_after_n_ticks_is_n_mod_len() {
        for len in 1..=5 {
            let mut playback = Playback::new();
            playback.load(frames(len));
            let epoch = playback.epoch();
            for n in 1..=12 {
                assert!(playback.tick(epoch));
                assert_eq!(playback.current_frame(), n % len);
            }
        }
    }

    #[test]
    fn load_resets_and_starts_playing() {
        let mut playback = Playback::new();
        playback.load(frames(4));
        let epoch = playback.epoch();
        playback.tick(epoch);
        playback.tick(epoch);
        playback.load(frames(3));
        assert_eq!(playback.current_frame(), 0);
        assert!(playback.is_playing());
        assert_eq!(playback.frame(), Some("f1"));
    }

    #[test]
    fn paused_tick_keeps_index() {
        let mut playback = Playback::new();
        playback.load(frames(3));
        playback.tick(playback.epoch());
        playback.toggle();
        assert!(!playback.is_playing());
        assert!(!playback.tick(playback.epoch()));
        assert_eq!(playback.current_frame(), 1);
    }

    #[test]
    fn stale_epoch_cannot_tick() {
        let mut playback = Playback::new();
        playback.load(frames(5));
        let stale = playback.epoch();
        playback.load(frames(2));
        assert!(!playback.tick(stale));
        assert_eq!(playback.current_frame(), 0);
    }

    #[test]
    fn empty_sequence_never_ticks() {
        let mut playback = Playback::new();
        playback.load(Vec::new());
        assert!(playback.is_playing());
        assert!(!playback.should_tick());
        assert!(!playback.tick(playback.epoch()));
        assert_eq!(playback.frame(), None);
        assert_eq!(playback.snapshot().counter(), None);
    }

    #[test]
    fn set_playing_same_value_keeps_epoch() {
        let mut playback = Playback::new();
        playback.load(frames(2));
        let epoch = playback.epoch();
        playback.set_playing(true);
        assert_eq!(playback.epoch(), epoch);
    }

    #[test]
    fn snapshot_counter_is_one_based() {
        let mut playback = Playback::new();
        playback.load(frames(12));
        playback.tick(playback.epoch());
        playback.tick(playback.epoch());
        assert_eq!(playback.snapshot().counter().as_deref(), Some("FRAME 3/12"));
    }
}
