//! Playback state for the lofi radio, independent of any audio element.

/// Live lofi radio stream.
pub const LOFI_STREAM_URL: &str = "https://live.hunter.fm/lofi_high";

/// Volume applied to a fresh player.
pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Play/pause flag and volume in `[0, 1]`.
pub struct PlayerState {
    playing: bool,
    volume: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl PlayerState {
    /// Whether the stream should currently be audible.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Flips play/pause and returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Stores `volume` clamped into `[0, 1]` and returns the stored value. Non-finite input
    /// keeps the previous volume.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
        self.volume
    }

    /// Back to paused; volume is kept.
    pub fn stop(&mut self) {
        self.playing = false;
    }
}
