//! Slideshow scheduling state.
//!
//! The timer itself lives in the runtime; the session only remembers whether
//! a show is running and which timer generation is current. Every start bumps
//! the generation, so a tick armed by an earlier show is recognised as stale
//! and dropped instead of advancing the new one.

use std::time::Duration;

/// Interval between slides when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    active: bool,
    generation: u64,
    interval: Duration,
}

impl Slideshow {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            active: false,
            generation: 0,
            interval,
        }
    }

    /// Starts a new show and returns its timer generation.
    pub fn start(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        tracing::debug!(generation = self.generation, "slideshow started");
        self.generation
    }

    /// Stops the show. Returns `false` if none was running.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Whether a tick of `generation` belongs to the running show.
    #[must_use]
    pub const fn accepts(&self, generation: u64) -> bool {
        self.active && self.generation == generation
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
