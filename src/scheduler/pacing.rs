//! Randomized pacing: typing delays, follow-up branching and the RNG behind them

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::Duration;

/// Timing and probability knobs for bot turns
#[derive(Debug, Clone, PartialEq)]
pub struct PacingConfig {
    /// Shortest simulated typing time
    pub typing_min: Duration,
    /// Longest simulated typing time
    pub typing_max: Duration,
    /// Pause between the greeting and the welcome typing cycle
    pub greeting_delay: Duration,
    /// Pause between a reply and the follow-up typing cycle
    pub follow_up_delay: Duration,
    /// Chance of a follow-up prompt after each reply, in `[0, 1]`
    pub follow_up_probability: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            typing_min: Duration::from_millis(1200),
            typing_max: Duration::from_millis(2500),
            greeting_delay: Duration::from_millis(500),
            follow_up_delay: Duration::from_millis(2000),
            follow_up_probability: 0.7,
        }
    }
}

impl PacingConfig {
    /// Fixed typing time and a certain branch outcome, for tests
    pub fn deterministic(typing: Duration, follow_up: bool) -> Self {
        Self {
            typing_min: typing,
            typing_max: typing,
            follow_up_probability: if follow_up { 1.0 } else { 0.0 },
            ..Self::default()
        }
    }
}

/// Source of every random decision a session makes
pub struct Pacing {
    config: PacingConfig,
    rng: Box<dyn RngCore + Send>,
}

impl std::fmt::Debug for Pacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacing")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Pacing {
    pub fn new(config: PacingConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: PacingConfig, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            config,
            rng: Box::new(rng),
        }
    }

    pub fn seeded(config: PacingConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Uniform draw from the configured typing range, millisecond resolution
    pub fn typing_delay(&mut self) -> Duration {
        let min = millis(self.config.typing_min);
        let max = millis(self.config.typing_max);
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        Duration::from_millis(self.rng.gen_range(low..=high))
    }

    /// Whether to chain a follow-up prompt after a reply
    pub fn roll_follow_up(&mut self) -> bool {
        let p = self.config.follow_up_probability;
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.gen_bool(p)
    }

    pub fn greeting_delay(&self) -> Duration {
        self.config.greeting_delay
    }

    pub fn follow_up_delay(&self) -> Duration {
        self.config.follow_up_delay
    }

    pub fn rng(&mut self) -> &mut (dyn RngCore + Send) {
        self.rng.as_mut()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
