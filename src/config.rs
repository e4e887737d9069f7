use std::env;
use std::time::Duration;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a default — the tool runs with no configuration at all.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Simulated scan delay between query submission and the results view.
    pub scan_delay: Duration,
    /// Delay before the stats row stops showing skeletons.
    pub stats_delay: Duration,
    /// Delay before the card grid stops showing skeletons.
    pub cards_delay: Duration,
    /// Interval between per-card reveal ticks.
    pub tick_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            scan_delay: millis_var("DOSSIER_SCAN_DELAY_MS", 800)?,
            stats_delay: millis_var("DOSSIER_STATS_DELAY_MS", 600)?,
            cards_delay: millis_var("DOSSIER_CARDS_DELAY_MS", 1000)?,
            tick_interval: millis_var("DOSSIER_TICK_MS", 80)?,
        })
    }

    /// All delays collapsed to zero — for demos that shouldn't wait.
    pub fn instant(mut self) -> Self {
        self.scan_delay = Duration::ZERO;
        self.stats_delay = Duration::ZERO;
        self.cards_delay = Duration::ZERO;
        self.tick_interval = Duration::ZERO;
        self
    }
}

fn millis_var(name: &str, default_ms: u64) -> Result<Duration> {
    let ms = match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("{name} must be an integer millisecond count, got {raw:?}"))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(ms))
}
