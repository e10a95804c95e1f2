use std::time::Duration;

/// How long the race may run before the timeout outcome is reported.
pub const RACE_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct RacerConfig {
    timeout: Duration,
}

impl RacerConfig {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for RacerConfig {
    fn default() -> Self {
        Self::new(RACE_TIMEOUT)
    }
}
