//! Wall-clock timestamps for log lines.

/// A source of `HH:MM:SS` timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current time of day formatted as `HH:MM:SS`.
    fn timestamp(&self) -> String;
}

/// Reads the local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

/// Always returns the same timestamp. Useful for reproducible output.
#[derive(Clone, Debug)]
pub struct FixedClock(String);

impl FixedClock {
    /// Creates a clock stuck at `timestamp`.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
