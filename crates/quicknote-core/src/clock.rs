//! Time source used to stamp notes.

use chrono::{DateTime, Local};

/// Medium date with short time, e.g. `Oct 15, 2026, 9:30 AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Produces the display timestamp recorded on a note.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local wall clock rendered with a strftime-style pattern.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Render a specific instant with this clock's pattern.
    pub fn render(&self, at: &DateTime<Local>) -> String {
        at.format(&self.format).to_string()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        self.render(&Local::now())
    }
}
