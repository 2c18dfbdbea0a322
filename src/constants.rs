//! Configuration constants for ferris-circuits

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the ferris wheel animation, with the final frame
    /// shown on completion
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎡 ", "🎡⊙", "🎡◐", "🎡◓", "🎡◑", "🎡◒", "🎡○", "🎡●", "✓",
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Logging configuration
pub mod logging {
    /// Log filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 9);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(logging::DEFAULT_FILTER, "warn");
    }
}
