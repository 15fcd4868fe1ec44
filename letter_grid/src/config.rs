// config.rs - Command-line options and the validated settings built from them

use std::time::Duration;

use clap::Parser;

use crate::driver::AnimationTiming;
use crate::error::{LetterGridError, Result};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "letter_grid",
    version,
    about = "Interactive letter grid - watch the letters dance between light and shadow"
)]
pub struct Cli {
    /// Seed for every random choice (letters, patterns, delays). Random if omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Shortest pause between two animation ticks, in milliseconds.
    #[arg(long = "min-delay-ms", default_value_t = 600)]
    pub min_delay_ms: u64,

    /// Random extra pause added on top of the minimum, drawn from [0, spread).
    #[arg(long = "delay-spread-ms", default_value_t = 1400)]
    pub delay_spread_ms: u64,

    /// Start with the animation paused.
    #[arg(long)]
    pub paused: bool,

    /// Log filter, e.g. "info" or "letter_grid=debug". RUST_LOG takes precedence.
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub timing: AnimationTiming,
    pub start_animating: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            timing: AnimationTiming::default(),
            start_animating: true,
        }
    }
}

impl TryFrom<&Cli> for Settings {
    type Error = LetterGridError;

    fn try_from(cli: &Cli) -> Result<Self> {
        if cli.min_delay_ms == 0 {
            return Err(LetterGridError::InvalidTiming(
                "--min-delay-ms must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            seed: cli.seed,
            timing: AnimationTiming {
                min_delay: Duration::from_millis(cli.min_delay_ms),
                delay_spread: Duration::from_millis(cli.delay_spread_ms),
            },
            start_animating: !cli.paused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_timing() {
        let cli = Cli::parse_from(["letter_grid"]);
        let settings = Settings::try_from(&cli).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timing.min_delay, Duration::from_millis(600));
        assert_eq!(settings.timing.delay_spread, Duration::from_millis(1400));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn flags_are_carried_into_settings() {
        let cli = Cli::parse_from([
            "letter_grid",
            "--seed", "42",
            "--min-delay-ms", "100",
            "--delay-spread-ms", "0",
            "--paused",
        ]);
        let settings = Settings::try_from(&cli).unwrap();

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.timing.min_delay, Duration::from_millis(100));
        assert_eq!(settings.timing.delay_spread, Duration::ZERO);
        assert!(!settings.start_animating);
    }

    #[test]
    fn zero_minimum_delay_is_rejected() {
        let cli = Cli::parse_from(["letter_grid", "--min-delay-ms", "0"]);
        let err = Settings::try_from(&cli).unwrap_err();
        assert!(matches!(err, LetterGridError::InvalidTiming(_)));
    }
}
