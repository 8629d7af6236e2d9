//! Startup parameters, fixed for the whole run.

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::warn;

use super::StartupError;
use crate::domain::MoveStrategy;

/// Ticks per second when no usable rate is given
pub const DEFAULT_TICK_RATE: f32 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Ticks per second; one cycle interpolates over this many ticks
    pub tick_rate: f32,
    /// Seed for the spawn generator; drawn from the OS when absent
    pub seed: Option<u64>,
    pub strategy: MoveStrategy,
    /// Start the first cycle without waiting for a resume event
    pub autostart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
            strategy: MoveStrategy::default(),
            autostart: true,
        }
    }
}

impl Config {
    /// Parse process arguments (program name already stripped).
    ///
    /// `[TICK_RATE] [--seed N] [--parallel] [--paused]`. A missing or
    /// unusable tick rate falls back to the default; a bad seed is an error.
    pub fn from_args<I, S>(args: I) -> Result<Self, StartupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut rate_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--seed" => {
                    let value = args.next().ok_or_else(|| StartupError::InvalidSeed(String::new()))?;
                    let value = value.as_ref();
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| StartupError::InvalidSeed(value.to_owned()))?;
                    config.seed = Some(seed);
                }
                "--parallel" => config.strategy = MoveStrategy::Parallel,
                "--paused" => config.autostart = false,
                other if !rate_seen => {
                    rate_seen = true;
                    config.tick_rate = parse_tick_rate(other);
                }
                other => warn!(argument = other, "ignoring unexpected argument"),
            }
        }

        Ok(config)
    }

    /// The configured seed, or a fresh one from the OS entropy source
    pub fn resolve_seed(&self) -> Result<u64, StartupError> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => OsRng
                .try_next_u64()
                .map_err(|e| StartupError::Entropy(e.to_string())),
        }
    }
}

fn parse_tick_rate(raw: &str) -> f32 {
    match raw.parse::<f32>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
        _ => {
            warn!(value = raw, default = DEFAULT_TICK_RATE, "unusable tick rate, using default");
            DEFAULT_TICK_RATE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, StartupError> {
        Config::from_args(args.iter().copied())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate, 16.0);
        assert!(config.autostart);
    }

    #[test]
    fn test_tick_rate_argument() {
        assert_eq!(parse(&["30"]).unwrap().tick_rate, 30.0);
        assert_eq!(parse(&["7.5"]).unwrap().tick_rate, 7.5);
    }

    #[test]
    fn test_bad_tick_rate_falls_back() {
        for raw in ["fast", "0", "-4", "NaN", "inf"] {
            assert_eq!(parse(&[raw]).unwrap().tick_rate, DEFAULT_TICK_RATE, "{raw}");
        }
    }

    #[test]
    fn test_flags() {
        let config = parse(&["--parallel", "--seed", "42", "--paused", "8"]).unwrap();
        assert_eq!(config.strategy, MoveStrategy::Parallel);
        assert_eq!(config.seed, Some(42));
        assert!(!config.autostart);
        assert_eq!(config.tick_rate, 8.0);
        assert_eq!(config.resolve_seed().unwrap(), 42);
    }

    #[test]
    fn test_invalid_seed() {
        assert!(matches!(parse(&["--seed", "abc"]), Err(StartupError::InvalidSeed(s)) if s == "abc"));
        assert!(matches!(parse(&["--seed"]), Err(StartupError::InvalidSeed(_))));
    }
}
