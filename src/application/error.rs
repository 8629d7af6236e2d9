use thiserror::Error;

/// Failures that stop the program before the first tick
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no entropy source available to seed the spawn generator: {0}")]
    Entropy(String),

    #[error("invalid seed {0:?}: expected an unsigned 64-bit integer")]
    InvalidSeed(String),
}
