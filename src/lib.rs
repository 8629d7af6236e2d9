// Domain layer - board, tiles and the rules that move them
pub mod domain;

// Application layer - clock, simulation driver and startup configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, Cell, Coord, Direction, MoveStrategy, Tile, TileId, TileRenderer, World};
pub use application::{Camera, Config, CycleReport, Simulation, StartupError};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
