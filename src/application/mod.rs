mod camera;
mod clock;
mod config;
mod error;
mod simulation;

pub use camera::Camera;
pub use clock::{AnimationClock, Phase, TickSteps};
pub use config::{Config, DEFAULT_TICK_RATE};
pub use error::StartupError;
pub use simulation::{CycleReport, Simulation};
