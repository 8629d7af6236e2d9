use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::{debug, info};

use super::{AnimationClock, Config, Phase, StartupError};
use crate::domain::{MoveStrategy, TileRenderer, World};

/// Outcome of one completed growth+collision+move+spawn cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Diamond order after the cycle
    pub order: usize,
    /// Tile pairs annihilated before moving
    pub collisions: usize,
    pub spawned_pairs: usize,
    pub live_tiles: usize,
}

/// Simulation orchestrates the world, its clock and its collaborators.
/// This is the per-tick callback the front end drives.
pub struct Simulation<T: TileRenderer> {
    world: World,
    clock: AnimationClock,
    rng: Pcg32,
    renderer: T,
    pub strategy: MoveStrategy,
    seed: u64,
    pending_collisions: usize,
    pub cycles: u64,
    pub last_report: Option<CycleReport>,
    /// Duration of the last discrete update, for the info panel
    pub last_step_time_ms: f32,
}

impl<T: TileRenderer> Simulation<T> {
    /// Build a simulation from startup configuration. Fails only when no
    /// seed is configured and the OS entropy source is unavailable.
    pub fn new(config: &Config, renderer: T) -> Result<Self, StartupError> {
        let seed = config.resolve_seed()?;
        info!(seed, tick_rate = config.tick_rate, strategy = config.strategy.name(), "simulation ready");

        let mut sim = Self::with_seed(seed, config.tick_rate, renderer);
        sim.strategy = config.strategy;
        if config.autostart {
            sim.resume();
        }
        Ok(sim)
    }

    /// Build an idle simulation with an explicit seed
    pub fn with_seed(seed: u64, tick_rate: f32, renderer: T) -> Self {
        Self {
            world: World::new(),
            clock: AnimationClock::new(tick_rate),
            rng: Pcg32::seed_from_u64(seed),
            renderer,
            strategy: MoveStrategy::default(),
            seed,
            pending_collisions: 0,
            cycles: 0,
            last_report: None,
            last_step_time_ms: 0.0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &T {
        &self.renderer
    }

    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    pub fn tick_rate(&self) -> f32 {
        self.clock.tick_rate()
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn toggle_strategy(&mut self) {
        self.strategy = self.strategy.toggled();
        info!(strategy = self.strategy.name(), "move strategy changed");
    }

    /// External resume signal. Starts one cycle when idle, ignored otherwise.
    pub fn resume(&mut self) -> bool {
        let accepted = self.clock.resume();
        debug!(accepted, "resume");
        accepted
    }

    /// Run one tick. Returns a report when this tick completed a cycle.
    pub fn tick(&mut self) -> Option<CycleReport> {
        let steps = self.clock.tick();

        if steps.precheck {
            self.world.grow();
            let destroyed = self.world.resolve_collisions(&mut self.renderer);
            self.pending_collisions = destroyed / 2;
            debug!(order = self.world.board().order(), collisions = self.pending_collisions, "grown");
        }

        if let Some(t) = steps.progress {
            self.world.set_progress(t);
        }

        if !steps.discrete {
            return None;
        }

        let start = std::time::Instant::now();
        let spawned_pairs = self.world.advance(&mut self.rng, &mut self.renderer, self.strategy);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.cycles += 1;

        let report = CycleReport {
            order: self.world.board().order(),
            collisions: self.pending_collisions,
            spawned_pairs,
            live_tiles: self.world.tiles().len(),
        };
        info!(
            order = report.order,
            collisions = report.collisions,
            spawned = report.spawned_pairs,
            tiles = report.live_tiles,
            "cycle complete"
        );
        self.last_report = Some(report);
        Some(report)
    }

    /// Resume and tick until the cycle completes
    pub fn run_cycle(&mut self) -> Option<CycleReport> {
        if !self.resume() {
            return None;
        }
        loop {
            if let Some(report) = self.tick() {
                return Some(report);
            }
        }
    }
}
