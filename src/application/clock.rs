/// Phase of the per-cycle animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a resume event
    Idle,
    /// Grow the board and annihilate facing pairs on the next tick
    GrowAndPrecheck,
    /// Sliding tiles towards their next cell, visual only
    Interpolating,
    /// Interpolation finished; move and spawn on the next tick
    DiscreteUpdate,
}

/// Work the simulation must perform for one tick, in this order
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickSteps {
    /// Grow the board and resolve collisions
    pub precheck: bool,
    /// Interpolation progress to show, when interpolating
    pub progress: Option<f32>,
    /// Run the discrete move and spawn step
    pub discrete: bool,
}

/// Tick-driven phase machine sequencing growth, interpolation and the
/// discrete update. Interpolation takes `tick_rate` ticks per cycle.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    phase: Phase,
    tick_rate: f32,
    elapsed_ticks: u32,
}

impl AnimationClock {
    pub fn new(tick_rate: f32) -> Self {
        debug_assert!(tick_rate > 0.0);
        Self {
            phase: Phase::Idle,
            tick_rate,
            elapsed_ticks: 0,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Interpolation progress through the current cycle (0..=1)
    pub fn progress(&self) -> f32 {
        (self.elapsed_ticks as f32 / self.tick_rate).min(1.0)
    }

    /// Start a cycle. Ignored (returns false) unless idle.
    pub fn resume(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = Phase::GrowAndPrecheck;
        self.elapsed_ticks = 0;
        true
    }

    /// Advance one tick and report what has to run. A tick carries either
    /// interpolation (preceded by the precheck on a cycle's first tick) or
    /// the discrete update, never both.
    pub fn tick(&mut self) -> TickSteps {
        let mut steps = TickSteps::default();

        match self.phase {
            Phase::Idle => {}
            Phase::GrowAndPrecheck | Phase::Interpolating => {
                if self.phase == Phase::GrowAndPrecheck {
                    steps.precheck = true;
                    self.phase = Phase::Interpolating;
                    self.elapsed_ticks = 0;
                }
                self.elapsed_ticks += 1;
                let t = self.elapsed_ticks as f32 / self.tick_rate;
                steps.progress = Some(t.min(1.0));
                if t >= 1.0 {
                    self.phase = Phase::DiscreteUpdate;
                }
            }
            Phase::DiscreteUpdate => {
                steps.discrete = true;
                self.phase = Phase::Idle;
            }
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut clock = AnimationClock::new(16.0);
        assert_eq!(clock.tick(), TickSteps::default());
        assert_eq!(clock.phase(), Phase::Idle);
    }

    #[test]
    fn test_full_cycle_ordering() {
        let mut clock = AnimationClock::new(4.0);
        assert!(clock.resume());
        assert_eq!(clock.phase(), Phase::GrowAndPrecheck);

        let first = clock.tick();
        assert!(first.precheck);
        assert_eq!(first.progress, Some(0.25));
        assert!(!first.discrete);

        assert_eq!(clock.tick().progress, Some(0.5));
        assert_eq!(clock.tick().progress, Some(0.75));

        let last = clock.tick();
        assert!(!last.precheck);
        assert_eq!(last.progress, Some(1.0));
        assert!(!last.discrete);
        assert_eq!(clock.phase(), Phase::DiscreteUpdate);

        let update = clock.tick();
        assert_eq!(update, TickSteps { precheck: false, progress: None, discrete: true });
        assert!(clock.is_idle());

        assert_eq!(clock.tick(), TickSteps::default());
    }

    #[test]
    fn test_resume_ignored_mid_cycle() {
        let mut clock = AnimationClock::new(16.0);
        assert!(clock.resume());
        assert!(!clock.resume());
        clock.tick();
        assert!(!clock.resume());
        assert_eq!(clock.phase(), Phase::Interpolating);
    }

    #[test]
    fn test_cycle_length_matches_tick_rate() {
        for rate in [1.0, 3.0, 10.0, 16.0, 60.0] {
            let mut clock = AnimationClock::new(rate);
            clock.resume();
            let mut ticks = 0;
            loop {
                ticks += 1;
                if clock.tick().discrete {
                    break;
                }
            }
            assert_eq!(ticks, rate as u32 + 1, "rate {rate}");
        }
    }

    #[test]
    fn test_fractional_rate_rounds_up() {
        let mut clock = AnimationClock::new(2.5);
        clock.resume();
        assert!(!clock.tick().discrete);
        assert!(!clock.tick().discrete);
        assert_eq!(clock.tick().progress, Some(1.0));
        assert!(clock.tick().discrete);
    }

    #[test]
    fn test_no_tick_mixes_interpolation_and_update() {
        for rate in [0.5, 1.0, 2.0, 16.0] {
            let mut clock = AnimationClock::new(rate);
            clock.resume();
            loop {
                let steps = clock.tick();
                assert!(
                    !(steps.discrete && (steps.progress.is_some() || steps.precheck)),
                    "rate {rate}: {steps:?}"
                );
                if steps.discrete {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_resume_ignored_while_update_pending() {
        let mut clock = AnimationClock::new(1.0);
        clock.resume();
        clock.tick();
        assert_eq!(clock.phase(), Phase::DiscreteUpdate);
        assert!(!clock.resume());
        assert!(clock.tick().discrete);
        assert!(clock.resume());
    }
}
