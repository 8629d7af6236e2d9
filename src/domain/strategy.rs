//! Selection of the move pass implementation.
//!
//! Both passes produce the same board; the parallel one only pays off on
//! large diamonds.

/// Available move pass implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveStrategy {
    /// Cell-by-cell scatter into a fresh buffer
    #[default]
    Serial,
    /// Gather per target cell with rayon
    Parallel,
}

impl MoveStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<MoveStrategy> {
        vec![MoveStrategy::Serial, MoveStrategy::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            MoveStrategy::Serial => "Serial",
            MoveStrategy::Parallel => "Parallel",
        }
    }

    /// The other strategy
    pub fn toggled(self) -> Self {
        match self {
            MoveStrategy::Serial => MoveStrategy::Parallel,
            MoveStrategy::Parallel => MoveStrategy::Serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(MoveStrategy::default(), MoveStrategy::Serial);
    }

    #[test]
    fn test_toggle_cycles_through_all() {
        for strategy in MoveStrategy::all() {
            assert_ne!(strategy.toggled(), strategy);
            assert_eq!(strategy.toggled().toggled(), strategy);
        }
    }
}
