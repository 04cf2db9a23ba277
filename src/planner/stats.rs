//! Planning and solving statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a plan or solve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Moves applied to scratch boards.
    pub moves_played: u32,

    /// Positions expanded by the solver.
    pub positions_expanded: u32,

    /// Positions proven unwinnable.
    pub dead_ends: u32,

    /// Deepest move sequence explored.
    pub max_depth: u16,

    /// Search stopped early on a configured limit.
    pub limit_reached: bool,

    /// Total time spent (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Positions expanded per second.
    #[must_use]
    pub fn positions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.positions_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        let depth = u16::try_from(depth).unwrap_or(u16::MAX);
        self.max_depth = self.max_depth.max(depth);
    }
}
