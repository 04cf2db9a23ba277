//! Planner configuration parameters.

use serde::{Deserialize, Serialize};

/// Limits and seeding for planners and the exhaustive solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum moves a single plan may contain (0 = unlimited).
    ///
    /// Every legal move puts a seed in the store, so plans always terminate;
    /// this only caps very long runs.
    pub max_moves: usize,

    /// Maximum positions the solver may expand (0 = unlimited).
    pub max_positions: usize,

    /// Seed for randomized move policies.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_moves: 0,
            max_positions: 1_000_000,
            seed: 42,
        }
    }
}

impl PlannerConfig {
    /// Cap the length of a plan.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Cap the number of positions the solver expands.
    #[must_use]
    pub fn with_max_positions(mut self, max_positions: usize) -> Self {
        self.max_positions = max_positions;
        self
    }

    /// Seed randomized policies.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub(crate) fn move_limit_reached(&self, moves: usize) -> bool {
        self.max_moves > 0 && moves >= self.max_moves
    }

    pub(crate) fn position_limit_reached(&self, positions: usize) -> bool {
        self.max_positions > 0 && positions >= self.max_positions
    }
}
