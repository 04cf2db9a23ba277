//! Policy-driven planning on a scratch board.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Board, BoardRng, BoardRngState};

use super::config::PlannerConfig;
use super::policy::{MovePolicy, NearestToStore};
use super::stats::SearchStats;
use super::MoveList;

/// Outcome of a planning run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Houses played, in order.
    pub moves: MoveList,

    /// Board after the last move.
    pub final_board: Board,
}

impl Plan {
    /// True if the plan empties every house.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.final_board.is_game_won()
    }
}

/// Plays a move policy until it stops or no legal move remains.
///
/// Works on a clone of the caller's board; the original is never touched.
pub struct Planner {
    config: PlannerConfig,
    policy: Box<dyn MovePolicy>,
    rng: BoardRng,
    stats: SearchStats,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl Planner {
    /// Planner using the nearest-to-store policy.
    pub fn new(config: PlannerConfig) -> Self {
        let rng = BoardRng::new(config.seed);
        Self {
            config,
            policy: Box::new(NearestToStore),
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom move policy.
    pub fn with_policy<P: MovePolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Resume the policy's random stream from a checkpoint.
    pub fn with_rng_state(mut self, state: &BoardRngState) -> Self {
        self.rng = BoardRng::from_state(state);
        self
    }

    /// Checkpoint of the random stream, for replaying a randomized plan.
    #[must_use]
    pub fn rng_state(&self) -> BoardRngState {
        self.rng.state()
    }

    /// Statistics from the last run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Play from `board` and return the moves taken.
    pub fn plan(&mut self, board: &Board) -> Plan {
        let start = Instant::now();
        self.stats.reset();

        let mut scratch = board.clone();
        let mut moves = MoveList::new();

        loop {
            if self.config.move_limit_reached(moves.len()) {
                self.stats.limit_reached = true;
                break;
            }

            let legal: SmallVec<[usize; 8]> = scratch.legal_moves().collect();
            let Some(house) = self.policy.select(&scratch, &legal, &mut self.rng) else {
                break;
            };

            // Houses from `legal` are in range; only an overflowing sow fails.
            if scratch.sow(house as isize).is_err() {
                break;
            }
            moves.push(house);
            self.stats.moves_played += 1;
        }

        self.stats.record_depth(moves.len());
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let plan = Plan {
            moves,
            final_board: scratch,
        };
        debug!(
            moves = plan.moves.len(),
            won = plan.is_won(),
            time_us = self.stats.time_us,
            "planned moves"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{FarthestFromStore, RandomMove};

    #[test]
    fn test_greedy_plan() {
        let board = Board::from_slice(&[0, 0, 1, 1, 3, 5, 0]);
        let mut planner = Planner::default();

        let plan = planner.plan(&board);

        assert_eq!(plan.moves.as_slice(), &[5, 1, 2, 1, 4, 1, 3, 1, 2, 1]);
        assert!(plan.is_won());
        assert_eq!(plan.final_board.store(), 10);
        assert_eq!(planner.stats().moves_played, 10);
        assert_eq!(planner.stats().max_depth, 10);
    }

    #[test]
    fn test_greedy_plan_stuck() {
        let board = Board::from_slice(&[0, 1, 2, 3, 4, 5, 6]);
        let plan = Planner::default().plan(&board);

        assert_eq!(
            plan.moves.as_slice(),
            &[1, 2, 1, 3, 1, 4, 1, 2, 1, 5, 1, 6, 1, 2, 1, 3, 1]
        );
        assert!(!plan.is_won());
        assert_eq!(plan.final_board.to_vec(), vec![17, 0, 1, 0, 2, 1, 0]);
    }

    #[test]
    fn test_plan_leaves_input_untouched() {
        let board = Board::from_slice(&[0, 1, 2]);
        let mut planner = Planner::default();

        let _ = planner.plan(&board);

        assert_eq!(board.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_legal_moves() {
        let board = Board::from_slice(&[0, 0, 1, 1, 3, 0, 0]);
        let plan = Planner::default().plan(&board);

        assert!(plan.moves.is_empty());
        assert!(!plan.is_won());
        assert_eq!(plan.final_board, board);
    }

    #[test]
    fn test_farthest_strands_lower_houses() {
        let board = Board::from_slice(&[0, 1, 2]);
        let plan = Planner::default()
            .with_policy(FarthestFromStore)
            .plan(&board);

        // Playing 2 first overfills house 1.
        assert_eq!(plan.moves.as_slice(), &[2]);
        assert!(!plan.is_won());
        assert_eq!(plan.final_board.to_vec(), vec![1, 2, 0]);
    }

    #[test]
    fn test_move_limit() {
        let board = Board::from_slice(&[0, 1, 2, 3, 4, 5, 6]);
        let mut planner = Planner::new(PlannerConfig::default().with_max_moves(2));

        let plan = planner.plan(&board);

        assert_eq!(plan.moves.as_slice(), &[1, 2]);
        assert!(planner.stats().limit_reached);
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let board = Board::from_slice(&[0, 1, 2, 3, 4, 5, 6]);

        let mut planner1 = Planner::new(PlannerConfig::default().with_seed(5)).with_policy(RandomMove);
        let mut planner2 = Planner::new(PlannerConfig::default().with_seed(5)).with_policy(RandomMove);

        assert_eq!(planner1.plan(&board), planner2.plan(&board));
    }

    #[test]
    fn test_rng_state_replays_random_plan() {
        let board = Board::from_slice(&[0, 1, 2, 3, 4, 5, 6]);
        let mut planner = Planner::new(PlannerConfig::default().with_seed(9)).with_policy(RandomMove);

        let _ = planner.plan(&board);
        let checkpoint = planner.rng_state();
        let expected = planner.plan(&board);

        let mut resumed = Planner::default()
            .with_policy(RandomMove)
            .with_rng_state(&checkpoint);
        assert_eq!(resumed.plan(&board), expected);
        assert_eq!(resumed.rng_state(), planner.rng_state());
    }

    #[test]
    fn test_overflowing_move_stops_plan() {
        let board = Board::from_slice(&[i64::MAX, 1]);
        let plan = Planner::default().plan(&board);

        assert!(plan.moves.is_empty());
        assert_eq!(plan.final_board, board);
    }
}
