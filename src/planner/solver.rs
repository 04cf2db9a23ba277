//! Exhaustive solver.
//!
//! Depth-first search over every legal move, nearest house first. Positions
//! proven unwinnable are cached so transpositions are searched once.

use std::time::Instant;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::Board;

use super::config::PlannerConfig;
use super::stats::SearchStats;
use super::MoveList;

/// A position on the search stack with the moves still to try.
struct Frame {
    board: Board,
    /// Legal houses, farthest first so `pop` yields the nearest.
    pending: SmallVec<[usize; 8]>,
}

impl Frame {
    fn new(board: Board) -> Self {
        let mut pending: SmallVec<[usize; 8]> = board.legal_moves().collect();
        pending.reverse();
        Self { board, pending }
    }
}

/// Finds a winning move sequence if one exists.
pub struct Solver {
    config: PlannerConfig,
    dead: FxHashSet<Board>,
    stats: SearchStats,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl Solver {
    /// Create a solver with the given limits.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            dead: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the last solve.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for a move sequence that empties every house.
    ///
    /// Returns `None` when no sequence exists or the position limit was hit
    /// (check `stats().limit_reached`).
    pub fn solve(&mut self, board: &Board) -> Option<MoveList> {
        let start = Instant::now();
        self.stats.reset();
        self.dead.clear();

        let mut path = MoveList::new();
        let mut stack = vec![Frame::new(board.clone())];

        let solution = loop {
            let Some(frame) = stack.last_mut() else {
                break None;
            };

            if frame.board.is_game_won() {
                break Some(path.clone());
            }

            match frame.pending.pop() {
                Some(house) => {
                    let mut next = frame.board.clone();
                    if next.sow(house as isize).is_err() || self.dead.contains(&next) {
                        continue;
                    }
                    if self
                        .config
                        .position_limit_reached(self.stats.positions_expanded as usize)
                    {
                        self.stats.limit_reached = true;
                        break None;
                    }

                    path.push(house);
                    self.stats.positions_expanded += 1;
                    self.stats.moves_played += 1;
                    self.stats.record_depth(path.len());
                    stack.push(Frame::new(next));
                }
                None => {
                    if let Some(exhausted) = stack.pop() {
                        self.dead.insert(exhausted.board);
                        self.stats.dead_ends += 1;
                    }
                    path.pop();
                }
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            solved = solution.is_some(),
            positions = self.stats.positions_expanded,
            dead_ends = self.stats.dead_ends,
            "solve finished"
        );
        solution
    }
}
