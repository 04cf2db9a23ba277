//! Move selection policies.
//!
//! A policy picks one house from the legal moves of a board:
//! - `NearestToStore`: the greedy heuristic that clears every winnable board
//! - `FarthestFromStore`: the opposite choice, useful as a baseline
//! - `RandomMove`: uniform choice driven by the planner's RNG

use crate::core::{Board, BoardRng};

/// Policy for choosing the next move.
pub trait MovePolicy: Send + Sync {
    /// Pick a house from `legal`, which is sorted by distance from the store.
    ///
    /// Returns `None` to stop playing.
    fn select(&self, board: &Board, legal: &[usize], rng: &mut BoardRng) -> Option<usize>;
}

/// Always play the legal house closest to the store.
///
/// Sowing from house `k` adds a seed to every house below it, so any lower
/// house that was legal becomes overfull and can never be played again.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestToStore;

impl MovePolicy for NearestToStore {
    fn select(&self, _board: &Board, legal: &[usize], _rng: &mut BoardRng) -> Option<usize> {
        legal.first().copied()
    }
}

/// Always play the legal house farthest from the store.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarthestFromStore;

impl MovePolicy for FarthestFromStore {
    fn select(&self, _board: &Board, legal: &[usize], _rng: &mut BoardRng) -> Option<usize> {
        legal.last().copied()
    }
}

/// Play a uniformly random legal house.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMove;

impl MovePolicy for RandomMove {
    fn select(&self, _board: &Board, legal: &[usize], rng: &mut BoardRng) -> Option<usize> {
        rng.choose(legal).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_and_farthest() {
        let board = Board::from_slice(&[0, 1, 0, 3]);
        let legal = [1, 3];
        let mut rng = BoardRng::new(42);

        assert_eq!(NearestToStore.select(&board, &legal, &mut rng), Some(1));
        assert_eq!(FarthestFromStore.select(&board, &legal, &mut rng), Some(3));
    }

    #[test]
    fn test_empty_legal_stops() {
        let board = Board::from_slice(&[0, 2]);
        let mut rng = BoardRng::new(42);

        assert_eq!(NearestToStore.select(&board, &[], &mut rng), None);
        assert_eq!(FarthestFromStore.select(&board, &[], &mut rng), None);
        assert_eq!(RandomMove.select(&board, &[], &mut rng), None);
    }

    #[test]
    fn test_random_picks_legal() {
        let board = Board::from_slice(&[0, 1, 2, 3]);
        let legal = [1, 2, 3];
        let mut rng = BoardRng::new(7);

        for _ in 0..20 {
            let house = RandomMove.select(&board, &legal, &mut rng).unwrap();
            assert!(legal.contains(&house));
        }
    }
}
