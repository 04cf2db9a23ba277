//! Board representation and the sowing rules.
//!
//! A board is a fixed-length sequence of seed counts. Index 0 is the store,
//! index `k >= 1` is house `k`, sitting `k` steps away from the store.
//!
//! ## Index conventions
//!
//! House numbers arrive as `isize`. Operations differ in how they treat
//! negative numbers:
//!
//! - [`Board::get_num_seeds`] indexes directly; any negative number is out
//!   of range.
//! - [`Board::is_legal_move`] and [`Board::sow`] resolve a negative number
//!   `-a` to `len - a`, counting from the far end of the board.
//!
//! Uses an `im` persistent vector so planners can clone boards in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{BoardError, Result};
use super::snapshot::BoardSnapshot;

/// Seed counts indexed by house number, store at index 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    seeds: Vector<i64>,
}

impl Default for Board {
    fn default() -> Self {
        Self::store_only()
    }
}

impl Board {
    /// A board with an empty store and no houses: `[0]`.
    #[must_use]
    pub fn store_only() -> Self {
        Self {
            seeds: Vector::unit(0),
        }
    }

    /// Copy a configuration index-for-index (index 0 is the store).
    ///
    /// Seed counts are not validated.
    #[must_use]
    pub fn from_slice(configuration: &[i64]) -> Self {
        Self {
            seeds: configuration.iter().copied().collect(),
        }
    }

    /// Number of positions, store included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// True for a degenerate board without even a store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Number of houses, store excluded.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Seeds in the store, or 0 on an empty board.
    #[must_use]
    pub fn store(&self) -> i64 {
        self.seeds.get(0).copied().unwrap_or(0)
    }

    /// Seeds at a non-negative index, if it exists.
    #[must_use]
    pub fn seeds_at(&self, index: usize) -> Option<i64> {
        self.seeds.get(index).copied()
    }

    /// Seeds in a house, indexed directly.
    ///
    /// Negative house numbers are not resolved and always fail.
    pub fn get_num_seeds(&self, house_num: isize) -> Result<i64> {
        usize::try_from(house_num)
            .ok()
            .and_then(|index| self.seeds_at(index))
            .ok_or_else(|| BoardError::out_of_range(self.len(), house_num))
    }

    /// Resolve a house number to an index in `[0, len)`.
    ///
    /// Negative numbers count back from the end: `-a` becomes `len - a`.
    pub fn resolve_house(&self, house_num: isize) -> Result<usize> {
        let len = self.len();
        let resolved = if house_num < 0 {
            len.checked_sub(house_num.unsigned_abs())
        } else {
            Some(house_num.unsigned_abs())
        };

        resolved
            .filter(|&index| index < len)
            .ok_or_else(|| BoardError::out_of_range(len, house_num))
    }

    /// True when every house (index >= 1) is empty. The store is ignored.
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.seeds.iter().skip(1).all(|&seeds| seeds == 0)
    }

    /// A house is playable only when it holds exactly as many seeds as its
    /// distance from the store, so the last seed lands in the store.
    ///
    /// The store itself is never playable.
    pub fn is_legal_move(&self, house_num: isize) -> Result<bool> {
        let house = self.resolve_house(house_num)?;
        if house == 0 {
            return Ok(false);
        }
        Ok(self.seeds[house] == house as i64)
    }

    /// Sow seeds from a house one at a time towards the store.
    ///
    /// Stops when the house runs dry or the store has received a seed.
    /// Legality is not checked; a house with no seeds is a no-op. The index
    /// and every cell that will receive a seed are validated before anything
    /// is touched, so a failed call leaves the board unchanged.
    ///
    /// Returns the number of seeds sown.
    ///
    /// # Errors
    ///
    /// [`BoardError::IndexOutOfRange`] if `house_num` does not resolve, and
    /// [`BoardError::SeedOverflow`] if a receiving cell already holds
    /// `i64::MAX`.
    pub fn sow(&mut self, house_num: isize) -> Result<usize> {
        let house = self.resolve_house(house_num)?;
        let reach = usize::try_from(self.seeds[house].max(0)).map_or(house, |n| n.min(house));

        for index in (house - reach..house).rev() {
            if self.seeds[index].checked_add(1).is_none() {
                return Err(BoardError::SeedOverflow { house, index });
            }
        }

        let mut sown = 0;

        for target in (0..house).rev() {
            if self.seeds[house] <= 0 {
                break;
            }
            self.seeds[target] += 1;
            self.seeds[house] -= 1;
            sown += 1;
            trace!(house, target, "sowed seed");
        }

        Ok(sown)
    }

    /// Legal houses in increasing distance from the store.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.seeds
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(house, &seeds)| seeds == house as i64)
            .map(|(house, _)| house)
    }

    /// The legal house closest to the store.
    #[must_use]
    pub fn nearest_legal_move(&self) -> Option<usize> {
        self.legal_moves().next()
    }

    /// Sum of all seeds, store included.
    ///
    /// Widened to `i128` so boards holding extreme counts cannot overflow.
    #[must_use]
    pub fn total_seeds(&self) -> i128 {
        self.seeds.iter().map(|&s| i128::from(s)).sum()
    }

    /// Iterate over seed counts from the store outwards.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.seeds.iter().copied()
    }

    /// Copy the seed counts into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Capture the board for later restore.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            seeds: self.to_vec(),
        }
    }
}

impl From<&BoardSnapshot> for Board {
    fn from(snapshot: &BoardSnapshot) -> Self {
        Self::from_slice(&snapshot.seeds)
    }
}

/// Renders the farthest house first and the store last, e.g. `[0, 5, 3, 1, 1, 0, 0]`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, seeds) in self.seeds.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", seeds)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_slice(&[0, 0, 1, 1, 3, 5, 0])
    }

    #[test]
    fn test_store_only() {
        let board = Board::store_only();
        assert_eq!(board.to_vec(), vec![0]);
        assert_eq!(board.house_count(), 0);
        assert!(board.is_game_won());
        assert_eq!(format!("{}", board), "[0]");
    }

    #[test]
    fn test_display_reverses() {
        assert_eq!(format!("{}", sample()), "[0, 5, 3, 1, 1, 0, 0]");
        assert_eq!(format!("{}", Board::from_slice(&[])), "[]");
    }

    #[test]
    fn test_get_num_seeds() {
        let board = sample();
        assert_eq!(board.get_num_seeds(1), Ok(0));
        assert_eq!(board.get_num_seeds(3), Ok(1));
        assert_eq!(board.get_num_seeds(5), Ok(5));
        assert_eq!(
            board.get_num_seeds(99),
            Err(BoardError::IndexOutOfRange {
                board_len: 7,
                magnitude: 99
            })
        );
        assert_eq!(
            board.get_num_seeds(-3),
            Err(BoardError::IndexOutOfRange {
                board_len: 7,
                magnitude: 3
            })
        );
    }

    #[test]
    fn test_resolve_house() {
        let board = sample();
        assert_eq!(board.resolve_house(0), Ok(0));
        assert_eq!(board.resolve_house(6), Ok(6));
        assert_eq!(board.resolve_house(-1), Ok(6));
        assert_eq!(board.resolve_house(-7), Ok(0));
        assert!(board.resolve_house(7).is_err());
        assert_eq!(
            board.resolve_house(-8),
            Err(BoardError::IndexOutOfRange {
                board_len: 7,
                magnitude: 8
            })
        );
        assert!(board.resolve_house(isize::MIN).is_err());
    }

    #[test]
    fn test_is_legal_move() {
        let board = sample();
        assert_eq!(board.is_legal_move(2), Ok(false));
        assert_eq!(board.is_legal_move(5), Ok(true));
        assert_eq!(board.is_legal_move(4), Ok(false));
        assert_eq!(board.is_legal_move(0), Ok(false));
        // -2 resolves to house 5
        assert_eq!(board.is_legal_move(-2), Ok(true));
        assert!(board.is_legal_move(7).is_err());
    }

    #[test]
    fn test_is_legal_move_empty_board() {
        let board = Board::from_slice(&[]);
        assert_eq!(
            board.is_legal_move(0),
            Err(BoardError::IndexOutOfRange {
                board_len: 0,
                magnitude: 0
            })
        );
    }

    #[test]
    fn test_sow_legal_move() {
        let mut board = sample();
        assert_eq!(board.sow(5), Ok(5));
        assert_eq!(board.to_vec(), vec![1, 1, 2, 2, 4, 0, 0]);
    }

    #[test]
    fn test_sow_stops_at_store() {
        let mut board = Board::from_slice(&[0, 0, 5]);
        assert_eq!(board.sow(2), Ok(2));
        assert_eq!(board.to_vec(), vec![1, 1, 3]);
    }

    #[test]
    fn test_sow_empty_house_is_noop() {
        let mut board = sample();
        assert_eq!(board.sow(6), Ok(0));
        assert_eq!(board, sample());
    }

    #[test]
    fn test_sow_negative_house() {
        let mut board = sample();
        // -3 resolves to house 4
        assert_eq!(board.sow(-3), Ok(3));
        assert_eq!(board.to_vec(), vec![0, 1, 2, 2, 0, 5, 0]);
    }

    #[test]
    fn test_sow_out_of_range_leaves_board() {
        let mut board = sample();
        assert!(board.sow(10).is_err());
        assert_eq!(board, sample());

        let mut empty = Board::from_slice(&[]);
        assert!(empty.sow(0).is_err());
    }

    #[test]
    fn test_sow_overflow_leaves_board() {
        let mut board = Board::from_slice(&[0, i64::MAX, 1]);
        assert_eq!(
            board.sow(2),
            Err(BoardError::SeedOverflow { house: 2, index: 1 })
        );
        assert_eq!(board.to_vec(), vec![0, i64::MAX, 1]);

        // Cells past the last seed are never reached, so they may be full.
        let mut board = Board::from_slice(&[i64::MAX, 0, 1]);
        assert_eq!(board.sow(2), Ok(1));
        assert_eq!(board.to_vec(), vec![i64::MAX, 1, 0]);
    }

    #[test]
    fn test_sow_store_is_noop() {
        let mut board = Board::from_slice(&[4, 1]);
        assert_eq!(board.sow(0), Ok(0));
        assert_eq!(board.to_vec(), vec![4, 1]);
    }

    #[test]
    fn test_legal_moves() {
        let board = Board::from_slice(&[0, 1, 0, 3, 2, 5]);
        assert_eq!(board.legal_moves().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(board.nearest_legal_move(), Some(1));
        assert_eq!(sample().nearest_legal_move(), Some(5));
        assert_eq!(Board::from_slice(&[0, 2, 1]).nearest_legal_move(), None);
    }

    #[test]
    fn test_is_game_won_ignores_store() {
        assert!(Board::from_slice(&[9, 0, 0]).is_game_won());
        assert!(!Board::from_slice(&[0, 0, 1]).is_game_won());
        assert!(!Board::from_slice(&[0, -1]).is_game_won());
    }

    #[test]
    fn test_total_seeds() {
        assert_eq!(sample().total_seeds(), 10);
        assert_eq!(Board::from_slice(&[2, -1, 3]).total_seeds(), 4);

        let full = Board::from_slice(&[i64::MAX, i64::MAX, 1]);
        assert_eq!(full.total_seeds(), 2 * i128::from(i64::MAX) + 1);
    }
}
