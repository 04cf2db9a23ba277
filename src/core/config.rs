//! Board configuration.
//!
//! A `BoardConfig` describes a starting position: seeds in the store and in
//! each house, nearest house first. Engines load it with
//! `SolitaireMancala::from_config` or `set_board(&config.to_sequence())`.
//!
//! Besides hand-built positions, configs can be generated:
//! - [`BoardConfig::winnable`]: the unique position with a given number of
//!   seeds that can be cleared completely
//! - [`BoardConfig::random`]: arbitrary positions from a seeded RNG

use serde::{Deserialize, Serialize};

use super::rng::BoardRng;

/// Starting position for a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Seeds already in the store.
    pub store: i64,

    /// Seeds per house, house 1 first.
    pub houses: Vec<i64>,
}

impl BoardConfig {
    /// An empty store and no houses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a full sequence (index 0 = store) into a config.
    ///
    /// An empty sequence yields an empty store.
    pub fn from_sequence(sequence: &[i64]) -> Self {
        match sequence.split_first() {
            Some((&store, houses)) => Self {
                store,
                houses: houses.to_vec(),
            },
            None => Self::default(),
        }
    }

    /// Set the store's seed count.
    #[must_use]
    pub fn with_store(mut self, seeds: i64) -> Self {
        self.store = seeds;
        self
    }

    /// Append the next house, one step farther from the store.
    #[must_use]
    pub fn with_house(mut self, seeds: i64) -> Self {
        self.houses.push(seeds);
        self
    }

    /// Append several houses in order.
    #[must_use]
    pub fn with_houses(mut self, seeds: impl IntoIterator<Item = i64>) -> Self {
        self.houses.extend(seeds);
        self
    }

    /// Number of houses, store excluded.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    /// Total seeds, store included.
    #[must_use]
    pub fn total_seeds(&self) -> i128 {
        i128::from(self.store) + self.houses.iter().map(|&s| i128::from(s)).sum::<i128>()
    }

    /// Full sequence with the store at index 0.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<i64> {
        std::iter::once(self.store)
            .chain(self.houses.iter().copied())
            .collect()
    }

    /// The position holding `total_seeds` seeds in its houses that the
    /// nearest-to-store strategy clears completely.
    ///
    /// Built backwards from a full store: each step takes the lowest empty
    /// house `k`, removes one seed from every index below it and places `k`
    /// seeds in house `k`. Every house below `k` is non-empty and the store
    /// still holds a seed per remaining step, so counts never go negative.
    pub fn winnable(total_seeds: u32) -> Self {
        let mut board = vec![i64::from(total_seeds)];

        for _ in 0..total_seeds {
            let target = (1..board.len())
                .find(|&house| board[house] == 0)
                .unwrap_or(board.len());
            if target == board.len() {
                board.push(0);
            }
            for seeds in &mut board[..target] {
                *seeds -= 1;
            }
            board[target] = target as i64;
        }

        Self::from_sequence(&board)
    }

    /// Random houses holding `0..=max_seeds` each, with an empty store.
    pub fn random(house_count: usize, max_seeds: i64, rng: &mut BoardRng) -> Self {
        let max_seeds = max_seeds.max(0);
        Self {
            store: 0,
            houses: (0..house_count).map(|_| rng.gen_seeds(0..=max_seeds)).collect(),
        }
    }
}
