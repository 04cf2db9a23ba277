//! # solitaire-mancala
//!
//! A board engine for Tchoukaillon, the solitaire form of Mancala.
//!
//! ## Rules
//!
//! The board is a row of houses numbered by their distance from the store
//! (house 0). Playing house `k` sows its seeds one at a time into houses
//! `k-1, k-2, ...` towards the store. A move is legal only when house `k`
//! holds exactly `k` seeds, so the last seed lands in the store. The game
//! is won when every house is empty.
//!
//! ## Architecture
//!
//! - **Single owner**: `SolitaireMancala` owns one `Board` and mutates it in
//!   place; failures come back as `BoardError` values, never as data.
//!
//! - **Persistent board**: `Board` wraps an `im` vector, so planners clone
//!   it in O(1) and play on the copy instead of snapshotting and restoring.
//!
//! ## Modules
//!
//! - `core`: Board, configuration, errors, snapshots, RNG
//! - `games`: The Tchoukaillon engine
//! - `planner`: Move policies, greedy planner, exhaustive solver
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use solitaire_mancala::SolitaireMancala;
//!
//! let mut game = SolitaireMancala::new();
//! game.set_board(&[0, 1, 2]);
//!
//! let moves = game.plan_moves();
//! assert_eq!(moves.as_slice(), &[1, 2, 1]);
//!
//! for house in moves {
//!     game.apply_move(house as isize)?;
//! }
//! assert!(game.is_game_won());
//! # Ok::<(), solitaire_mancala::BoardError>(())
//! ```

pub mod core;
pub mod games;
pub mod planner;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, BoardError, BoardRng, BoardRngState, BoardSnapshot, SnapshotError,
};

pub use crate::games::tchoukaillon::SolitaireMancala;

pub use crate::planner::{
    FarthestFromStore, MoveList, MovePolicy, NearestToStore, Plan, Planner, PlannerConfig,
    RandomMove, SearchStats, Solver,
};
