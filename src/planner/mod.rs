//! Move planning.
//!
//! ## Components
//!
//! - `MovePolicy`: picks a move from a board's legal moves
//! - `Planner`: plays a policy to completion on a scratch copy of a board
//! - `Solver`: exhaustive search for a winning sequence, with a cache of
//!   dead positions
//! - `PlannerConfig`, `SearchStats`: limits and diagnostics
//!
//! ## Usage
//!
//! ```
//! use solitaire_mancala::core::Board;
//! use solitaire_mancala::planner::{Planner, PlannerConfig, Solver};
//!
//! let board = Board::from_slice(&[0, 1, 2]);
//!
//! let plan = Planner::new(PlannerConfig::default()).plan(&board);
//! assert_eq!(plan.moves.as_slice(), &[1, 2, 1]);
//! assert!(plan.is_won());
//!
//! let solution = Solver::default().solve(&board);
//! assert_eq!(solution.as_deref(), Some(&[1, 2, 1][..]));
//! ```

use smallvec::SmallVec;

pub mod config;
pub mod policy;
pub mod search;
pub mod solver;
pub mod stats;

pub use config::PlannerConfig;
pub use policy::{FarthestFromStore, MovePolicy, NearestToStore, RandomMove};
pub use search::{Plan, Planner};
pub use solver::Solver;
pub use stats::SearchStats;

/// Ordered list of houses played.
pub type MoveList = SmallVec<[usize; 16]>;
