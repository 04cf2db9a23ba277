//! Core types: board, configuration, errors, snapshots, RNG.
//!
//! Everything here is independent of how moves are chosen. The engine in
//! `games::tchoukaillon` and the planners are built on these types.

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, Result, SnapshotError};
pub use rng::{BoardRng, BoardRngState};
pub use snapshot::BoardSnapshot;
