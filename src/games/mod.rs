//! Game implementations built on the core board.

pub mod tchoukaillon;
