//! Tchoukaillon, the solitaire form of Mancala.
//!
//! - Houses are numbered by their distance from the store (house 0)
//! - A house may be played only when it holds exactly its own number of
//!   seeds, so the last seed sown lands in the store
//! - The game is won when every house is empty

mod game;

pub use game::SolitaireMancala;
