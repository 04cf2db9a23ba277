//! Solitaire Mancala engine.

use tracing::debug;

use crate::core::{Board, BoardConfig, BoardSnapshot, Result};
use crate::planner::{MoveList, Planner};

/// Single-player Tchoukaillon game.
///
/// Owns one board. Starts as `[0]` (store only) until a configuration is
/// loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolitaireMancala {
    board: Board,
}

impl SolitaireMancala {
    /// A game with an empty store and no houses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game starting from `config`.
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut game = Self::new();
        game.load_config(config);
        game
    }

    /// Replace the board with a copy of `configuration` (index 0 = store).
    ///
    /// Seed counts are taken as given.
    pub fn set_board(&mut self, configuration: &[i64]) {
        self.board = Board::from_slice(configuration);
        debug!(len = self.board.len(), "board set");
    }

    /// Replace the board with a configured starting position.
    pub fn load_config(&mut self, config: &BoardConfig) {
        self.set_board(&config.to_sequence());
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seeds in a house. Negative house numbers are rejected, not resolved.
    pub fn get_num_seeds(&self, house_num: isize) -> Result<i64> {
        self.board.get_num_seeds(house_num)
    }

    /// True when every house except the store is empty.
    pub fn is_game_won(&self) -> bool {
        self.board.is_game_won()
    }

    /// True when the house holds exactly as many seeds as its number.
    ///
    /// Negative house numbers count back from the far end of the board.
    pub fn is_legal_move(&self, house_num: isize) -> Result<bool> {
        self.board.is_legal_move(house_num)
    }

    /// Sow every seed of a house towards the store.
    ///
    /// Legality is not checked: gate with [`is_legal_move`](Self::is_legal_move).
    /// Negative house numbers count back from the far end. Returns the
    /// updated board.
    pub fn apply_move(&mut self, house_num: isize) -> Result<&Board> {
        let sown = self.board.sow(house_num)?;
        debug!(house_num, sown, store = self.board.store(), "applied move");
        Ok(&self.board)
    }

    /// The legal house closest to the store, or 0 when no move is legal.
    pub fn choose_move(&self) -> usize {
        self.board.nearest_legal_move().unwrap_or(0)
    }

    /// Every move the nearest-to-store strategy plays from here, in order.
    ///
    /// Runs on a copy; the game's board is unchanged.
    pub fn plan_moves(&self) -> MoveList {
        Planner::default().plan(&self.board).moves
    }

    /// Capture the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Replace the board with a captured one.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.board = Board::from(snapshot);
    }
}

impl std::fmt::Display for SolitaireMancala {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
