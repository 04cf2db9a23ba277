//! Game bindings for Python.

use pyo3::prelude::*;

use crate::games::tchoukaillon::SolitaireMancala;
use crate::planner::Solver;

use super::py_core::{PyBoardConfig, PyBoardSnapshot};

/// Python wrapper for SolitaireMancala.
///
/// Method names follow the engine so a GUI can drive either.
#[pyclass(name = "SolitaireMancala")]
#[derive(Clone)]
pub struct PySolitaireMancala {
    game: SolitaireMancala,
}

#[pymethods]
impl PySolitaireMancala {
    /// Create a game with an empty store and no houses.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyRef<'_, PyBoardConfig>>) -> Self {
        let game = match config {
            Some(config) => SolitaireMancala::from_config(&config.0),
            None => SolitaireMancala::new(),
        };
        Self { game }
    }

    /// Replace the board (index 0 = store).
    fn set_board(&mut self, configuration: Vec<i64>) {
        self.game.set_board(&configuration);
    }

    /// Seeds in a house. Raises IndexError when out of range.
    fn get_num_seeds(&self, house_num: isize) -> PyResult<i64> {
        Ok(self.game.get_num_seeds(house_num)?)
    }

    fn is_game_won(&self) -> bool {
        self.game.is_game_won()
    }

    /// Raises IndexError when the resolved house is out of range.
    fn is_legal_move(&self, house_num: isize) -> PyResult<bool> {
        Ok(self.game.is_legal_move(house_num)?)
    }

    /// Sow a house and return the updated board.
    fn apply_move(&mut self, house_num: isize) -> PyResult<Vec<i64>> {
        Ok(self.game.apply_move(house_num)?.to_vec())
    }

    /// Nearest legal house, or 0 when none.
    fn choose_move(&self) -> usize {
        self.game.choose_move()
    }

    /// Greedy move sequence from the current board.
    fn plan_moves(&self) -> Vec<usize> {
        self.game.plan_moves().to_vec()
    }

    /// Winning move sequence found by exhaustive search, if any.
    fn solve(&self) -> Option<Vec<usize>> {
        Solver::default()
            .solve(self.game.board())
            .map(|moves| moves.to_vec())
    }

    /// Board as a list, store first.
    #[getter]
    fn board(&self) -> Vec<i64> {
        self.game.board().to_vec()
    }

    fn snapshot(&self) -> PyBoardSnapshot {
        PyBoardSnapshot(self.game.snapshot())
    }

    fn restore(&mut self, snapshot: &PyBoardSnapshot) {
        self.game.restore(&snapshot.0);
    }

    /// Copy the game for exploratory play.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.game.to_string()
    }

    fn __repr__(&self) -> String {
        format!("SolitaireMancala({})", self.game)
    }
}
