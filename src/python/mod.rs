//! Python bindings for the Solitaire Mancala engine.
//!
//! Exposes the engine to Python front ends such as a board GUI.
//!
//! # Quick Start
//!
//! ```python
//! import solitaire_mancala as sm
//!
//! game = sm.SolitaireMancala()
//! game.set_board([0, 0, 1, 1, 3, 5, 0])
//! print(game)                 # [0, 5, 3, 1, 1, 0, 0]
//!
//! for house in game.plan_moves():
//!     game.apply_move(house)
//! assert game.is_game_won()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// solitaire_mancala: Tchoukaillon board engine.
#[pymodule]
fn solitaire_mancala(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardConfig>()?;
    m.add_class::<PyBoardSnapshot>()?;
    m.add_class::<PySolitaireMancala>()?;

    Ok(())
}
