//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyOverflowError, PyValueError};
use pyo3::prelude::*;

use crate::core::{BoardConfig, BoardError, BoardRng, BoardSnapshot, SnapshotError};

impl From<BoardError> for PyErr {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            BoardError::SeedOverflow { .. } => PyOverflowError::new_err(err.to_string()),
        }
    }
}

impl From<SnapshotError> for PyErr {
    fn from(err: SnapshotError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for BoardConfig.
#[pyclass(name = "BoardConfig")]
#[derive(Clone, Debug)]
pub struct PyBoardConfig(pub BoardConfig);

#[pymethods]
impl PyBoardConfig {
    /// Create a config from a full sequence (index 0 = store).
    #[new]
    #[pyo3(signature = (sequence = vec![0]))]
    fn new(sequence: Vec<i64>) -> Self {
        Self(BoardConfig::from_sequence(&sequence))
    }

    /// The winnable position holding `total_seeds` seeds.
    #[staticmethod]
    fn winnable(total_seeds: u32) -> Self {
        Self(BoardConfig::winnable(total_seeds))
    }

    /// Random houses holding 0..=max_seeds each.
    #[staticmethod]
    #[pyo3(signature = (house_count, max_seeds, seed = 42))]
    fn random(house_count: usize, max_seeds: i64, seed: u64) -> Self {
        let mut rng = BoardRng::new(seed);
        Self(BoardConfig::random(house_count, max_seeds, &mut rng))
    }

    /// Full sequence with the store first.
    fn to_sequence(&self) -> Vec<i64> {
        self.0.to_sequence()
    }

    #[getter]
    fn house_count(&self) -> usize {
        self.0.house_count()
    }

    #[getter]
    fn total_seeds(&self) -> i128 {
        self.0.total_seeds()
    }

    fn __repr__(&self) -> String {
        format!("BoardConfig({:?})", self.0.to_sequence())
    }
}

/// Python wrapper for BoardSnapshot.
#[pyclass(name = "BoardSnapshot")]
#[derive(Clone, Debug)]
pub struct PyBoardSnapshot(pub BoardSnapshot);

#[pymethods]
impl PyBoardSnapshot {
    /// Decode bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        Ok(Self(BoardSnapshot::from_bytes(&bytes)?))
    }

    /// Encode as bytes.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.0.to_bytes()?)
    }

    #[getter]
    fn seeds(&self) -> Vec<i64> {
        self.0.seeds.clone()
    }

    fn __repr__(&self) -> String {
        format!("BoardSnapshot({:?})", self.0.seeds)
    }
}
