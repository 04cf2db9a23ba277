//! Serializable board snapshots for checkpointing.
//!
//! A snapshot is a plain copy of the seed counts. It round-trips through
//! serde formats and through a compact `bincode` encoding.

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;

/// Captured board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Seed counts, store first.
    pub seeds: Vec<i64>,
}

impl BoardSnapshot {
    /// Encode with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by [`BoardSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
