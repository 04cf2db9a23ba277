//! Error types for board operations.
//!
//! Every indexed access into the board reports failure through
//! [`BoardError`]. Illegal moves are not errors: legality is a boolean query.

/// Errors raised by board and engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A house index fell outside `[0, len(board))` after resolution.
    ///
    /// `magnitude` is the absolute value of the index the caller supplied,
    /// before any negative-index resolution.
    #[error(
        "abs(house_num) should be less len(board).\n\
         len(board) == {board_len}\n\
         abs(house_num) == {magnitude}"
    )]
    IndexOutOfRange {
        /// Length of the board at the time of the call.
        board_len: usize,
        /// `abs(house_num)` as supplied by the caller.
        magnitude: usize,
    },

    /// Sowing would push a seed count past `i64::MAX`.
    ///
    /// Raised before any seed moves, so the board is left as it was.
    #[error("sowing house {house} would overflow the seed count at index {index}")]
    SeedOverflow {
        /// Resolved house being sown.
        house: usize,
        /// First index that cannot take another seed.
        index: usize,
    },
}

impl BoardError {
    /// Build an out-of-range error for a caller-supplied house number.
    #[must_use]
    pub fn out_of_range(board_len: usize, house_num: isize) -> Self {
        BoardError::IndexOutOfRange {
            board_len,
            magnitude: house_num.unsigned_abs(),
        }
    }
}

/// Result alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised while encoding or decoding a binary board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be encoded.
    #[error("failed to encode board snapshot: {0}")]
    Encode(#[source] bincode::Error),

    /// The bytes were not a valid encoded snapshot.
    #[error("failed to decode board snapshot: {0}")]
    Decode(#[source] bincode::Error),
}
