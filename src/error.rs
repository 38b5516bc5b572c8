use thiserror::Error;

/// Errors that can occur during selection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The requested rank falls outside `[1, size of range]`.
    #[error("rank {rank} is out of range for a window of {size} element(s)")]
    RankOutOfRange { rank: usize, size: usize },
}

impl SelectError {
    /// Creates a [`SelectError::RankOutOfRange`] for rank `rank` against a
    /// window holding `size` elements.
    pub fn rank_out_of_range(rank: usize, size: usize) -> Self {
        Self::RankOutOfRange { rank, size }
    }
}

/// Convenient result alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;
