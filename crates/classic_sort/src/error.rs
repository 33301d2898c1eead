use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

/// Failures reported instead of reading or writing out of bounds.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// Selection rank outside `1..=len`.
    #[error("rank {rank} is out of range for a sequence of length {len}")]
    RankOutOfRange { rank: usize, len: usize },

    /// Inclusive subrange reaching past the end of the sequence.
    #[error("range [{left}, {right}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },

    /// The comparator is not a strict weak ordering.
    #[error("comparator is not a strict weak ordering: {0}")]
    OrderingViolation(&'static str),
}
