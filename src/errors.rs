use thiserror::Error;


/// Errors raised by [`FixedArray`](crate::FixedArray) operations.
///
/// Every variant is a contract violation reported at the point it happens;
/// nothing is clamped or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedArrayError {
    /// Storage for the requested capacity could not be reserved.
    #[error("invalid size: cannot allocate {requested} slots")]
    InvalidSize { requested: usize },

    /// Index outside `0..capacity`.
    #[error("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// A malformed parameter, such as a zero chunk size.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The secure random source failed to produce entropy.
    #[error("random source failure: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, FixedArrayError>;

impl FixedArrayError {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfRange { index, capacity }
    }
}
