//! Error types for paired-axis permutations

use thiserror::Error;

/// Errors raised when an array's rank does not admit the requested pairing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The axes after `start_axis` cannot be grouped into pairs
    #[error("cannot pair axes of a rank-{ndim} array starting at axis {start_axis}: trailing axis count is odd")]
    OddAxisCount { ndim: usize, start_axis: usize },

    /// `start_axis` lies beyond the array's last axis
    #[error("start axis {start_axis} is out of bounds for a rank-{ndim} array")]
    StartAxisOutOfBounds { ndim: usize, start_axis: usize },

    /// The array is too small for the number of spatial axis pairs implied
    /// by the reference shape
    #[error("rank-{ndim} array cannot hold {spatial_dims} spatial axis pairs")]
    RankMismatch { ndim: usize, spatial_dims: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
