//! Error types for kernel records

use thiserror::Error;

/// Errors that can occur while working with kernel records
#[derive(Error, Debug)]
pub enum Error {
    /// Ordinal outside the marginalisation range
    #[error("unknown marginalisation ordinal {ordinal}, expected 0..=4")]
    UnknownMarginalisation { ordinal: u8 },

    /// Axis permutation error from the pairing utilities
    #[error("axis permutation error: {0}")]
    Axes(#[from] infwidth_axes::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
