//! Paired-axis permutations for covariance arrays
//!
//! Covariance arrays of convolutional architectures carry two axes per
//! spatial dimension, one for each input copy. This crate owns the
//! permutations that treat such a pair as a unit: interleaving between the
//! blocked layout of an outer product and the paired layout, and reversing
//! the order of the pairs while keeping batch axes and pair-internal order
//! fixed.
//!
//! # Example
//!
//! ```rust
//! use infwidth_axes::reverse_spatial_pairs;
//! use ndarray::{ArrayD, IxDyn};
//!
//! // A cross covariance over a batch of 2 and 3x4 spatial inputs,
//! // laid out [n1, n2, h, h', w, w'].
//! let nngp = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 3, 3, 4, 4]));
//!
//! // The reference shape is batch-first, channel-last.
//! let reversed = reverse_spatial_pairs(nngp, &[2, 3, 4, 1]).unwrap();
//! assert_eq!(reversed.shape(), &[2, 2, 4, 4, 3, 3]);
//! ```

pub mod error;
pub mod pairing;

pub use error::{Error, Result};
pub use pairing::{deinterleave_pairs, interleave_pairs, reverse_pairs, reverse_spatial_pairs};
