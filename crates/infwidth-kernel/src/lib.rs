//! Immutable kernel records for infinite-width covariance propagation
//!
//! A kernel-computation pipeline pushes a [`Kernel`] record through one
//! transformation per layer: each consumes the previous record and emits a
//! fresh one carrying the NNGP and NTK covariance arrays, the
//! [`Marginalisation`] ordinals describing their axis layouts, and the
//! bookkeeping flags the downstream transformations key off.
//!
//! The record is a passive value: it does not compute kernels, and it
//! validates nothing beyond coercing marginalisation levels to their
//! ordinals. Its only derived operation of substance, [`Kernel::reverse`],
//! delegates the actual axis permutation to [`infwidth_axes`].
//!
//! # Example
//!
//! ```rust
//! use infwidth_kernel::{Kernel, Marginalisation};
//! use ndarray::{ArrayD, IxDyn};
//!
//! // Full spatial covariance for a batch of 2 over 3x4 inputs.
//! let var1 = ArrayD::<f64>::zeros(IxDyn(&[2, 3, 3, 4, 4]));
//! let nngp = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 3, 3, 4, 4]));
//! let shape1 = vec![2, 3, 4, 1];
//!
//! let kernel = Kernel::new(
//!     var1,
//!     nngp.clone(),
//!     None,
//!     Some(nngp),
//!     true,
//!     false,
//!     Marginalisation::OverPoints,
//!     Marginalisation::No,
//!     shape1.clone(),
//!     shape1,
//!     true,
//!     false,
//!     None,
//!     None,
//! );
//!
//! let reversed = kernel.reverse().unwrap();
//! assert!(reversed.is_reversed);
//! assert_eq!(reversed.nngp.shape(), &[2, 2, 4, 4, 3, 3]);
//! assert_eq!(reversed.reverse().unwrap(), kernel);
//! ```

pub mod error;
pub mod kernel;
pub mod marginalisation;

pub use error::{Error, Result};
pub use kernel::{Kernel, KernelUpdate};
pub use marginalisation::Marginalisation;
