//! Data structures for infinite-width network kernel computation
//!
//! This crate re-exports the workspace members:
//!
//! - [`infwidth_kernel`] (here as the crate root): the [`Kernel`] record
//!   carrying NNGP and NTK covariance data between layer transformations,
//!   and the [`Marginalisation`] levels classifying its axis layouts.
//! - [`infwidth_axes`] (here as [`axes`]): permutations over paired
//!   covariance axes, used to reverse the spatial-dimension order of a
//!   kernel record.
//!
//! # Example
//!
//! ```rust
//! use infwidth::{Kernel, Marginalisation};
//! use ndarray::{ArrayD, IxDyn};
//!
//! let var1 = ArrayD::<f64>::zeros(IxDyn(&[3]));
//! let nngp = ArrayD::<f64>::zeros(IxDyn(&[3, 3]));
//!
//! let kernel = Kernel::new(
//!     var1,
//!     nngp.clone(),
//!     None,
//!     Some(nngp),
//!     true,
//!     false,
//!     Marginalisation::OverAll,
//!     Marginalisation::OverAll,
//!     vec![3, 8],
//!     vec![3, 8],
//!     true,
//!     true,
//!     None,
//!     None,
//! );
//!
//! // Ordinals are stored, not enum values.
//! assert_eq!(kernel.marginal, 0);
//!
//! // "Mutation" always yields a new record.
//! let after_nonlinearity = kernel.with().is_gaussian(false).apply();
//! assert!(!after_nonlinearity.is_gaussian);
//! assert!(kernel.is_gaussian);
//! ```

pub use infwidth_axes as axes;
pub use infwidth_kernel::{Error, Kernel, KernelUpdate, Marginalisation, Result};
