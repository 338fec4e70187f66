//! Permutations over paired covariance axes
//!
//! Covariance arrays for architectures with spatial structure carry two axes
//! per spatial dimension, one for each input copy. A cross covariance over
//! height and width is laid out `[n1, n2, h, h', w, w']` once the copies are
//! interleaved. The functions here move whole pairs around without ever
//! splitting one: interleaving converts between the blocked layout produced
//! by an outer product and the paired layout, and reversal flips the order
//! of the pairs themselves.
//!
//! All functions take the array by value and return a permuted handle onto
//! the same data; nothing is copied or mutated in place.

use crate::error::{Error, Result};
use log::trace;
use ndarray::{ArrayD, IxDyn};

/// Number of axis pairs after `start_axis`.
fn pair_count(ndim: usize, start_axis: usize) -> Result<usize> {
    let trailing = ndim
        .checked_sub(start_axis)
        .ok_or(Error::StartAxisOutOfBounds { ndim, start_axis })?;
    if trailing % 2 != 0 {
        return Err(Error::OddAxisCount { ndim, start_axis });
    }
    Ok(trailing / 2)
}

/// Converts a blocked layout `[.., a1, .., ap, b1, .., bp]` into the paired
/// layout `[.., a1, b1, .., ap, bp]`.
///
/// Axes before `start_axis` are left untouched. Fails if the trailing axis
/// count is odd.
///
/// # Examples
///
/// ```
/// use infwidth_axes::interleave_pairs;
/// use ndarray::{ArrayD, IxDyn};
///
/// let outer = ArrayD::<f64>::zeros(IxDyn(&[3, 5, 4, 6]));
/// let paired = interleave_pairs(outer, 0).unwrap();
/// assert_eq!(paired.shape(), &[3, 4, 5, 6]);
/// ```
pub fn interleave_pairs<A>(arr: ArrayD<A>, start_axis: usize) -> Result<ArrayD<A>> {
    let ndim = arr.ndim();
    let pairs = pair_count(ndim, start_axis)?;
    let mut perm: Vec<usize> = (0..start_axis).collect();
    for i in 0..pairs {
        perm.push(start_axis + i);
        perm.push(start_axis + pairs + i);
    }
    Ok(arr.permuted_axes(IxDyn(&perm)))
}

/// Converts the paired layout `[.., a1, b1, .., ap, bp]` back into the
/// blocked layout `[.., a1, .., ap, b1, .., bp]`.
///
/// Exact inverse of [`interleave_pairs`].
pub fn deinterleave_pairs<A>(arr: ArrayD<A>, start_axis: usize) -> Result<ArrayD<A>> {
    let ndim = arr.ndim();
    let pairs = pair_count(ndim, start_axis)?;
    let mut perm: Vec<usize> = (0..start_axis).collect();
    for i in 0..pairs {
        perm.push(start_axis + 2 * i);
    }
    for i in 0..pairs {
        perm.push(start_axis + 2 * i + 1);
    }
    Ok(arr.permuted_axes(IxDyn(&perm)))
}

/// Reverses the relative order of the axis pairs after `start_axis`,
/// keeping each pair's internal order: `[.., a1, b1, a2, b2]` becomes
/// `[.., a2, b2, a1, b1]`.
///
/// Applying the permutation twice restores the original axis order.
pub fn reverse_pairs<A>(arr: ArrayD<A>, start_axis: usize) -> Result<ArrayD<A>> {
    let ndim = arr.ndim();
    let pairs = pair_count(ndim, start_axis)?;
    let mut perm: Vec<usize> = (0..start_axis).collect();
    for i in (0..pairs).rev() {
        perm.push(start_axis + 2 * i);
        perm.push(start_axis + 2 * i + 1);
    }
    trace!("reversing {pairs} axis pairs after axis {start_axis}");
    Ok(arr.permuted_axes(IxDyn(&perm)))
}

/// Reverses the spatial axis pairs of a covariance array, keyed by the shape
/// of the underlying random variable.
///
/// `ref_shape` is the batch-first, channel-last shape of one input batch, so
/// its spatial-dimension count is `ref_shape.len() - 2`. The covariance
/// array is assumed to carry its batch axes first, followed by one
/// interleaved axis pair per spatial dimension.
///
/// Arrays of rank two or less, and reference shapes with no spatial
/// dimensions, pass through unchanged: there are no pairs to reverse. Fails
/// when the array's rank is too small for the implied pair count.
pub fn reverse_spatial_pairs<A>(arr: ArrayD<A>, ref_shape: &[usize]) -> Result<ArrayD<A>> {
    let spatial_dims = ref_shape.len().saturating_sub(2);
    if spatial_dims == 0 || arr.ndim() <= 2 {
        trace!(
            "no spatial axis pairs to reverse (rank {}, {} spatial dims)",
            arr.ndim(),
            spatial_dims
        );
        return Ok(arr);
    }
    let batch_axes = arr.ndim().checked_sub(2 * spatial_dims).ok_or(Error::RankMismatch {
        ndim: arr.ndim(),
        spatial_dims,
    })?;
    reverse_pairs(arr, batch_axes)
}
