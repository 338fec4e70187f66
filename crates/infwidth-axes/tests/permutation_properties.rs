//! Property-based tests for paired-axis permutations
//!
//! These pin down the algebra the kernel record relies on: pair reversal is
//! an involution, and interleaving round-trips with deinterleaving, for any
//! rank and any dimension sizes.

use infwidth_axes::{deinterleave_pairs, interleave_pairs, reverse_pairs, reverse_spatial_pairs};
use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;

/// Array filled with its flat index, so any axis mixup shows up as a
/// content mismatch rather than just a shape mismatch.
fn flat_indexed(dims: &[usize]) -> ArrayD<f64> {
    let len: usize = dims.iter().product();
    ArrayD::from_shape_vec(IxDyn(dims), (0..len).map(|i| i as f64).collect())
        .expect("shape matches element count")
}

/// Batch axes plus interleaved pair sizes: `([n...], [(a, b)...])`.
fn paired_dims() -> impl Strategy<Value = (Vec<usize>, Vec<(usize, usize)>)> {
    (
        prop::collection::vec(1usize..4, 0..3),
        prop::collection::vec((1usize..4, 1usize..4), 0..4),
    )
}

proptest! {
    #[test]
    fn prop_reverse_pairs_is_involution((batch, pairs) in paired_dims()) {
        let mut dims = batch.clone();
        for &(a, b) in &pairs {
            dims.push(a);
            dims.push(b);
        }
        let arr = flat_indexed(&dims);
        let twice = reverse_pairs(
            reverse_pairs(arr.clone(), batch.len()).unwrap(),
            batch.len(),
        )
        .unwrap();
        prop_assert_eq!(twice, arr);
    }

    #[test]
    fn prop_reverse_pairs_reverses_shape_pairwise((batch, pairs) in paired_dims()) {
        let mut dims = batch.clone();
        for &(a, b) in &pairs {
            dims.push(a);
            dims.push(b);
        }
        let rev = reverse_pairs(flat_indexed(&dims), batch.len()).unwrap();

        let mut expected = batch.clone();
        for &(a, b) in pairs.iter().rev() {
            expected.push(a);
            expected.push(b);
        }
        prop_assert_eq!(rev.shape(), expected.as_slice());
    }

    #[test]
    fn prop_interleave_round_trips((batch, pairs) in paired_dims()) {
        let mut dims = batch.clone();
        for &(a, _) in &pairs {
            dims.push(a);
        }
        for &(_, b) in &pairs {
            dims.push(b);
        }
        let blocked = flat_indexed(&dims);
        let paired = interleave_pairs(blocked.clone(), batch.len()).unwrap();
        let back = deinterleave_pairs(paired, batch.len()).unwrap();
        prop_assert_eq!(back, blocked);
    }

    #[test]
    fn prop_spatial_reversal_is_involution(
        batch in prop::collection::vec(1usize..4, 1..3),
        spatial in prop::collection::vec(1usize..4, 0..3),
        channels in 1usize..4,
    ) {
        // Reference shape of one input batch: batch-first, channel-last.
        let mut ref_shape = vec![batch[0]];
        ref_shape.extend_from_slice(&spatial);
        ref_shape.push(channels);

        // Covariance layout: batch axes, then one pair per spatial dim.
        let mut dims = batch.clone();
        for &d in &spatial {
            dims.push(d);
            dims.push(d);
        }
        let arr = flat_indexed(&dims);

        let twice = reverse_spatial_pairs(
            reverse_spatial_pairs(arr.clone(), &ref_shape).unwrap(),
            &ref_shape,
        )
        .unwrap();
        prop_assert_eq!(twice, arr);
    }
}
