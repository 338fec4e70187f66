//! The kernel record threaded through layer transformations

use infwidth_axes::reverse_spatial_pairs;
use ndarray::ArrayD;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::marginalisation::Marginalisation;

/// Covariance data propagated through a kernel-computation pipeline.
///
/// Each layer transformation consumes the previous layer's record and emits
/// a fresh one; a record is never modified after construction. Replacement
/// goes through [`Kernel::with`], which clones every field that is not
/// explicitly overridden.
///
/// The axis layout of the arrays is described by the `marginal` and `cross`
/// fields, stored as plain [`Marginalisation`](crate::Marginalisation)
/// ordinals so that comparisons and serialized forms never depend on the
/// enum's own representation. Shapes are taken on trust: producers are
/// expected to hand over internally consistent arrays, and inconsistencies
/// surface downstream rather than here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kernel<A: Float = f64> {
    /// Self covariance of the first input batch. Shape `[n1]` for
    /// architectures without spatial dimensions, otherwise as described by
    /// `marginal`.
    pub var1: ArrayD<A>,
    /// Cross covariance between the two input batches (the NNGP kernel).
    /// Shape `[n1, n2]` without spatial dimensions, otherwise as described
    /// by `cross`.
    pub nngp: ArrayD<A>,
    /// Self covariance of the second input batch, absent when only one
    /// batch is being propagated.
    pub var2: Option<ArrayD<A>>,
    /// The neural tangent kernel, same shape as `nngp` when present.
    pub ntk: Option<ArrayD<A>>,
    /// Whether the layer's output channels are i.i.d. Gaussian with
    /// covariance `nngp`, conditioned on the layer's inputs and Gaussian
    /// parameters. True after an affine layer, false after a nonlinearity.
    pub is_gaussian: bool,
    /// Whether the spatial axis pairs of the covariance arrays are in
    /// reversed order. Only meaningful when `marginal` is at least
    /// `OverPoints` and `cross` at least `No`; kept false otherwise.
    /// Tracking the flip instead of eagerly permuting lets a run of
    /// order-flipping layers cancel their transpositions.
    pub is_reversed: bool,
    /// Marginalisation ordinal describing the layout of `var1`/`var2`.
    pub marginal: u8,
    /// Marginalisation ordinal describing the layout of `nngp`/`ntk`.
    pub cross: u8,
    /// Shape of the underlying random variable in the first input batch,
    /// batch-first and channel-last, prior to any marginalisation.
    pub shape1: Vec<usize>,
    /// Shape of the underlying random variable in the second input batch.
    pub shape2: Vec<usize>,
    /// Whether the two input batches are the same, which lets consumers
    /// skip symmetric halves of the computation.
    pub x1_is_x2: bool,
    /// Whether this record describes the network's input layer, where e.g.
    /// dropout must not be applied.
    pub is_input: bool,
    /// Mask for the first input batch, broadcastable against `shape1`;
    /// `true` marks a masked position. `None` means nothing is masked.
    pub mask1: Option<ArrayD<bool>>,
    /// Mask for the second input batch.
    pub mask2: Option<ArrayD<bool>>,
}

impl<A: Float> Kernel<A> {
    /// Builds a record from all fourteen fields.
    ///
    /// `marginal` and `cross` accept either a raw ordinal or a
    /// [`Marginalisation`](crate::Marginalisation) value; both are coerced
    /// to the ordinal before being stored. Nothing else is validated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        var1: ArrayD<A>,
        nngp: ArrayD<A>,
        var2: Option<ArrayD<A>>,
        ntk: Option<ArrayD<A>>,
        is_gaussian: bool,
        is_reversed: bool,
        marginal: impl Into<u8>,
        cross: impl Into<u8>,
        shape1: Vec<usize>,
        shape2: Vec<usize>,
        x1_is_x2: bool,
        is_input: bool,
        mask1: Option<ArrayD<bool>>,
        mask2: Option<ArrayD<bool>>,
    ) -> Self {
        Kernel {
            var1,
            nngp,
            var2,
            ntk,
            is_gaussian,
            is_reversed,
            marginal: marginal.into(),
            cross: cross.into(),
            shape1,
            shape2,
            x1_is_x2,
            is_input,
            mask1,
            mask2,
        }
    }

    /// Starts a field-replacement, returning an update that borrows this
    /// record. Call setters for the fields to override, then
    /// [`KernelUpdate::apply`] to materialize the new record.
    pub fn with(&self) -> KernelUpdate<'_, A> {
        KernelUpdate::new(self)
    }

    /// The stored `marginal` ordinal as a typed level.
    pub fn marginal_level(&self) -> Result<Marginalisation> {
        Ok(Marginalisation::try_from(self.marginal)?)
    }

    /// The stored `cross` ordinal as a typed level.
    pub fn cross_level(&self) -> Result<Marginalisation> {
        Ok(Marginalisation::try_from(self.cross)?)
    }

    /// Reverses the order of the spatial axis pairs in all covariance
    /// arrays and toggles `is_reversed`.
    ///
    /// For a cross covariance laid out `[n1, n2, h, h', w, w', d, d']` the
    /// result is laid out `[n1, n2, d, d', w, w', h, h']`. The permutation
    /// is keyed by `shape1`'s spatial-dimension count; batch axes and the
    /// internal order of each pair are preserved. Absent arrays stay
    /// absent, every other field is carried over unchanged, and applying
    /// the operation twice restores the original record.
    ///
    /// Only meaningful for layouts whose spatial axes come in pairs
    /// (`marginal` at least `OverPoints`, `cross` at least `No`); callers
    /// are responsible for invoking it in that regime.
    pub fn reverse(&self) -> Result<Self> {
        let rev = |mat: &ArrayD<A>| reverse_spatial_pairs(mat.clone(), &self.shape1);

        let var1 = rev(&self.var1)?;
        let nngp = rev(&self.nngp)?;
        let var2 = self.var2.as_ref().map(rev).transpose()?;
        let ntk = self.ntk.as_ref().map(rev).transpose()?;

        Ok(self
            .with()
            .var1(var1)
            .nngp(nngp)
            .var2(var2)
            .ntk(ntk)
            .is_reversed(!self.is_reversed)
            .apply())
    }
}

/// Pending field overrides for a [`Kernel`].
///
/// Setters follow the same coercion rule as construction: `marginal` and
/// `cross` overrides accept a raw ordinal or a
/// [`Marginalisation`](crate::Marginalisation) value and store the ordinal.
/// The borrowed record is never modified.
#[derive(Debug)]
pub struct KernelUpdate<'a, A: Float = f64> {
    base: &'a Kernel<A>,
    var1: Option<ArrayD<A>>,
    nngp: Option<ArrayD<A>>,
    var2: Option<Option<ArrayD<A>>>,
    ntk: Option<Option<ArrayD<A>>>,
    is_gaussian: Option<bool>,
    is_reversed: Option<bool>,
    marginal: Option<u8>,
    cross: Option<u8>,
    shape1: Option<Vec<usize>>,
    shape2: Option<Vec<usize>>,
    x1_is_x2: Option<bool>,
    is_input: Option<bool>,
    mask1: Option<Option<ArrayD<bool>>>,
    mask2: Option<Option<ArrayD<bool>>>,
}

impl<'a, A: Float> KernelUpdate<'a, A> {
    fn new(base: &'a Kernel<A>) -> Self {
        KernelUpdate {
            base,
            var1: None,
            nngp: None,
            var2: None,
            ntk: None,
            is_gaussian: None,
            is_reversed: None,
            marginal: None,
            cross: None,
            shape1: None,
            shape2: None,
            x1_is_x2: None,
            is_input: None,
            mask1: None,
            mask2: None,
        }
    }

    pub fn var1(mut self, var1: ArrayD<A>) -> Self {
        self.var1 = Some(var1);
        self
    }

    pub fn nngp(mut self, nngp: ArrayD<A>) -> Self {
        self.nngp = Some(nngp);
        self
    }

    pub fn var2(mut self, var2: Option<ArrayD<A>>) -> Self {
        self.var2 = Some(var2);
        self
    }

    pub fn ntk(mut self, ntk: Option<ArrayD<A>>) -> Self {
        self.ntk = Some(ntk);
        self
    }

    pub fn is_gaussian(mut self, is_gaussian: bool) -> Self {
        self.is_gaussian = Some(is_gaussian);
        self
    }

    pub fn is_reversed(mut self, is_reversed: bool) -> Self {
        self.is_reversed = Some(is_reversed);
        self
    }

    pub fn marginal(mut self, marginal: impl Into<u8>) -> Self {
        self.marginal = Some(marginal.into());
        self
    }

    pub fn cross(mut self, cross: impl Into<u8>) -> Self {
        self.cross = Some(cross.into());
        self
    }

    pub fn shape1(mut self, shape1: Vec<usize>) -> Self {
        self.shape1 = Some(shape1);
        self
    }

    pub fn shape2(mut self, shape2: Vec<usize>) -> Self {
        self.shape2 = Some(shape2);
        self
    }

    pub fn x1_is_x2(mut self, x1_is_x2: bool) -> Self {
        self.x1_is_x2 = Some(x1_is_x2);
        self
    }

    pub fn is_input(mut self, is_input: bool) -> Self {
        self.is_input = Some(is_input);
        self
    }

    pub fn mask1(mut self, mask1: Option<ArrayD<bool>>) -> Self {
        self.mask1 = Some(mask1);
        self
    }

    pub fn mask2(mut self, mask2: Option<ArrayD<bool>>) -> Self {
        self.mask2 = Some(mask2);
        self
    }

    /// Materializes the new record. Fields without an override are cloned
    /// from the borrowed one.
    pub fn apply(self) -> Kernel<A> {
        let base = self.base;
        Kernel {
            var1: self.var1.unwrap_or_else(|| base.var1.clone()),
            nngp: self.nngp.unwrap_or_else(|| base.nngp.clone()),
            var2: self.var2.unwrap_or_else(|| base.var2.clone()),
            ntk: self.ntk.unwrap_or_else(|| base.ntk.clone()),
            is_gaussian: self.is_gaussian.unwrap_or(base.is_gaussian),
            is_reversed: self.is_reversed.unwrap_or(base.is_reversed),
            marginal: self.marginal.unwrap_or(base.marginal),
            cross: self.cross.unwrap_or(base.cross),
            shape1: self.shape1.unwrap_or_else(|| base.shape1.clone()),
            shape2: self.shape2.unwrap_or_else(|| base.shape2.clone()),
            x1_is_x2: self.x1_is_x2.unwrap_or(base.x1_is_x2),
            is_input: self.is_input.unwrap_or(base.is_input),
            mask1: self.mask1.unwrap_or_else(|| base.mask1.clone()),
            mask2: self.mask2.unwrap_or_else(|| base.mask2.clone()),
        }
    }
}
