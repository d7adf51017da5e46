#[cfg(test)]
mod unit_test;

use ndarray::{ArrayBase, ArrayD, Data, Dimension};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    traits::{Criterion, Scalar},
    tv, Norm, Reduction, TvError,
};

/// Settings of a [`TotalVariationLoss`].
///
/// - **norm**: applied to the differences between adjacent pixels, see [`Norm`].
/// - **reduction**: how the per-sample scores are collapsed, see [`Reduction`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TotalVariationSettings {
    pub norm: Norm,
    pub reduction: Reduction,
}

/// Criterion measuring the total variation of its inputs.
///
/// Inputs have shape `(..., C, H, W)`, typically `(N, C, H, W)`. The unit
/// holds no state besides its settings, so it can be shared across threads
/// and applied to any number of inputs.
/// ```
/// use ndarray::Array;
/// use totvar::{Criterion, Norm, Reduction, TotalVariationLoss, TotalVariationSettings};
/// let x = Array::from_shape_fn((2, 3, 4, 4), |(_, _, i, j)| (i + j) as f32);
/// let loss = TotalVariationLoss::new(TotalVariationSettings {
///     norm: Norm::L1,
///     reduction: Reduction::Sum,
/// });
/// let total = loss.apply(&x).unwrap();
/// assert_eq!(total.into_raw_vec(), vec![144.]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TotalVariationLoss {
    pub settings: TotalVariationSettings,
}

impl TotalVariationLoss {
    pub fn new(settings: TotalVariationSettings) -> Self {
        Self { settings }
    }
    pub fn norm(&self) -> Norm {
        self.settings.norm
    }
    pub fn reduction(&self) -> Reduction {
        self.settings.reduction
    }
}

impl<T, S, D> Criterion<ArrayBase<S, D>> for TotalVariationLoss
where
    T: Scalar,
    S: Data<Elem = T>,
    D: Dimension,
{
    type Output = Result<ArrayD<T>, TvError>;
    /// Reduces the scores of [`tv`] according to the settings, see
    /// [`Reduction::reduce`].
    fn apply(&self, x: &ArrayBase<S, D>) -> Self::Output {
        let score = tv(x, self.norm())?;
        self.reduction().reduce(score)
    }
}
