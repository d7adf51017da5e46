//! Total variation of image-like arrays.
//!
//! Wikipedia: <https://en.wikipedia.org/wiki/Total_variation>


use ndarray::{Array, ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, Slice, Zip};
use tracing::debug;

use crate::{
    traits::{Scalar, TotalVariation},
    Norm, TvError,
};

/// Minimum number of axes of an input, the trailing `(C, H, W)`.
pub const MIN_NDIM: usize = 3;

/// Dimension of an input once its trailing `(C, H, W)` axes are summed away.
pub type Reduced<D> = <<<D as Dimension>::Smaller as Dimension>::Smaller as Dimension>::Smaller;

/// Returns the total variation of `x`, an array of shape `(..., C, H, W)`.
///
/// Adjacent pixels are compared along the width and the height axes, each
/// difference is transformed according to `norm` and summed over the
/// `(C, H, W)` axes of every sample. The leading axes of `x` are kept:
/// an input of shape `(N, C, H, W)` gives `N` scores.
///
/// A spatial axis of length 1 has no difference, its term is 0.
///
/// # Errors
/// - [`TvError::Rank`] when `x` has less than 3 axes.
/// - [`TvError::EmptyAxis`] when the height or the width is 0.
///
/// ```
/// use ndarray::Array;
/// use totvar::{tv, Norm};
/// // x[n, c, i, j] = i + j
/// let x = Array::from_shape_fn((2, 3, 4, 4), |(_, _, i, j)| (i + j) as f64);
/// let score = tv(&x, Norm::L1).unwrap();
/// assert_eq!(score.to_vec(), vec![72., 72.]);
/// ```
pub fn tv<T, S, D>(x: &ArrayBase<S, D>, norm: Norm) -> Result<Array<T, Reduced<D>>, TvError>
where
    T: Scalar,
    S: Data<Elem = T>,
    D: Dimension,
{
    let x = x.view().into_dyn();
    let ndim = x.ndim();
    if ndim < MIN_NDIM {
        return Err(TvError::Rank {
            expected: MIN_NDIM,
            got: ndim,
        });
    }
    debug!(shape = ?x.shape(), %norm, "computing total variation");
    let (h_axis, w_axis) = (Axis(ndim - 2), Axis(ndim - 1));
    check_spatial_axis(&x, h_axis, "height")?;
    check_spatial_axis(&x, w_axis, "width")?;

    let w_var = variation_along(&x, w_axis, norm);
    let h_var = variation_along(&x, h_axis, norm);
    let mut score = w_var + &h_var;
    score.mapv_inplace(|s| norm.finalize(s));
    Ok(score.into_dimensionality::<Reduced<D>>()?)
}

fn check_spatial_axis<T>(x: &ArrayViewD<T>, axis: Axis, name: &'static str) -> Result<(), TvError> {
    match x.len_of(axis) {
        0 => Err(TvError::EmptyAxis { axis: name }),
        1 => {
            debug!(axis = name, "spatial axis of length 1, its term is 0");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Sum over the `(C, H, W)` axes of the transformed forward differences
/// `x[.., k + 1] - x[.., k]` along `axis`.
fn variation_along<T: Scalar>(x: &ArrayViewD<T>, axis: Axis, norm: Norm) -> ArrayD<T> {
    let next = x.slice_axis(axis, Slice::from(1isize..));
    let prev = x.slice_axis(axis, Slice::from(..-1isize));
    let diff = Zip::from(&next)
        .and(&prev)
        .map_collect(|&a, &b| norm.pointwise(a - b));
    (0..MIN_NDIM).fold(diff, |acc, _| {
        let last = Axis(acc.ndim() - 1);
        acc.sum_axis(last)
    })
}

impl<T, S, D> TotalVariation for ArrayBase<S, D>
where
    T: Scalar,
    S: Data<Elem = T>,
    D: Dimension,
{
    type Output = Result<Array<T, Reduced<D>>, TvError>;
    fn total_variation(&self, norm: Norm) -> Self::Output {
        tv(self, norm)
    }
}
