use crate::Norm;
use num_traits::{Float, FromPrimitive};

/// Floating point types total variation can be computed on.
pub trait Scalar
where
    Self: Float + FromPrimitive + core::fmt::Debug + 'static,
{
}
macro_rules! impl_scalar {
    ($t:ty) => {
        impl Scalar for $t {}
    };
}
impl_scalar!(f32);
impl_scalar!(f64);

/// Implements the total variation of containers laid out as `(..., C, H, W)`.
pub trait TotalVariation {
    type Output;
    /// Total variation of each `(C, H, W)` sample, leading axes are kept.
    fn total_variation(&self, norm: Norm) -> Self::Output;
}

/// Configured unit, built once and applied to many inputs.
pub trait Criterion<X: ?Sized> {
    type Output;
    /// Measures `x` with the configuration held by `self`.
    fn apply(&self, x: &X) -> Self::Output;
}
