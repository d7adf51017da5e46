mod error;
mod loss;
mod norm;
mod reduction;
mod traits;
mod variation;

pub use error::TvError;
pub use loss::{TotalVariationLoss, TotalVariationSettings};
pub use norm::Norm;
pub use reduction::Reduction;
pub use traits::{Criterion, Scalar, TotalVariation};
pub use variation::{tv, Reduced, MIN_NDIM};
