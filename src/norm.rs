use core::{fmt, str::FromStr};

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TvError;

/// Norm applied to the finite differences between adjacent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Norm {
    /// Sum of absolute differences.
    L1,
    /// Square root of the sum of squared differences.
    #[default]
    L2,
    /// Sum of squared differences.
    #[cfg_attr(feature = "serde", serde(rename = "L2_squared"))]
    L2Squared,
}

impl Norm {
    /// Every norm, in declaration order.
    pub const ALL: [Norm; 3] = [Norm::L1, Norm::L2, Norm::L2Squared];

    /// Transform of a single difference before summation.
    #[inline]
    pub(crate) fn pointwise<T: Float>(self, diff: T) -> T {
        match self {
            Norm::L1 => diff.abs(),
            Norm::L2 | Norm::L2Squared => diff * diff,
        }
    }

    /// Transform of the summed differences.
    #[inline]
    pub(crate) fn finalize<T: Float>(self, sum: T) -> T {
        match self {
            Norm::L2 => sum.sqrt(),
            Norm::L1 | Norm::L2Squared => sum,
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Norm::L1 => "L1",
            Norm::L2 => "L2",
            Norm::L2Squared => "L2_squared",
        };
        f.write_str(name)
    }
}

impl FromStr for Norm {
    type Err = TvError;
    /// Parses `"L1"`, `"L2"` or `"L2_squared"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Norm::ALL
            .into_iter()
            .find(|norm| norm.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| TvError::UnknownSelector {
                kind: "norm",
                value: s.to_string(),
            })
    }
}
