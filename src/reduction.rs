use core::{fmt, str::FromStr};

use ndarray::{arr0, Array, ArrayD, Dimension};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{traits::Scalar, TvError};

/// How per-sample scores collapse into the final output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reduction {
    /// Arithmetic mean of all scores.
    #[default]
    Mean,
    /// Sum of all scores.
    Sum,
    /// Scores are returned unchanged.
    None,
}

impl Reduction {
    /// Every reduction, in declaration order.
    pub const ALL: [Reduction; 3] = [Reduction::Mean, Reduction::Sum, Reduction::None];

    /// Reduces `score`.
    ///
    /// `Mean` and `Sum` give a 0-dimensional array, `None` gives `score`
    /// with a dynamic dimension. The mean of an empty score is an error.
    pub fn reduce<T, D>(self, score: Array<T, D>) -> Result<ArrayD<T>, TvError>
    where
        T: Scalar,
        D: Dimension,
    {
        trace!(reduction = %self, n_scores = score.len(), "reducing score");
        match self {
            Reduction::Mean => score
                .mean()
                .map(|mean| arr0(mean).into_dyn())
                .ok_or(TvError::EmptyReduction),
            Reduction::Sum => Ok(arr0(score.sum()).into_dyn()),
            Reduction::None => Ok(score.into_dyn()),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reduction::Mean => "mean",
            Reduction::Sum => "sum",
            Reduction::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for Reduction {
    type Err = TvError;
    /// Parses `"mean"`, `"sum"` or `"none"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reduction::ALL
            .into_iter()
            .find(|reduction| reduction.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| TvError::UnknownSelector {
                kind: "reduction",
                value: s.to_string(),
            })
    }
}
