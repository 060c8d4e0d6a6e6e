// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod entropy;
pub mod mutual_information;
pub mod pid;
pub mod traits;

use ndarray::Array1;

use crate::config::MeasureConfig;
use crate::error::Result;
use approaches::discrete::Samples;

pub use entropy::{DiscreteConditionalEntropy, DiscreteEntropy, Entropy};
pub use mutual_information::{
    DiscreteConditionalMutualInformation, DiscreteInteractionInformation, DiscreteMutualInformation,
    MutualInformation,
};
pub use pid::{PartialInformationDecomposition, PidComponents};
pub use traits::{GlobalValue, MutualInformationEstimator, ProbabilityEstimator};

/// Shannon entropy H(X), or the joint entropy of all columns of `x`.
///
/// Counts distinct rows without a dense joint table, so `max_joint_cells`
/// does not apply.
pub fn information_entropy<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    config: &MeasureConfig,
) -> Result<f64> {
    Ok(DiscreteEntropy::new(x, config)?.global_value())
}

/// Mutual information I(X;Y) = H(X) + H(Y) - H(X,Y).
pub fn mutual_information<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    y: Option<Array1<T>>,
    config: &MeasureConfig,
) -> Result<f64> {
    Ok(DiscreteMutualInformation::new(x, y, config)?.global_value())
}

/// Conditional entropy H(X|Y) = H(X,Y) - H(Y).
pub fn conditional_entropy<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    y: Option<Array1<T>>,
    config: &MeasureConfig,
) -> Result<f64> {
    Ok(DiscreteConditionalEntropy::new(x, y, config)?.global_value())
}

/// Conditional mutual information I(X;Y|Z).
pub fn conditional_mutual_information<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    y: Option<Array1<T>>,
    z: Option<Array1<T>>,
    config: &MeasureConfig,
) -> Result<f64> {
    Ok(DiscreteConditionalMutualInformation::new(x, y, z, config)?.global_value())
}

/// Interaction information I(X;Y|Z) - I(X;Y).
pub fn interaction_information<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    y: Option<Array1<T>>,
    z: Option<Array1<T>>,
    config: &MeasureConfig,
) -> Result<f64> {
    Ok(DiscreteInteractionInformation::new(x, y, z, config)?.global_value())
}

/// Partial information decomposition of what X and Y carry about Z.
pub fn partial_information_decomposition<T: Ord + Clone>(
    x: impl Into<Samples<T>>,
    y: Option<Array1<T>>,
    z: Option<Array1<T>>,
    config: &MeasureConfig,
) -> Result<PidComponents> {
    Ok(PartialInformationDecomposition::new(x, y, z, config)?.components())
}
