// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::config::MeasureConfig;
use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::Samples;
use crate::estimators::approaches::discrete::formulas::{self, TrivariateEntropies};
use crate::estimators::approaches::discrete::joint::JointDistribution;
use crate::estimators::pid::PartialInformationDecomposition;
use crate::estimators::traits::{GlobalValue, MutualInformationEstimator};

/// Factory for the mutual-information family of discrete estimators.
///
/// For every constructor the optional `y`/`z` columns are joined to `x`;
/// when omitted, `x` must already hold the columns in the order (x, y, z).
pub struct MutualInformation;

impl MutualInformation {
    /// I(X;Y)
    pub fn new_discrete<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<DiscreteMutualInformation> {
        DiscreteMutualInformation::new(x, y, config)
    }

    /// I(X;Y|Z)
    pub fn new_cmi_discrete<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<DiscreteConditionalMutualInformation> {
        DiscreteConditionalMutualInformation::new(x, y, z, config)
    }

    /// I(X;Y|Z) - I(X;Y)
    pub fn new_interaction_discrete<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<DiscreteInteractionInformation> {
        DiscreteInteractionInformation::new(x, y, z, config)
    }

    /// Redundant, unique and synergistic information of (X, Y) about Z.
    pub fn new_pid_discrete<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<PartialInformationDecomposition> {
        PartialInformationDecomposition::new(x, y, z, config)
    }
}

/// Discrete Mutual Information estimator using the entropy-summation formula.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteMutualInformation {
    h_x: f64,
    h_y: f64,
    h_xy: f64,
}

impl DiscreteMutualInformation {
    pub fn new<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let joint = JointDistribution::from_columns(x, y, None, 2, config)?;
        let base = config.base;
        Ok(Self {
            h_x: joint.marginal(&[0])?.entropy(base),
            h_y: joint.marginal(&[1])?.entropy(base),
            h_xy: joint.entropy(base),
        })
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        formulas::mutual_information(self.h_x, self.h_y, self.h_xy)
    }
}

impl MutualInformationEstimator for DiscreteMutualInformation {}

/// Discrete Conditional Mutual Information estimator using the entropy-summation formula.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteConditionalMutualInformation {
    entropies: TrivariateEntropies,
}

impl DiscreteConditionalMutualInformation {
    pub fn new<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let joint = JointDistribution::from_columns(x, y, z, 3, config)?;
        let entropies = TrivariateEntropies::from_joint(&joint, config.base)?;
        Ok(Self { entropies })
    }

    pub fn entropies(&self) -> &TrivariateEntropies {
        &self.entropies
    }
}

impl GlobalValue for DiscreteConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        // I(X; Y | Z) = H(X, Z) + H(Y, Z) - H(X, Y, Z) - H(Z)
        self.entropies.cmi()
    }
}

impl MutualInformationEstimator for DiscreteConditionalMutualInformation {}

/// Discrete Interaction Information estimator, II = I(X;Y|Z) - I(X;Y).
///
/// Signed: positive values indicate synergy-dominated, negative values
/// redundancy-dominated interactions.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteInteractionInformation {
    entropies: TrivariateEntropies,
}

impl DiscreteInteractionInformation {
    pub fn new<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let joint = JointDistribution::from_columns(x, y, z, 3, config)?;
        let entropies = TrivariateEntropies::from_joint(&joint, config.base)?;
        Ok(Self { entropies })
    }

    pub fn entropies(&self) -> &TrivariateEntropies {
        &self.entropies
    }
}

impl GlobalValue for DiscreteInteractionInformation {
    fn global_value(&self) -> f64 {
        self.entropies.interaction()
    }
}

impl MutualInformationEstimator for DiscreteInteractionInformation {}
