// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1, Ix1};

use crate::config::MeasureConfig;
use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::{Samples, count_distinct_rows};
use crate::estimators::approaches::discrete::formulas;
use crate::estimators::approaches::discrete::joint::JointDistribution;
pub use crate::estimators::traits::GlobalValue;
use crate::estimators::traits::ProbabilityEstimator;

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Samples of shape (N,) or (N, d); several columns give the joint entropy
    /// * `config` - Estimator, logarithm base and joint table limit
    pub fn new_discrete<T: Ord + Clone>(
        data: impl Into<Samples<T>>,
        config: &MeasureConfig,
    ) -> Result<DiscreteEntropy> {
        DiscreteEntropy::new(data, config)
    }

    /// Creates a new discrete conditional entropy estimator for H(X|Y)
    ///
    /// # Arguments
    ///
    /// * `x` - Samples of X, or both columns (X, Y) when `y` is `None`
    /// * `y` - Optional samples of the conditioning variable Y
    /// * `config` - Estimator, logarithm base and joint table limit
    pub fn new_conditional_discrete<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<DiscreteConditionalEntropy> {
        DiscreteConditionalEntropy::new(x, y, config)
    }
}

/// Shannon entropy of discrete data.
///
/// Probabilities come from the configured estimator; the result is in the
/// configured base. With several columns this is the joint entropy
/// H(X_1, ..., X_d).
///
/// Only the observed rows are counted, so the estimate is not bound by
/// `max_joint_cells`: d columns of N distinct values need N counts, not N^d.
#[derive(Debug, Clone)]
pub struct DiscreteEntropy {
    probabilities: Array1<f64>,
    base: f64,
}

impl DiscreteEntropy {
    pub fn new<T: Ord + Clone>(
        data: impl Into<Samples<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        config.validate()?;
        let samples: Samples<T> = data.into();
        let matrix = samples.into_matrix();
        let counts = count_distinct_rows(matrix.view())?;
        let probabilities = config
            .estimator
            .probabilities(counts.view().into_dyn())?
            .into_dimensionality::<Ix1>()?;
        Ok(Self {
            probabilities,
            base: config.base,
        })
    }

    /// Probability of every distinct observed row, in sorted row order.
    pub fn probabilities(&self) -> ArrayView1<'_, f64> {
        self.probabilities.view()
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        formulas::entropy(&self.probabilities, self.base)
    }
}

/// Conditional entropy H(X|Y) = H(X,Y) - H(Y) from one joint table over (X, Y).
#[derive(Debug, Clone, Copy)]
pub struct DiscreteConditionalEntropy {
    h_xy: f64,
    h_y: f64,
}

impl DiscreteConditionalEntropy {
    pub fn new<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let joint = JointDistribution::from_columns(x, y, None, 2, config)?;
        Ok(Self {
            h_xy: joint.entropy(config.base),
            h_y: joint.marginal(&[1])?.entropy(config.base),
        })
    }
}

impl GlobalValue for DiscreteConditionalEntropy {
    fn global_value(&self) -> f64 {
        formulas::conditional_entropy(self.h_xy, self.h_y)
    }
}
