// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Measure configuration: probability estimator, logarithm base and the
//! memory guard for joint tables.

use std::str::FromStr;

use ndarray::{ArrayD, ArrayViewD};

use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::mle::MaximumLikelihood;
use crate::estimators::traits::ProbabilityEstimator;

/// Logarithm base for results in bits.
pub const BITS: f64 = 2.0;
/// Logarithm base for results in nats.
pub const NATS: f64 = std::f64::consts::E;
/// Logarithm base for results in dits (hartleys).
pub const DITS: f64 = 10.0;

/// Default limit on the number of cells of a dense joint table (2^26).
///
/// The joint table grows with the product of the per-column cardinalities,
/// so a handful of high-cardinality columns quickly exhausts memory.
pub const DEFAULT_MAX_JOINT_CELLS: usize = 1 << 26;

/// Probability estimator selected by name.
///
/// Only maximum likelihood is available; new estimators become new variants
/// and delegate to their own [`ProbabilityEstimator`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Estimator {
    #[default]
    MaximumLikelihood,
}

impl Estimator {
    pub fn name(&self) -> &'static str {
        match self {
            Estimator::MaximumLikelihood => "ml",
        }
    }
}

impl FromStr for Estimator {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ml" => Ok(Estimator::MaximumLikelihood),
            _ => Err(InfoError::UnsupportedEstimator(s.to_string())),
        }
    }
}

impl ProbabilityEstimator for Estimator {
    fn probabilities(&self, counts: ArrayViewD<'_, usize>) -> Result<ArrayD<f64>> {
        match self {
            Estimator::MaximumLikelihood => MaximumLikelihood.probabilities(counts),
        }
    }
}

/// Settings shared by every measure call.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureConfig {
    pub estimator: Estimator,
    pub base: f64,
    pub max_joint_cells: usize,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            estimator: Estimator::MaximumLikelihood,
            base: BITS,
            max_joint_cells: DEFAULT_MAX_JOINT_CELLS,
        }
    }
}

impl MeasureConfig {
    /// Build a configuration from an estimator name and a logarithm base.
    ///
    /// # Errors
    ///
    /// `UnsupportedEstimator` for any name other than `"ml"`, `InvalidBase`
    /// for a base that is not finite, positive and different from 1.
    pub fn new(estimator: &str, base: f64) -> Result<Self> {
        let estimator: Estimator = estimator.parse()?;
        Self::default().with_estimator(estimator).with_base(base)
    }

    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_base(mut self, base: f64) -> Result<Self> {
        validate_base(base)?;
        self.base = base;
        Ok(self)
    }

    pub fn with_max_joint_cells(mut self, max_joint_cells: usize) -> Self {
        self.max_joint_cells = max_joint_cells;
        self
    }

    /// Check the fields that may have been set directly.
    pub(crate) fn validate(&self) -> Result<()> {
        validate_base(self.base)
    }
}

fn validate_base(base: f64) -> Result<()> {
    if base.is_finite() && base > 0.0 && base != 1.0 {
        Ok(())
    } else {
        Err(InfoError::InvalidBase(base))
    }
}
