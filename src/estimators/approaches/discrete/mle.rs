// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayD, ArrayViewD};

use crate::error::{InfoError, Result};
use crate::estimators::traits::ProbabilityEstimator;

/// Maximum-likelihood probability estimator for discrete data.
///
/// Empirical probabilities p_i = n_i / N taken straight from the counts.
/// No bias correction is applied, so entropies computed from these
/// probabilities are biased low for small N relative to the number of states.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumLikelihood;

impl ProbabilityEstimator for MaximumLikelihood {
    fn probabilities(&self, counts: ArrayViewD<'_, usize>) -> Result<ArrayD<f64>> {
        let n: usize = counts.iter().sum();
        if n == 0 {
            return Err(InfoError::EmptySamples);
        }
        let n_f = n as f64;
        Ok(counts.mapv(|cnt| cnt as f64 / n_f))
    }
}
