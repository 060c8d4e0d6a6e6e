// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayD, ArrayViewD};

use crate::error::Result;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Strategy turning a dense count table into a probability table.
///
/// Implementations must keep the shape of `counts`, return non-negative
/// entries and normalise them to sum to 1.
pub trait ProbabilityEstimator {
    fn probabilities(&self, counts: ArrayViewD<'_, usize>) -> Result<ArrayD<f64>>;
}

/// Marker trait for estimators whose value is a (conditional) mutual information
/// or a signed combination of mutual informations.
pub trait MutualInformationEstimator: GlobalValue {}
