// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayD, ArrayView1, ArrayView2, Axis, Ix1, Ix2, IxDyn};

use crate::config::MeasureConfig;
use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{Samples, join_columns};
use crate::estimators::approaches::discrete::formulas;
use crate::estimators::approaches::discrete::frequency::FrequencyTable;

/// Joint probability table over one axis per variable.
///
/// Marginals are always derived from this table by summing out axes, never by
/// re-estimating from the raw samples, so every marginal shares the symbol
/// indexing of the joint and sums to the same total.
#[derive(Debug, Clone, PartialEq)]
pub struct JointDistribution {
    probabilities: ArrayD<f64>,
}

impl JointDistribution {
    /// Wrap a probability array. The caller is responsible for normalisation.
    pub fn from_probabilities(probabilities: ArrayD<f64>) -> Self {
        Self { probabilities }
    }

    /// Estimate the joint distribution of all columns of `samples`.
    pub fn from_samples<T: Ord + Clone>(
        samples: impl Into<Samples<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        config.validate()?;
        let table = FrequencyTable::from_samples(samples, config.max_joint_cells)?;
        table.probabilities(&config.estimator)
    }

    /// Join `x`, `y` and `z` column-wise and estimate their joint distribution,
    /// requiring exactly `columns` variables after joining.
    pub fn from_columns<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        columns: usize,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let xyz = join_columns(x.into(), y, z)?;
        if xyz.ncols() != columns {
            return Err(InfoError::columns(&format!("{columns} columns"), xyz.ncols()));
        }
        Self::from_samples(xyz, config)
    }

    pub fn ndim(&self) -> usize {
        self.probabilities.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.probabilities.shape()
    }

    pub fn probabilities(&self) -> &ArrayD<f64> {
        &self.probabilities
    }

    pub fn into_probabilities(self) -> ArrayD<f64> {
        self.probabilities
    }

    /// Sum of all entries, 1 up to rounding for an estimated distribution.
    pub fn total(&self) -> f64 {
        self.probabilities.sum()
    }

    /// Shannon entropy of the whole table in the given base.
    pub fn entropy(&self, base: f64) -> f64 {
        formulas::entropy(&self.probabilities, base)
    }

    /// Marginal distribution over `axes`, in the order given.
    ///
    /// The complementary axes are summed out. Requesting every axis in a
    /// different order transposes the table.
    pub fn marginal(&self, axes: &[usize]) -> Result<JointDistribution> {
        let ndim = self.ndim();
        let mut keep = vec![false; ndim];
        for &axis in axes {
            if axis >= ndim || keep[axis] {
                return Err(InfoError::InvalidAxis { axis, ndim });
            }
            keep[axis] = true;
        }

        // sum from the highest axis down so lower indices stay valid
        let mut p = self.probabilities.clone();
        for axis in (0..ndim).rev().filter(|&a| !keep[a]) {
            p = p.sum_axis(Axis(axis));
        }

        let mut sorted = axes.to_vec();
        sorted.sort_unstable();
        let perm: Vec<usize> = axes
            .iter()
            .map(|a| sorted.partition_point(|s| s < a))
            .collect();
        if perm.iter().enumerate().any(|(i, &j)| i != j) {
            p = p.permuted_axes(IxDyn(&perm)).as_standard_layout().into_owned();
        }
        Ok(Self::from_probabilities(p))
    }

    /// One-variable marginal as a vector.
    pub fn marginal_1d(&self, axis: usize) -> Result<Array1<f64>> {
        Ok(self.marginal(&[axis])?.probabilities.into_dimensionality::<Ix1>()?)
    }

    /// View of a one-axis table as a vector.
    pub fn view_1d(&self) -> Result<ArrayView1<'_, f64>> {
        Ok(self.probabilities.view().into_dimensionality::<Ix1>()?)
    }

    /// View of a two-axis table as a matrix.
    pub fn view_2d(&self) -> Result<ArrayView2<'_, f64>> {
        Ok(self.probabilities.view().into_dimensionality::<Ix2>()?)
    }
}
