// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayD, ArrayView2, Axis, IxDyn};

use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{Samples, SymbolMap};
use crate::estimators::approaches::discrete::joint::JointDistribution;
use crate::estimators::traits::ProbabilityEstimator;

/// Dense joint frequency table over d discrete variables.
///
/// Holds one [`SymbolMap`] per column and a d-dimensional count array indexed by
/// the tuple of per-column symbol indices. Each observation is located by binary
/// search in the symbol maps, so counting needs no hashing.
///
/// Memory grows with the product of the per-column cardinalities. Construction
/// fails with `JointTableTooLarge` instead of allocating beyond `max_cells`.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    symbols: Vec<SymbolMap<T>>,
    counts: ArrayD<usize>,
    n: usize,
}

impl<T: Ord + Clone> FrequencyTable<T> {
    pub fn from_samples(samples: impl Into<Samples<T>>, max_cells: usize) -> Result<Self> {
        let samples: Samples<T> = samples.into();
        let matrix = samples.into_matrix();
        Self::from_matrix(matrix.view(), max_cells)
    }

    /// Count the rows of an (N, d) sample matrix.
    pub fn from_matrix(data: ArrayView2<'_, T>, max_cells: usize) -> Result<Self> {
        let (n, d) = data.dim();
        if d == 0 {
            return Err(InfoError::columns("at least 1 column", 0));
        }
        if n == 0 {
            return Err(InfoError::EmptySamples);
        }

        let symbols: Vec<SymbolMap<T>> = data
            .axis_iter(Axis(1))
            .map(SymbolMap::from_column)
            .collect();
        let shape: Vec<usize> = symbols.iter().map(SymbolMap::len).collect();

        // saturate on overflow so the limit check below still fires
        let cells = shape
            .iter()
            .try_fold(1u128, |acc, &k| acc.checked_mul(k as u128))
            .unwrap_or(u128::MAX);
        if cells > max_cells as u128 {
            return Err(InfoError::JointTableTooLarge {
                cells,
                limit: max_cells,
            });
        }

        let mut counts = ArrayD::<usize>::zeros(IxDyn(&shape));
        let mut index = vec![0usize; d];
        for row in data.axis_iter(Axis(0)) {
            for ((slot, value), map) in index.iter_mut().zip(row.iter()).zip(symbols.iter()) {
                *slot = map.position(value);
            }
            counts[index.as_slice()] += 1;
        }

        Ok(Self { symbols, counts, n })
    }
}

impl<T> FrequencyTable<T> {
    /// Convert the counts into a joint probability table with the given estimator.
    pub fn probabilities<E>(&self, estimator: &E) -> Result<JointDistribution>
    where
        E: ProbabilityEstimator + ?Sized,
    {
        let p = estimator.probabilities(self.counts.view())?;
        Ok(JointDistribution::from_probabilities(p))
    }

    pub fn counts(&self) -> &ArrayD<usize> {
        &self.counts
    }

    pub fn symbols(&self) -> &[SymbolMap<T>] {
        &self.symbols
    }

    /// Total number of observations.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn ndim(&self) -> usize {
        self.counts.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.counts.shape()
    }
}
