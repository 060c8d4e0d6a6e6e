// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Batch evaluation of independent measure calls.
//!
//! Every call builds its own joint table and shares nothing, so with the
//! `parallel` feature the work is spread over the rayon thread pool. Without it
//! the same code runs sequentially and returns identical results.

use ndarray::{Array1, Array2, Axis};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::MeasureConfig;
use crate::error::Result;
use crate::estimators::entropy::DiscreteEntropy;
use crate::estimators::pid::{PartialInformationDecomposition, PidComponents};
use crate::estimators::traits::GlobalValue;

/// Row-wise batch entropy for 2D discrete data.
///
/// Each row of `data` is treated as an independent 1D sample set and its
/// Shannon entropy is computed in the configured base.
pub struct DiscreteEntropyBatchRows<T> {
    data: Array2<T>,
    config: MeasureConfig,
}

impl<T: Ord + Clone + Send + Sync> DiscreteEntropyBatchRows<T> {
    pub fn new(data: Array2<T>, config: &MeasureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            data,
            config: config.clone(),
        })
    }

    /// Compute the entropy of each row, in parallel with the `parallel` feature.
    pub fn global_values(&self) -> Result<Array1<f64>> {
        let rows: Vec<_> = self.data.axis_iter(Axis(0)).collect();

        #[cfg(feature = "parallel")]
        let iter = rows.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = rows.iter();

        let values = iter
            .map(|row| {
                DiscreteEntropy::new(row.to_owned(), &self.config).map(|h| h.global_value())
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Array1::from(values))
    }
}

/// Decompose many independent (x, y, z) sample triples.
///
/// Returns one result per triple, in input order; a failing triple does not
/// affect the others.
pub fn pid_batch<T>(
    triples: &[(Array1<T>, Array1<T>, Array1<T>)],
    config: &MeasureConfig,
) -> Vec<Result<PidComponents>>
where
    T: Ord + Clone + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = triples.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = triples.iter();

    iter.map(|(x, y, z)| {
        PartialInformationDecomposition::new(x.clone(), Some(y.clone()), Some(z.clone()), config)
            .map(|pid| pid.components())
    })
    .collect()
}
