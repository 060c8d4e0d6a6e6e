// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, concatenate};

use crate::error::{InfoError, Result};

/// Sample input accepted by the discrete estimators.
///
/// Rows are observations, columns are variables. Values are treated as
/// symbols: only their ordering and equality matter.
#[derive(Debug, Clone)]
pub enum Samples<T> {
    /// One-dimensional data of shape (N,): a single variable
    OneDimensional(Array1<T>),

    /// Two-dimensional data of shape (N, d): d variables observed jointly
    TwoDimensional(Array2<T>),
}

impl<T> From<Array1<T>> for Samples<T> {
    fn from(array: Array1<T>) -> Self {
        Samples::OneDimensional(array)
    }
}

impl<T> From<Array2<T>> for Samples<T> {
    fn from(array: Array2<T>) -> Self {
        Samples::TwoDimensional(array)
    }
}

impl<T> From<Vec<T>> for Samples<T> {
    fn from(values: Vec<T>) -> Self {
        Samples::OneDimensional(Array1::from(values))
    }
}

impl<T> Samples<T> {
    /// Number of observations.
    pub fn nrows(&self) -> usize {
        match self {
            Samples::OneDimensional(a) => a.len(),
            Samples::TwoDimensional(a) => a.nrows(),
        }
    }

    /// Number of variables.
    pub fn ncols(&self) -> usize {
        match self {
            Samples::OneDimensional(_) => 1,
            Samples::TwoDimensional(a) => a.ncols(),
        }
    }

    /// View the samples as an (N, d) matrix, turning 1D input into a single column.
    pub fn into_matrix(self) -> Array2<T> {
        match self {
            Samples::OneDimensional(a) => a.insert_axis(Axis(1)),
            Samples::TwoDimensional(a) => a,
        }
    }
}

/// Join `x` with the optional `y` and `z` columns into one (N, d) matrix.
///
/// Supplied columns are appended in order. `z` without `y` is rejected, as is
/// any column whose length differs from the row count of `x`.
pub fn join_columns<T: Clone>(
    x: Samples<T>,
    y: Option<Array1<T>>,
    z: Option<Array1<T>>,
) -> Result<Array2<T>> {
    if y.is_none() && z.is_some() {
        return Err(InfoError::ShapeMismatch {
            expected: "y to be supplied whenever z is supplied".to_string(),
            found: "z without y".to_string(),
        });
    }
    let x = x.into_matrix();
    let extra: Vec<Array1<T>> = y.into_iter().chain(z).collect();
    if extra.is_empty() {
        return Ok(x);
    }

    let n = x.nrows();
    for column in extra.iter() {
        if column.len() != n {
            return Err(InfoError::RowCountMismatch {
                expected: n,
                found: column.len(),
            });
        }
    }

    let mut parts: Vec<ArrayView2<'_, T>> = Vec::with_capacity(extra.len() + 1);
    parts.push(x.view());
    parts.extend(extra.iter().map(|c| c.view().insert_axis(Axis(1))));
    Ok(concatenate(Axis(1), &parts)?)
}

/// Count how often each distinct row of an (N, d) matrix occurs.
///
/// Rows are sorted lexicographically by index and equal neighbours merged, so
/// memory grows with N rather than with the product of the column
/// cardinalities. Counts follow the sorted row order.
pub fn count_distinct_rows<T: Ord>(data: ArrayView2<'_, T>) -> Result<Array1<usize>> {
    let (n, d) = data.dim();
    if d == 0 {
        return Err(InfoError::columns("at least 1 column", 0));
    }
    if n == 0 {
        return Err(InfoError::EmptySamples);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| data.row(a).iter().cmp(data.row(b).iter()));

    let mut counts = Vec::new();
    let mut run = 1usize;
    for pair in order.windows(2) {
        if data.row(pair[0]) == data.row(pair[1]) {
            run += 1;
        } else {
            counts.push(run);
            run = 1;
        }
    }
    counts.push(run);
    Ok(Array1::from(counts))
}

/// Sorted distinct symbols of one column, mapping each to a dense zero-based index.
///
/// The ordering follows `Ord`, so identical input always yields identical indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMap<T> {
    symbols: Vec<T>,
}

impl<T: Ord + Clone> SymbolMap<T> {
    pub fn from_column(column: ArrayView1<'_, T>) -> Self {
        let mut symbols: Vec<T> = column.iter().cloned().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Index of an observed symbol, `None` for values outside the domain.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.symbols.binary_search(value).ok()
    }

    /// Index of a symbol known to be in the domain.
    #[inline]
    pub(crate) fn position(&self, value: &T) -> usize {
        self.symbols.partition_point(|s| s < value)
    }
}

impl<T> SymbolMap<T> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, index: usize) -> Option<&T> {
        self.symbols.get(index)
    }

    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }
}
