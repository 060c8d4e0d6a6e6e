// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Error types for discrete information-measure computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InfoError {
    #[error("unsupported estimator: {0:?} (supported: \"ml\")")]
    UnsupportedEstimator(String),

    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("row count mismatch: expected {expected} observations, found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("sample set is empty; at least one observation is required")]
    EmptySamples,

    #[error("invalid logarithm base {0}: must be finite, positive and not equal to 1")]
    InvalidBase(f64),

    #[error("axis {axis} is invalid for a distribution with {ndim} axes")]
    InvalidAxis { axis: usize, ndim: usize },

    #[error("joint table would need {cells} cells, above the configured limit of {limit}")]
    JointTableTooLarge { cells: u128, limit: usize },

    #[error(transparent)]
    Array(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, InfoError>;

impl InfoError {
    pub(crate) fn columns(expected: &str, found: usize) -> Self {
        InfoError::ShapeMismatch {
            expected: expected.to_string(),
            found: format!("{found} column(s)"),
        }
    }
}
