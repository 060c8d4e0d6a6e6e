// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: frequency counting, joint tables, marginals and
// the entropy formulas shared by every measure.

pub mod discrete_utils;
pub mod formulas;
pub mod frequency;
pub mod joint;
pub mod mle;

// Additional helpers
pub mod discrete_batch;

pub use discrete_utils::{Samples, SymbolMap, count_distinct_rows, join_columns};
pub use frequency::FrequencyTable;
pub use joint::JointDistribution;
pub use mle::MaximumLikelihood;
