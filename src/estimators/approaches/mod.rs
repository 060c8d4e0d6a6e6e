// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;

// Unified re-exports so users can import
// infodecomp::estimators::approaches::* ergonomically.
pub use discrete::discrete_batch::{DiscreteEntropyBatchRows, pid_batch};
pub use discrete::formulas::TrivariateEntropies;
pub use discrete::{FrequencyTable, JointDistribution, MaximumLikelihood, Samples, SymbolMap};
