// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodecomp
//!
//! Discrete information-theoretic measures and the two-source partial
//! information decomposition (PID), estimated from sampled categorical data.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodecomp::{MeasureConfig, information_entropy, partial_information_decomposition};
//! use ndarray::array;
//!
//! let config = MeasureConfig::default(); // maximum likelihood, bits
//!
//! let h = information_entropy(array![0, 1, 0, 1], &config).unwrap();
//! assert!((h - 1.0).abs() < 1e-12);
//!
//! // Z = X xor Y: all information about Z is synergistic
//! let x = array![0, 0, 1, 1];
//! let y = array![0, 1, 0, 1];
//! let z = array![0, 1, 1, 0];
//! let pid = partial_information_decomposition(x, Some(y), Some(z), &config).unwrap();
//! assert!((pid.synergy - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Measures
//!
//! | Measure | Formula |
//! |---------|---------|
//! | Entropy | H(X) = -Σ p(x) log p(x) |
//! | Mutual Information | I(X;Y) = H(X) + H(Y) - H(X,Y) |
//! | Conditional Entropy | H(X\|Y) = H(X,Y) - H(Y) |
//! | Conditional Mutual Information | I(X;Y\|Z) = H(X,Z) + H(Y,Z) - H(X,Y,Z) - H(Z) |
//! | Interaction Information | II = I(X;Y\|Z) - I(X;Y) |
//! | Partial Information Decomposition | {redundancy, unique_1, unique_2, synergy} |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: free functions and factory types (`Entropy`, `MutualInformation`)
//! 2. **Estimators**: one type per measure, built once from a single joint table
//! 3. **Discrete approach**: symbol maps, dense frequency tables, joint
//!    distributions with axis-sum marginals, and the shared entropy primitive
//!
//! Every multi-variable measure builds one joint table and derives all of its
//! marginals by summing out axes, so the measures stay consistent with each other.
//!
//! ## Scaling
//!
//! The dense joint table has one cell per combination of observed symbols,
//! i.e. the product of the per-column cardinalities. Construction fails with
//! [`InfoError::JointTableTooLarge`] when that product exceeds
//! [`MeasureConfig::max_joint_cells`]. [`information_entropy`] only counts the
//! distinct observed rows and is not subject to this limit.
//!
//! ## Feature Flags
//!
//! - `parallel`: spread batch evaluation over the rayon thread pool

pub mod config;
pub mod error;
pub mod estimators;

pub use config::{BITS, DITS, Estimator, MeasureConfig, NATS};
pub use error::{InfoError, Result};
pub use estimators::approaches::discrete::{JointDistribution, Samples};
pub use estimators::{
    GlobalValue, PidComponents, conditional_entropy, conditional_mutual_information,
    information_entropy, interaction_information, mutual_information,
    partial_information_decomposition,
};
