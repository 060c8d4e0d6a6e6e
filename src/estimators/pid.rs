// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partial information decomposition of two sources about one target.
//!
//! The information that sources X and Y jointly carry about a target Z,
//! I(X,Y;Z), is split into four non-negative parts:
//!
//! - **redundancy**: the expected minimum specific information,
//!   Σ_z p(z) · min(I(X; Z=z), I(Y; Z=z))
//! - **unique_1** / **unique_2**: I(X;Z) and I(Y;Z) minus the redundancy
//! - **synergy**: the interaction information I(X;Y|Z) - I(X;Y) plus the redundancy
//!
//! Specific information of a source S about a single target state z is
//!
//! $$ I(S; Z=z) = \sum_s p(s|z) \log \frac{p(s,z)}{p(s)\,p(z)} $$
//!
//! with zero-probability terms contributing 0.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis, Zip};

use crate::config::MeasureConfig;
use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::discrete_utils::Samples;
use crate::estimators::approaches::discrete::formulas::{TrivariateEntropies, finite_ln};
use crate::estimators::approaches::discrete::joint::JointDistribution;
use crate::estimators::traits::{GlobalValue, MutualInformationEstimator};

/// The four components of a two-source decomposition, in the configured base.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidComponents {
    pub redundancy: f64,
    pub unique_1: f64,
    pub unique_2: f64,
    pub synergy: f64,
}

impl PidComponents {
    /// Sum of all four parts; equals I(X,Y;Z) up to rounding.
    pub fn total(&self) -> f64 {
        self.redundancy + self.unique_1 + self.unique_2 + self.synergy
    }
}

/// Specific information a source carries about one target state.
///
/// # Arguments
///
/// * `p_sz` - Joint probabilities p(s, z_i) for every source state s
/// * `p_s` - Source marginal p(s)
/// * `p_z_i` - Probability of the target state
/// * `base` - Logarithm base of the result
pub fn specific_information(
    p_sz: ArrayView1<'_, f64>,
    p_s: ArrayView1<'_, f64>,
    p_z_i: f64,
    base: f64,
) -> Result<f64> {
    if p_sz.len() != p_s.len() {
        return Err(InfoError::ShapeMismatch {
            expected: format!("{} source states", p_s.len()),
            found: format!("{} joint entries", p_sz.len()),
        });
    }
    if p_z_i <= 0.0 {
        // unobserved target state: weighted by p(z) = 0 in the redundancy
        return Ok(0.0);
    }
    let si = Zip::from(&p_sz)
        .and(&p_s)
        .fold(0.0_f64, |acc, &p_joint, &p_src| {
            acc + (p_joint / p_z_i) * finite_ln(p_joint / (p_src * p_z_i))
        });
    Ok(si / base.ln())
}

/// Specific information of a source about every target state.
///
/// `p_sz` has one row per source state and one column per target state.
pub fn specific_information_profile(
    p_sz: ArrayView2<'_, f64>,
    p_s: ArrayView1<'_, f64>,
    p_z: ArrayView1<'_, f64>,
    base: f64,
) -> Result<Array1<f64>> {
    if p_sz.dim() != (p_s.len(), p_z.len()) {
        return Err(InfoError::ShapeMismatch {
            expected: format!("({}, {}) joint table", p_s.len(), p_z.len()),
            found: format!("{:?}", p_sz.shape()),
        });
    }
    p_sz.axis_iter(Axis(1))
        .zip(p_z.iter())
        .map(|(column, &p_z_i)| specific_information(column, p_s, p_z_i, base))
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}

/// Redundancy as the expected minimum specific information over target states.
pub fn redundancy(
    p_z: ArrayView1<'_, f64>,
    p_x: ArrayView1<'_, f64>,
    p_y: ArrayView1<'_, f64>,
    p_xz: ArrayView2<'_, f64>,
    p_yz: ArrayView2<'_, f64>,
    base: f64,
) -> Result<f64> {
    let si_x = specific_information_profile(p_xz, p_x, p_z, base)?;
    let si_y = specific_information_profile(p_yz, p_y, p_z, base)?;
    Ok(expected_minimum(p_z, &si_x, &si_y))
}

fn expected_minimum(p_z: ArrayView1<'_, f64>, si_x: &Array1<f64>, si_y: &Array1<f64>) -> f64 {
    Zip::from(&p_z)
        .and(si_x)
        .and(si_y)
        .fold(0.0, |acc, &p, &a, &b| acc + p * a.min(b))
}

/// Partial information decomposition estimator for two sources and one target.
///
/// Builds a single joint table over (X, Y, Z) and derives every marginal from it.
/// The global value is I(X,Y;Z), the total the four components add up to.
///
/// Rounding can push the components marginally below zero; they are clamped at 0.
#[derive(Debug, Clone)]
pub struct PartialInformationDecomposition {
    entropies: TrivariateEntropies,
    p_z: Array1<f64>,
    si_x: Array1<f64>,
    si_y: Array1<f64>,
    components: PidComponents,
}

impl PartialInformationDecomposition {
    /// Decompose the information that `x` and `y` carry about `z`.
    ///
    /// When `y` and `z` are omitted, `x` must hold the three columns (X, Y, Z).
    pub fn new<T: Ord + Clone>(
        x: impl Into<Samples<T>>,
        y: Option<Array1<T>>,
        z: Option<Array1<T>>,
        config: &MeasureConfig,
    ) -> Result<Self> {
        let joint = JointDistribution::from_columns(x, y, z, 3, config)?;
        Self::from_joint(&joint, config.base)
    }

    /// Decompose a joint distribution whose axes are (X, Y, Z).
    pub fn from_joint(joint: &JointDistribution, base: f64) -> Result<Self> {
        if joint.ndim() != 3 {
            return Err(InfoError::columns("3 axes (x, y, z)", joint.ndim()));
        }
        let entropies = TrivariateEntropies::from_joint(joint, base)?;

        let p_x = joint.marginal_1d(0)?;
        let p_y = joint.marginal_1d(1)?;
        let p_z = joint.marginal_1d(2)?;
        let p_xz = joint.marginal(&[0, 2])?;
        let p_yz = joint.marginal(&[1, 2])?;

        let si_x = specific_information_profile(p_xz.view_2d()?, p_x.view(), p_z.view(), base)?;
        let si_y = specific_information_profile(p_yz.view_2d()?, p_y.view(), p_z.view(), base)?;
        let red = expected_minimum(p_z.view(), &si_x, &si_y).max(0.0);

        let components = PidComponents {
            redundancy: red,
            unique_1: (entropies.mi_xz() - red).max(0.0),
            unique_2: (entropies.mi_yz() - red).max(0.0),
            synergy: (entropies.interaction() + red).max(0.0),
        };

        Ok(Self {
            entropies,
            p_z,
            si_x,
            si_y,
            components,
        })
    }

    pub fn components(&self) -> PidComponents {
        self.components
    }

    pub fn redundancy(&self) -> f64 {
        self.components.redundancy
    }

    pub fn unique_1(&self) -> f64 {
        self.components.unique_1
    }

    pub fn unique_2(&self) -> f64 {
        self.components.unique_2
    }

    pub fn synergy(&self) -> f64 {
        self.components.synergy
    }

    /// I(X,Y;Z)
    pub fn mutual_information(&self) -> f64 {
        self.entropies.mi_xy_z()
    }

    /// Entropies of all marginals the decomposition was computed from.
    pub fn entropies(&self) -> &TrivariateEntropies {
        &self.entropies
    }

    /// Target marginal p(z), aligned with the specific-information profiles.
    pub fn target_probabilities(&self) -> ArrayView1<'_, f64> {
        self.p_z.view()
    }

    /// I(X; Z=z) for every target state z.
    pub fn specific_information_x(&self) -> ArrayView1<'_, f64> {
        self.si_x.view()
    }

    /// I(Y; Z=z) for every target state z.
    pub fn specific_information_y(&self) -> ArrayView1<'_, f64> {
        self.si_y.view()
    }
}

impl GlobalValue for PartialInformationDecomposition {
    fn global_value(&self) -> f64 {
        self.mutual_information()
    }
}

impl MutualInformationEstimator for PartialInformationDecomposition {}
