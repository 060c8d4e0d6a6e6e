// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shannon entropy and the entropy-summation formulas built on top of it.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::Result;
use crate::estimators::approaches::discrete::joint::JointDistribution;

/// Natural logarithm with non-finite results (log 0, log of 0/0) replaced by 0.
#[inline]
pub(crate) fn finite_ln(x: f64) -> f64 {
    let l = x.ln();
    if l.is_finite() { l } else { 0.0 }
}

/// Shannon entropy H = -Σ p log_base(p) of a probability array of any dimensionality.
///
/// Zero-probability cells contribute exactly 0: the logarithms are zeroed before
/// weighting, so `0 * ln 0` never turns into NaN.
pub fn entropy<S, D>(probabilities: &ArrayBase<S, D>, base: f64) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let log_p = probabilities.mapv(finite_ln);
    let h = -(probabilities * &log_p).sum() / base.ln();
    // avoid reporting -0.0 for point masses
    h + 0.0
}

/// I(X;Y) = H(X) + H(Y) - H(X,Y)
pub fn mutual_information(h_x: f64, h_y: f64, h_xy: f64) -> f64 {
    h_x + h_y - h_xy
}

/// H(X|Y) = H(X,Y) - H(Y)
pub fn conditional_entropy(h_xy: f64, h_y: f64) -> f64 {
    h_xy - h_y
}

/// I(X;Y|Z) = H(X,Z) + H(Y,Z) - H(X,Y,Z) - H(Z)
pub fn conditional_mutual_information(h_xz: f64, h_yz: f64, h_xyz: f64, h_z: f64) -> f64 {
    h_xz + h_yz - h_xyz - h_z
}

/// II(X;Y;Z) = I(X;Y|Z) - I(X;Y)
pub fn interaction_information(cmi: f64, mi: f64) -> f64 {
    cmi - mi
}

/// Entropies of every marginal of a three-variable joint table (X, Y, Z).
///
/// All seven values come from axis sums of the same table, so the composite
/// measures derived from them are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrivariateEntropies {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub xy: f64,
    pub xz: f64,
    pub yz: f64,
    pub xyz: f64,
}

impl TrivariateEntropies {
    pub fn from_joint(joint: &JointDistribution, base: f64) -> Result<Self> {
        fn h(joint: &JointDistribution, axes: &[usize], base: f64) -> Result<f64> {
            Ok(joint.marginal(axes)?.entropy(base))
        }
        Ok(Self {
            x: h(joint, &[0], base)?,
            y: h(joint, &[1], base)?,
            z: h(joint, &[2], base)?,
            xy: h(joint, &[0, 1], base)?,
            xz: h(joint, &[0, 2], base)?,
            yz: h(joint, &[1, 2], base)?,
            xyz: joint.entropy(base),
        })
    }

    pub fn mi_xy(&self) -> f64 {
        mutual_information(self.x, self.y, self.xy)
    }

    pub fn mi_xz(&self) -> f64 {
        mutual_information(self.x, self.z, self.xz)
    }

    pub fn mi_yz(&self) -> f64 {
        mutual_information(self.y, self.z, self.yz)
    }

    /// I(X,Y;Z), the information both sources carry about the target together.
    pub fn mi_xy_z(&self) -> f64 {
        mutual_information(self.xy, self.z, self.xyz)
    }

    pub fn cmi(&self) -> f64 {
        conditional_mutual_information(self.xz, self.yz, self.xyz, self.z)
    }

    pub fn interaction(&self) -> f64 {
        interaction_information(self.cmi(), self.mi_xy())
    }
}
