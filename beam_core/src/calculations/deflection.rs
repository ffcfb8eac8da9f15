//! Elastic curve by double integration of M/EI.
//!
//! ```text
//! θ(x) = ∫ M/EI dx + C1
//! v(x) = ∫∫ M/EI dx dx + C1·x + C0
//! ```
//!
//! The two constants come from the pin and roller: `v(0) = 0` fixes `C0`,
//! `v(L) = 0` then fixes `C1 = −(v_raw(L) + C0)/L`. Because every Macaulay
//! anchor sits at or right of the left support, the raw double integral is
//! already zero at x = 0 and `C0` comes out as zero; it is still solved for
//! rather than assumed.
//!
//! Deflection is positive upward, so a sagging beam has negative `v`.

use serde::{Deserialize, Serialize};

use super::singularity::SingularityFn;

/// Slope and deflection with both integration constants resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticCurve {
    slope_raw: SingularityFn,
    deflection_raw: SingularityFn,
    /// Constant term of the deflection (m)
    pub c0: f64,
    /// Linear correction term of the deflection, also the slope offset (rad)
    pub c1: f64,
}

impl ElasticCurve {
    /// Integrate `moment / ei` twice over a span of `length_m`.
    ///
    /// `length_m` and `ei` must be positive; [`super::beam_analysis::Beam`]
    /// guarantees both.
    pub fn solve(moment: &SingularityFn, ei: f64, length_m: f64) -> Self {
        let slope_raw = moment.scaled(1.0 / ei).integrate();
        let deflection_raw = slope_raw.integrate();

        let c0 = -deflection_raw.eval(0.0);
        let c1 = -(deflection_raw.eval(length_m) + c0) / length_m;
        log::debug!("elastic curve: C0 = {:e}, C1 = {:e}", c0, c1);

        ElasticCurve {
            slope_raw,
            deflection_raw,
            c0,
            c1,
        }
    }

    /// Slope θ(x) (rad)
    pub fn slope_at(&self, x_m: f64) -> f64 {
        self.slope_raw.eval(x_m) + self.c1
    }

    /// Deflection v(x) (m), positive upward
    pub fn deflection_at(&self, x_m: f64) -> f64 {
        self.deflection_raw.eval(x_m) + self.c1 * x_m + self.c0
    }
}
