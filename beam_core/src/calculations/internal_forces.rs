//! Internal shear and bending moment by superposition.
//!
//! The shear V(x) is assembled from one group of Macaulay terms per load,
//! plus the left reaction acting over the whole span. The moment is the
//! exact integral of the shear, `M(x) = ∫₀ˣ V dt`, which reproduces the
//! closed forms term by term:
//!
//! | Load | ΔV(x) | ΔM(x) |
//! |---|---|---|
//! | left reaction R | `+R·⟨x⟩⁰` | `+R·x` |
//! | point P at x₀ | `−P·⟨x − x₀⟩⁰` | `−P·⟨x − x₀⟩` |
//! | UDL w from a | `−w·⟨x − a⟩` | `−w·⟨x − a⟩²/2` |
//! | UVL ramp from m (slope k) | `−k·⟨x − m⟩²/2` | `−k·⟨x − m⟩³/6` |
//!
//! Under [`AnalysisModel::Exact`] every distributed load is closed at its end
//! position by the matching terms of opposite sign, so it only acts on its own
//! interval. Under [`AnalysisModel::Simplified`] the distributed terms stay
//! open to the end of the span and a UVL is the ramp `q·⟨x − m⟩/(n − m)`.
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)

use serde::{Deserialize, Serialize};

use super::reactions::ReactionPair;
use super::singularity::SingularityFn;
use crate::loads::{Load, LoadSet};
use crate::settings::AnalysisModel;

/// Piecewise shear and moment functions, built once and evaluated many times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    shear: SingularityFn,
    moment: SingularityFn,
}

impl InternalForces {
    /// Superpose every load of the set with the left reaction.
    pub fn build(loads: &LoadSet, reactions: &ReactionPair, model: AnalysisModel) -> Self {
        let mut shear = SingularityFn::new();
        shear.push(reactions.left_n, 0.0, 0);

        for load in loads.loads() {
            push_shear_terms(&mut shear, load, model);
        }

        let moment = shear.integrate();
        log::debug!("internal forces: {} shear terms", shear.terms().len());
        InternalForces { shear, moment }
    }

    /// Shear V(x) (N)
    pub fn shear_at(&self, x_m: f64) -> f64 {
        self.shear.eval(x_m)
    }

    /// Bending moment M(x) (N·m)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        self.moment.eval(x_m)
    }

    /// The moment expression, for integration into the elastic curve
    pub fn moment_fn(&self) -> &SingularityFn {
        &self.moment
    }
}

fn push_shear_terms(shear: &mut SingularityFn, load: &Load, model: AnalysisModel) {
    match (model, load) {
        (_, Load::Point(p)) => {
            shear.push(-p.magnitude_n, p.position_m, 0);
        }
        (AnalysisModel::Exact, Load::Distributed(d)) => {
            let w = d.intensity_n_per_m;
            push_linear_segment(shear, d.start_m, w, d.end_m, w);
        }
        (AnalysisModel::Exact, Load::Varying(v)) => {
            let (start, start_w, end, end_w) = v.segment();
            push_linear_segment(shear, start, start_w, end, end_w);
        }
        (AnalysisModel::Simplified, Load::Distributed(d)) => {
            shear.push(-d.intensity_n_per_m, d.start_m, 1);
        }
        (AnalysisModel::Simplified, Load::Varying(v)) => {
            let k = v.peak_intensity_n_per_m / (v.zero_m - v.peak_m);
            shear.push(-0.5 * k, v.peak_m, 2);
        }
    }
}

/// Shear of a load varying linearly from `start_w` at `start` to `end_w` at
/// `end`, closed at `end`.
fn push_linear_segment(shear: &mut SingularityFn, start: f64, start_w: f64, end: f64, end_w: f64) {
    let slope = (end_w - start_w) / (end - start);
    shear.push(-start_w, start, 1);
    shear.push(-0.5 * slope, start, 2);
    shear.push(end_w, end, 1);
    shear.push(0.5 * slope, end, 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::reactions;
    use crate::loads::{DistributedLoad, PointLoad, VaryingLoad};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn forces(loads: &LoadSet, length: f64, model: AnalysisModel) -> InternalForces {
        let r = reactions::solve(loads, length, model);
        InternalForces::build(loads, &r, model)
    }

    #[test]
    fn test_point_load_shear_and_moment() {
        // 10 m span, 1000 N at midspan: M_max = PL/4
        let loads = LoadSet::new().with_load(PointLoad::new(1000.0, 5.0));
        let f = forces(&loads, 10.0, AnalysisModel::Exact);

        assert_relative_eq!(f.shear_at(4.99), 500.0);
        assert_relative_eq!(f.shear_at(5.0), -500.0);
        assert_relative_eq!(f.moment_at(5.0), 2500.0, max_relative = 1e-12);
        assert_abs_diff_eq!(f.moment_at(10.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_load_shear() {
        // 10 m span, 100 N/m: V(0) = wL/2, V(5) = 0, V(10) = -wL/2
        let loads = LoadSet::new().with_load(DistributedLoad::new(100.0, 0.0, 10.0));
        let f = forces(&loads, 10.0, AnalysisModel::Exact);

        assert_relative_eq!(f.shear_at(0.0), 500.0, max_relative = 1e-12);
        assert_abs_diff_eq!(f.shear_at(5.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.shear_at(10.0), -500.0, max_relative = 1e-12);
        assert_relative_eq!(f.moment_at(5.0), 1250.0, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_udl_is_closed_at_its_end() {
        // 10 m span, 100 N/m over [2, 8]: V is flat outside the loaded length
        let loads = LoadSet::new().with_load(DistributedLoad::new(100.0, 2.0, 8.0));
        let f = forces(&loads, 10.0, AnalysisModel::Exact);

        assert_relative_eq!(f.shear_at(1.0), 300.0, max_relative = 1e-12);
        assert_relative_eq!(f.shear_at(9.0), -300.0, max_relative = 1e-12);
        assert_relative_eq!(f.shear_at(9.5), -300.0, max_relative = 1e-12);
        // M(5) = 300*5 - 100*3²/2
        assert_relative_eq!(f.moment_at(5.0), 1050.0, max_relative = 1e-12);
        assert_abs_diff_eq!(f.moment_at(10.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangular_load_peak_moment() {
        // Peak q at the right support, zero at the left: M_max = qL²/(9√3)
        // at x = L/√3
        let (q, l) = (120.0, 6.0);
        let loads = LoadSet::new().with_load(VaryingLoad::new(q, l, 0.0));
        let f = forces(&loads, l, AnalysisModel::Exact);

        let x = l / 3.0_f64.sqrt();
        assert_relative_eq!(
            f.moment_at(x),
            q * l * l / (9.0 * 3.0_f64.sqrt()),
            max_relative = 1e-9
        );
        assert_abs_diff_eq!(f.shear_at(x), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(f.moment_at(l), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simplified_model_terms() {
        // UDL from a = 2 stays open to the end of the span
        let loads = LoadSet::new().with_load(DistributedLoad::new(100.0, 2.0, 4.0));
        let f = forces(&loads, 6.0, AnalysisModel::Simplified);
        // R_left = 100 (half of 200)
        assert_relative_eq!(f.shear_at(5.0), 100.0 - 100.0 * 3.0);
        assert_relative_eq!(f.moment_at(5.0), 100.0 * 5.0 - 100.0 * 9.0 / 2.0);

        // UVL: ΔV = -0.5 q ⟨x-m⟩² / (n-m)
        let loads = LoadSet::new().with_load(VaryingLoad::new(60.0, 1.0, 4.0));
        let f = forces(&loads, 6.0, AnalysisModel::Simplified);
        let r_left = 0.5 * 60.0 * 3.0 / 2.0;
        assert_relative_eq!(f.shear_at(3.0), r_left - 0.5 * 60.0 * 4.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(
            f.moment_at(3.0),
            r_left * 3.0 - 60.0 * 8.0 / (6.0 * 3.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_empty_set_is_zero() {
        let f = forces(&LoadSet::new(), 4.0, AnalysisModel::Exact);
        for x in [0.0, 1.3, 4.0] {
            assert_eq!(f.shear_at(x), 0.0);
            assert_eq!(f.moment_at(x), 0.0);
        }
    }
}
