//! Support reactions from global static equilibrium.
//!
//! ## Sign Convention
//! - Loads are positive downward
//! - Reactions are positive upward
//!
//! For every load set `R_left + R_right` equals the sum of the load
//! resultants. Under [`AnalysisModel::Exact`] the split also satisfies moment
//! equilibrium about the left support, `R_right·L = Σ F·x̄`. Under
//! [`AnalysisModel::Simplified`] each distributed resultant is split evenly
//! between the supports, which only balances moments when the load is
//! symmetric about midspan.

use serde::{Deserialize, Serialize};

use crate::loads::{Load, LoadSet};
use crate::settings::AnalysisModel;

/// Left and right support reactions (N), positive upward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionPair {
    pub left_n: f64,
    pub right_n: f64,
}

impl ReactionPair {
    /// Sum of both reactions (N)
    pub fn total(&self) -> f64 {
        self.left_n + self.right_n
    }
}

/// Reaction contribution of a single load as `(left, right)`
pub fn load_reactions(load: &Load, length_m: f64, model: AnalysisModel) -> (f64, f64) {
    let resultant = load.resultant();
    match (model, load) {
        (AnalysisModel::Simplified, Load::Distributed(_) | Load::Varying(_)) => {
            (resultant / 2.0, resultant / 2.0)
        }
        _ => {
            let right = resultant * load.centroid() / length_m;
            (resultant - right, right)
        }
    }
}

/// Solve the reactions of a simply-supported span of `length_m` for the whole set.
pub fn solve(loads: &LoadSet, length_m: f64, model: AnalysisModel) -> ReactionPair {
    let reactions = loads
        .loads()
        .iter()
        .map(|load| load_reactions(load, length_m, model))
        .fold(ReactionPair::default(), |acc, (left, right)| ReactionPair {
            left_n: acc.left_n + left,
            right_n: acc.right_n + right,
        });

    log::debug!(
        "reactions ({:?}, {} loads): R_left = {:.6} N, R_right = {:.6} N",
        model,
        loads.len(),
        reactions.left_n,
        reactions.right_n
    );
    reactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{DistributedLoad, PointLoad, VaryingLoad};
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load_reactions() {
        // 10 m span, 1000 N at 3 m: R1 = P(L-a)/L, R2 = Pa/L
        let loads = LoadSet::new().with_load(PointLoad::new(1000.0, 3.0));
        let r = solve(&loads, 10.0, AnalysisModel::Exact);
        assert_relative_eq!(r.left_n, 700.0, max_relative = 1e-12);
        assert_relative_eq!(r.right_n, 300.0, max_relative = 1e-12);

        // point loads use statics in both models
        let r = solve(&loads, 10.0, AnalysisModel::Simplified);
        assert_relative_eq!(r.left_n, 700.0, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_udl_exact_vs_simplified() {
        // 10 m span, 100 N/m over [0, 4]: W = 400 N at 2 m
        let loads = LoadSet::new().with_load(DistributedLoad::new(100.0, 0.0, 4.0));

        let exact = solve(&loads, 10.0, AnalysisModel::Exact);
        assert_relative_eq!(exact.left_n, 320.0, max_relative = 1e-12);
        assert_relative_eq!(exact.right_n, 80.0, max_relative = 1e-12);

        let simplified = solve(&loads, 10.0, AnalysisModel::Simplified);
        assert_eq!(simplified.left_n, 200.0);
        assert_eq!(simplified.right_n, 200.0);
    }

    #[test]
    fn test_triangular_load_reactions() {
        // 6 m span, peak 90 N/m at the left support falling to 0 at 6 m
        // W = 270 N at 2 m -> R_right = 90, R_left = 180
        let loads = LoadSet::new().with_load(VaryingLoad::new(90.0, 0.0, 6.0));
        let r = solve(&loads, 6.0, AnalysisModel::Exact);
        assert_relative_eq!(r.left_n, 180.0, max_relative = 1e-12);
        assert_relative_eq!(r.right_n, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_moment_equilibrium_about_left_support() {
        let length = 8.0;
        let loads = LoadSet::new()
            .with_load(PointLoad::new(1200.0, 1.5))
            .with_load(DistributedLoad::new(250.0, 2.0, 7.0))
            .with_load(VaryingLoad::new(400.0, 8.0, 5.0));
        let r = solve(&loads, length, AnalysisModel::Exact);

        let moment: f64 = loads.loads().iter().map(|l| l.resultant() * l.centroid()).sum();
        assert_relative_eq!(r.right_n * length, moment, max_relative = 1e-12);
        assert_relative_eq!(r.total(), loads.total_resultant(), max_relative = 1e-12);
    }

    #[test]
    fn test_empty_set_has_zero_reactions() {
        let r = solve(&LoadSet::new(), 5.0, AnalysisModel::Exact);
        assert_eq!(r, ReactionPair::default());
    }
}
