//! Simply-Supported Beam Analysis
//!
//! Runs the analysis pipeline for a single span under any mix of point loads,
//! uniformly distributed loads and uniformly varying loads:
//!
//! 1. Reactions from static equilibrium
//! 2. Shear and moment by superposition of Macaulay terms
//! 3. Elastic curve by double integration of M/EI with v(0) = v(L) = 0
//! 4. Evaluation on a grid of stations
//!
//! Every expression is built once in [`BeamAnalysis::new`] and then evaluated
//! by substitution, so sampling costs one pass over the terms per station.
//!
//! ## Sign Convention
//! - Loads are positive downward, reactions positive upward
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Positive deflection: upward (a sagging beam deflects negative)
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam_analysis::{Beam, BeamAnalysis};
//! use beam_core::loads::{LoadSet, PointLoad};
//! use beam_core::settings::AnalysisModel;
//!
//! // 4 m beam, EI normalized to 1, 10 N at midspan
//! let beam = Beam::new(4.0, 1.0).unwrap();
//! let loads = LoadSet::new().with_load(PointLoad::new(10.0, 2.0));
//! let analysis = BeamAnalysis::new(beam, &loads, AnalysisModel::Exact).unwrap();
//!
//! let series = analysis.sample(0.5).unwrap();
//! assert_eq!(series.len(), 9);
//! assert!((series.max_moment() - 10.0).abs() < 1e-9);
//! ```

use serde::Serialize;

use super::deflection::ElasticCurve;
use super::internal_forces::InternalForces;
use super::reactions::{self, ReactionPair};
use super::sampling::{grid_positions, Sample, SampleSeries};
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSet;
use crate::materials::MaterialConfig;
use crate::section::RectangularSection;
use crate::settings::AnalysisModel;

/// Span length and flexural rigidity. Both are positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Beam {
    length_m: f64,
    ei_nm2: f64,
}

impl Beam {
    /// Create a beam of `length_m` with flexural rigidity `ei_nm2` (N·m²)
    pub fn new(length_m: f64, ei_nm2: f64) -> CalcResult<Self> {
        if !length_m.is_finite() || length_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "length_m",
                length_m.to_string(),
                "Beam length must be positive",
            ));
        }
        if !ei_nm2.is_finite() || ei_nm2 <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "ei_nm2",
                ei_nm2.to_string(),
                "Flexural rigidity EI must be positive",
            ));
        }
        Ok(Beam { length_m, ei_nm2 })
    }

    /// Beam with EI = E·I taken from a section and material
    pub fn from_section(
        length_m: f64,
        section: &RectangularSection,
        material: &MaterialConfig,
    ) -> CalcResult<Self> {
        Self::new(length_m, material.elastic_modulus_pa * section.moment_of_inertia())
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn ei_nm2(&self) -> f64 {
        self.ei_nm2
    }

    /// Reject positions outside [0, L]
    pub fn check_position(&self, field: &str, x_m: f64) -> CalcResult<()> {
        if (0.0..=self.length_m).contains(&x_m) {
            Ok(())
        } else {
            Err(CalcError::out_of_range(field, x_m, self.length_m))
        }
    }
}

/// Derived functions for one beam and load set.
#[derive(Debug, Clone)]
pub struct BeamAnalysis {
    beam: Beam,
    model: AnalysisModel,
    reactions: ReactionPair,
    forces: InternalForces,
    curve: ElasticCurve,
}

impl BeamAnalysis {
    /// Validate the loads against the beam and build every expression.
    pub fn new(beam: Beam, loads: &LoadSet, model: AnalysisModel) -> CalcResult<Self> {
        loads.validate(beam.length_m)?;

        let reactions = reactions::solve(loads, beam.length_m, model);
        let forces = InternalForces::build(loads, &reactions, model);
        let curve = ElasticCurve::solve(forces.moment_fn(), beam.ei_nm2, beam.length_m);

        Ok(BeamAnalysis {
            beam,
            model,
            reactions,
            forces,
            curve,
        })
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn model(&self) -> AnalysisModel {
        self.model
    }

    pub fn reactions(&self) -> ReactionPair {
        self.reactions
    }

    pub fn elastic_curve(&self) -> &ElasticCurve {
        &self.curve
    }

    /// Shear V(x) (N)
    pub fn shear_at(&self, x_m: f64) -> f64 {
        self.forces.shear_at(x_m)
    }

    /// Moment M(x) (N·m)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        self.forces.moment_at(x_m)
    }

    /// Slope θ(x) (rad)
    pub fn slope_at(&self, x_m: f64) -> f64 {
        self.curve.slope_at(x_m)
    }

    /// Deflection v(x) (m), positive upward
    pub fn deflection_at(&self, x_m: f64) -> f64 {
        self.curve.deflection_at(x_m)
    }

    /// Evaluate a single station, rejecting positions off the span.
    pub fn sample_at(&self, x_m: f64) -> CalcResult<Sample> {
        self.beam.check_position("x_m", x_m)?;
        Ok(self.eval(x_m))
    }

    /// Evaluate the full grid with spacing `step_m`.
    pub fn sample(&self, step_m: f64) -> CalcResult<SampleSeries> {
        let positions = grid_positions(self.beam.length_m, step_m)?;
        let samples = positions
            .into_iter()
            .map(|x| {
                let s = self.eval(x);
                log::trace!(
                    "x = {:.4} m: V = {:.6} N, M = {:.6} N·m, v = {:e} m",
                    x,
                    s.shear_n,
                    s.moment_nm,
                    s.deflection_m
                );
                s
            })
            .collect();
        Ok(SampleSeries::from_samples(samples))
    }

    fn eval(&self, x_m: f64) -> Sample {
        Sample {
            x_m,
            shear_n: self.shear_at(x_m),
            moment_nm: self.moment_at(x_m),
            deflection_m: self.deflection_at(x_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{DistributedLoad, PointLoad, VaryingLoad};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_beam_rejects_bad_geometry() {
        assert_eq!(Beam::new(0.0, 1.0).unwrap_err().error_code(), "INVALID_GEOMETRY");
        assert_eq!(Beam::new(4.0, -2.0).unwrap_err().error_code(), "INVALID_GEOMETRY");
        assert!(Beam::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_beam_from_section() {
        let section = RectangularSection::new(0.15, 0.30, 0.01);
        let beam = Beam::from_section(6.0, &section, &MaterialConfig::structural_steel()).unwrap();
        assert_relative_eq!(beam.ei_nm2(), 200e9 * 3.375e-4, max_relative = 1e-12);
    }

    #[test]
    fn test_point_load_deflection_matches_closed_form() {
        // P at a from the left: for x <= a, v = -Pbx(L² - b² - x²)/(6EIL)
        let (p, a, l, ei) = (1000.0, 3.0, 10.0, 5.0e5);
        let b = l - a;
        let beam = Beam::new(l, ei).unwrap();
        let loads = LoadSet::new().with_load(PointLoad::new(p, a));
        let analysis = BeamAnalysis::new(beam, &loads, AnalysisModel::Exact).unwrap();

        for x in [0.5, 1.0, 2.0, 3.0] {
            let expected = -p * b * x * (l * l - b * b - x * x) / (6.0 * ei * l);
            assert_relative_eq!(analysis.deflection_at(x), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_partial_udl_deflection_matches_point_load_sum() {
        // a partial UDL approximated by many point loads converges to the exact curve
        let (w, a, c, l, ei) = (200.0, 1.0, 4.0, 8.0, 1.0e6);
        let beam = Beam::new(l, ei).unwrap();
        let exact = BeamAnalysis::new(
            beam,
            &LoadSet::new().with_load(DistributedLoad::new(w, a, c)),
            AnalysisModel::Exact,
        )
        .unwrap();

        let n = 2000;
        let seg = (c - a) / n as f64;
        let lumped: LoadSet = (0..n)
            .map(|i| PointLoad::new(w * seg, a + (i as f64 + 0.5) * seg).into())
            .collect();
        let approx = BeamAnalysis::new(beam, &lumped, AnalysisModel::Exact).unwrap();

        for x in [1.0, 2.5, 4.0, 6.0] {
            assert_relative_eq!(
                exact.deflection_at(x),
                approx.deflection_at(x),
                max_relative = 1e-5
            );
            assert_relative_eq!(exact.moment_at(x), approx.moment_at(x), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_sample_at_rejects_outside_span() {
        let beam = Beam::new(6.0, 1.0).unwrap();
        let analysis = BeamAnalysis::new(beam, &LoadSet::new(), AnalysisModel::Exact).unwrap();
        assert_eq!(analysis.sample_at(6.01).unwrap_err().error_code(), "OUT_OF_RANGE_POSITION");
        assert_eq!(analysis.sample_at(-0.1).unwrap_err().error_code(), "OUT_OF_RANGE_POSITION");
        assert!(analysis.sample_at(6.0).is_ok());
    }

    #[test]
    fn test_invalid_load_rejected_before_analysis() {
        let beam = Beam::new(6.0, 1.0).unwrap();
        let loads = LoadSet::new().with_load(VaryingLoad::new(10.0, 7.0, 2.0));
        assert_eq!(
            BeamAnalysis::new(beam, &loads, AnalysisModel::Exact).unwrap_err().error_code(),
            "OUT_OF_RANGE_POSITION"
        );
    }

    #[test]
    fn test_series_is_ordered_and_closed() {
        let beam = Beam::new(5.3, 2.0e4).unwrap();
        let loads = LoadSet::new()
            .with_load(PointLoad::new(400.0, 1.2))
            .with_load(VaryingLoad::new(90.0, 5.3, 2.0));
        let analysis = BeamAnalysis::new(beam, &loads, AnalysisModel::Exact).unwrap();
        let series = analysis.sample(0.5).unwrap();

        assert!(series.samples().windows(2).all(|w| w[0].x_m < w[1].x_m));
        let last = series.samples().last().unwrap();
        assert_eq!(last.x_m, 5.3);
        assert_abs_diff_eq!(last.deflection_m, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(last.moment_nm, 0.0, epsilon = 1e-9);
    }
}
