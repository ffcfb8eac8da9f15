//! # Simply-Supported Beam Calculation
//!
//! Ties the analysis engine to a section and material: builds EI from the
//! section, samples shear/moment/deflection along the span and compares the
//! peaks against the design strengths.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions, single span
//! - Linear-elastic material, small deflections
//! - Rectangular section
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamInput};
//! use beam_core::loads::{DistributedLoad, LoadSet};
//! use beam_core::materials::MaterialConfig;
//! use beam_core::section::RectangularSection;
//! use beam_core::settings::AnalysisSettings;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     span_m: 6.0,
//!     section: RectangularSection::new(0.15, 0.30, 0.01),
//!     material: MaterialConfig::structural_steel(),
//!     loads: LoadSet::new().with_load(DistributedLoad::new(100.0, 0.0, 6.0)),
//!     settings: AnalysisSettings::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_nm - 450.0).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::beam_analysis::{Beam, BeamAnalysis};
use super::reactions::ReactionPair;
use super::sampling::{Extremes, SampleSeries};
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSet;
use crate::materials::MaterialConfig;
use crate::section::{DesignStrength, RectangularSection, SectionProperties};
use crate::settings::AnalysisSettings;

/// Input parameters for a simply-supported beam.
///
/// All inputs use SI units (m, N, N/m, Pa).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "span_m": 6.0,
///   "section": { "width_m": 0.15, "depth_m": 0.30, "web_thickness_m": 0.01 },
///   "material": {
///     "elastic_modulus_pa": 200000000000.0,
///     "yield_stress_pa": 250000000.0,
///     "gamma_m0": 1.5,
///     "beta_b": 1.0
///   },
///   "loads": [
///     { "type": "Distributed", "intensity_n_per_m": 100.0, "start_m": 0.0, "end_m": 6.0 },
///     { "type": "Point", "magnitude_n": 5000.0, "position_m": 2.0 }
///   ],
///   "settings": { "grid_step_m": 0.5, "model": "Exact" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span between the supports (m)
    pub span_m: f64,

    /// Cross-section dimensions
    pub section: RectangularSection,

    /// Elastic and design constants
    #[serde(default)]
    pub material: MaterialConfig,

    /// Loads acting on the span
    #[serde(default)]
    pub loads: LoadSet,

    /// Grid step and load model
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        self.section.validate()?;
        self.material.validate()?;
        self.settings.validate_for_span(self.span_m)?;
        self.loads.validate(self.span_m)
    }

    /// Beam with EI from the section and material
    pub fn beam(&self) -> CalcResult<Beam> {
        Beam::from_section(self.span_m, &self.section, &self.material)
    }
}

/// Results of a beam calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Label copied from the input
    pub label: String,
    /// Span (m)
    pub span_m: f64,
    /// Yield strength used for the design strengths (Pa)
    pub yield_stress_pa: f64,

    /// Support reactions (N)
    pub reactions: ReactionPair,

    /// Station-by-station shear, moment and deflection
    pub samples: SampleSeries,

    /// Largest signed shear over the stations (N)
    pub max_shear_n: f64,
    /// Largest signed moment over the stations (N·m)
    pub max_moment_nm: f64,
    /// Largest magnitudes with their positions
    pub extremes: Extremes,

    /// Section properties
    pub section: SectionProperties,
    /// Design bending and shear strength
    pub design_strength: DesignStrength,

    /// |M|max / M_d
    pub bending_unity: f64,
    /// |V|max / V_d
    pub shear_unity: f64,
}

impl BeamResult {
    /// Check if the beam passes both strength checks
    pub fn passes(&self) -> bool {
        self.bending_unity <= 1.0 && self.shear_unity <= 1.0
    }

    /// Get the governing check
    pub fn governing_condition(&self) -> &'static str {
        if self.bending_unity >= self.shear_unity {
            "Bending"
        } else {
            "Shear"
        }
    }
}

/// Run the full analysis for a beam input.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;
    log::debug!(
        "calculating beam '{}' ({} loads, {:?})",
        input.label,
        input.loads.len(),
        input.settings.model
    );

    let beam = input.beam()?;
    let analysis = BeamAnalysis::new(beam, &input.loads, input.settings.model)?;
    let samples = analysis.sample(input.settings.grid_step_m)?;

    let extremes = samples.extremes();
    let design_strength = DesignStrength::compute(&input.section, &input.material);

    Ok(BeamResult {
        label: input.label.clone(),
        span_m: input.span_m,
        yield_stress_pa: input.material.yield_stress_pa,
        reactions: analysis.reactions(),
        max_shear_n: samples.max_shear(),
        max_moment_nm: samples.max_moment(),
        extremes,
        section: input.section.properties(),
        bending_unity: extremes.moment_nm.value.abs() / design_strength.moment_nm,
        shear_unity: extremes.shear_n.value.abs() / design_strength.shear_n,
        design_strength,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{DistributedLoad, PointLoad};
    use approx::assert_relative_eq;

    fn input() -> BeamInput {
        BeamInput {
            label: "B-1".to_string(),
            span_m: 6.0,
            section: RectangularSection::new(0.15, 0.30, 0.01),
            material: MaterialConfig::structural_steel(),
            loads: LoadSet::new().with_load(DistributedLoad::new(100.0, 0.0, 6.0)),
            settings: AnalysisSettings::default(),
        }
    }

    #[test]
    fn test_calculate_uniform_beam() {
        let result = calculate(&input()).unwrap();

        assert_relative_eq!(result.reactions.left_n, 300.0, max_relative = 1e-12);
        assert_relative_eq!(result.reactions.right_n, 300.0, max_relative = 1e-12);
        assert_relative_eq!(result.max_moment_nm, 450.0, max_relative = 1e-12);
        assert_relative_eq!(result.max_shear_n, 300.0, max_relative = 1e-12);
        assert_eq!(result.samples.len(), 13);
        assert_eq!(result.extremes.moment_nm.x_m, 3.0);

        // δ = 5wL⁴/(384EI), downward
        let ei = 200e9 * 3.375e-4;
        assert_relative_eq!(
            result.extremes.deflection_m.value,
            -5.0 * 100.0 * 6.0_f64.powi(4) / (384.0 * ei),
            max_relative = 1e-9
        );
        assert!(result.passes());
        assert_eq!(result.governing_condition(), "Bending");
    }

    #[test]
    fn test_unity_ratios() {
        let mut beam = input();
        beam.loads = LoadSet::new().with_load(PointLoad::new(300_000.0, 3.0));
        let result = calculate(&beam).unwrap();

        // M = PL/4 = 450 kNm against M_d = 375 kNm
        assert_relative_eq!(result.bending_unity, 450.0 / 375.0, max_relative = 1e-9);
        assert!(!result.passes());
    }

    #[test]
    fn test_validation_errors() {
        let mut bad = input();
        bad.span_m = -1.0;
        assert_eq!(calculate(&bad).unwrap_err().error_code(), "INVALID_GEOMETRY");

        let mut bad = input();
        bad.settings.grid_step_m = 0.0;
        assert_eq!(calculate(&bad).unwrap_err().error_code(), "INVALID_INPUT");

        let mut bad = input();
        bad.settings.grid_step_m = 1e-300;
        assert_eq!(calculate(&bad).unwrap_err().error_code(), "INVALID_INPUT");

        let mut bad = input();
        bad.loads.add_load(DistributedLoad::new(10.0, 3.0, 1.0));
        assert_eq!(calculate(&bad).unwrap_err().error_code(), "INVALID_LOAD_SPEC");
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{
            "span_m": 4.0,
            "section": { "width_m": 0.1, "depth_m": 0.2, "web_thickness_m": 0.008 }
        }"#;
        let parsed: BeamInput = serde_json::from_str(json).unwrap();
        assert!(parsed.loads.is_empty());
        assert_eq!(parsed.material, MaterialConfig::structural_steel());
        assert_eq!(parsed.settings, AnalysisSettings::default());

        let result = calculate(&parsed).unwrap();
        assert!(result.samples.iter().all(|s| s.deflection_m == 0.0));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BeamResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.samples.len(), result.samples.len());
        assert_eq!(roundtrip.label, "B-1");
    }
}
