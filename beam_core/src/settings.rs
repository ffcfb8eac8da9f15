//! # Analysis Settings
//!
//! Knobs that control how an analysis run is carried out. Settings are part of
//! the JSON input document and every field has a default, so an empty object
//! (`{}`) is a valid settings block.
//!
//! ```rust
//! use beam_core::settings::{AnalysisModel, AnalysisSettings};
//!
//! let settings: AnalysisSettings = serde_json::from_str("{}").unwrap();
//! assert_eq!(settings.grid_step_m, 0.5);
//! assert_eq!(settings.model, AnalysisModel::Exact);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::sampling::station_count;
use crate::errors::{CalcError, CalcResult};

/// Default spacing of the evaluation grid (m)
pub const DEFAULT_GRID_STEP_M: f64 = 0.5;

/// How distributed loads enter the reactions and the internal-force terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalysisModel {
    /// Reactions from moment equilibrium about the left support using the true
    /// load centroids; distributed loads act only between their end positions.
    #[default]
    Exact,

    /// Distributed resultants are split half-and-half between the supports and
    /// distributed-load terms run from their start position to the end of the
    /// span. Point loads still use statics. Only exact for loads that are
    /// symmetric about midspan and reach the right support.
    Simplified,
}

impl AnalysisModel {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisModel::Exact => "Exact statics",
            AnalysisModel::Simplified => "Simplified (symmetric split, open-ended loads)",
        }
    }
}

impl std::fmt::Display for AnalysisModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Settings for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Spacing of sample stations along the span (m)
    pub grid_step_m: f64,

    /// Load model used for reactions and internal forces
    pub model: AnalysisModel,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            grid_step_m: DEFAULT_GRID_STEP_M,
            model: AnalysisModel::default(),
        }
    }
}

impl AnalysisSettings {
    /// Set the grid step and return self (builder pattern)
    pub fn with_grid_step(mut self, step_m: f64) -> Self {
        self.grid_step_m = step_m;
        self
    }

    /// Set the load model and return self (builder pattern)
    pub fn with_model(mut self, model: AnalysisModel) -> Self {
        self.model = model;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.grid_step_m.is_finite() || self.grid_step_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "grid_step_m",
                self.grid_step_m.to_string(),
                "Grid step must be a positive number",
            ));
        }
        Ok(())
    }

    /// Validate settings against a span, bounding the number of grid stations.
    pub fn validate_for_span(&self, span_m: f64) -> CalcResult<()> {
        self.validate()?;
        station_count(span_m, self.grid_step_m).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.grid_step_m, 0.5);
        assert_eq!(settings.model, AnalysisModel::Exact);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AnalysisSettings =
            serde_json::from_str(r#"{ "model": "Simplified" }"#).unwrap();
        assert_eq!(settings.model, AnalysisModel::Simplified);
        assert_eq!(settings.grid_step_m, DEFAULT_GRID_STEP_M);
    }

    #[test]
    fn test_invalid_grid_step() {
        let err = AnalysisSettings::default().with_grid_step(0.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(AnalysisSettings::default().with_grid_step(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_grid_step_bounded_by_span() {
        let fine = AnalysisSettings::default().with_grid_step(1e-9);
        assert!(fine.validate().is_ok());
        assert_eq!(fine.validate_for_span(10.0).unwrap_err().error_code(), "INVALID_INPUT");
        assert!(AnalysisSettings::default().validate_for_span(10.0).is_ok());
    }
}
