//! # Section Properties and Design Strength
//!
//! Closed-form geometric properties of the rectangular section and the
//! design bending/shear strengths derived from them.
//!
//! ## Notation
//!
//! - `b` = Width of section
//! - `d` = Depth (height) of section
//! - `t_w` = Web thickness (sets the shear area)
//! - `Z` = Elastic section modulus
//! - `A_v` = Shear area of web
//! - `I` = Second moment of area about the strong axis
//!
//! ```text
//!     ┌─────────┐
//!     │         │
//!   d │ ════════│ ← neutral axis at d/2
//!     │         │
//!     └─────────┘
//!          b
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialConfig;

/// Rectangular cross-section, dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    /// Width b (m)
    pub width_m: f64,
    /// Depth d (m)
    pub depth_m: f64,
    /// Web thickness t_w (m)
    pub web_thickness_m: f64,
}

impl RectangularSection {
    /// Create a new section
    pub fn new(width_m: f64, depth_m: f64, web_thickness_m: f64) -> Self {
        RectangularSection {
            width_m,
            depth_m,
            web_thickness_m,
        }
    }

    /// Validate section dimensions.
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            ("width_m", self.width_m),
            ("depth_m", self.depth_m),
            ("web_thickness_m", self.web_thickness_m),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Section dimension must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Elastic section modulus Z = bd²/6 (m³)
    pub fn elastic_modulus(&self) -> f64 {
        self.width_m * self.depth_m.powi(2) / 6.0
    }

    /// Shear area of web A_v = b·t_w (m²)
    pub fn shear_area(&self) -> f64 {
        self.width_m * self.web_thickness_m
    }

    /// Second moment of area I = bd³/12 (m⁴)
    pub fn moment_of_inertia(&self) -> f64 {
        self.width_m * self.depth_m.powi(3) / 12.0
    }

    /// Cross-sectional area A = bd (m²)
    pub fn area(&self) -> f64 {
        self.width_m * self.depth_m
    }

    /// All properties at once, for reporting
    pub fn properties(&self) -> SectionProperties {
        SectionProperties {
            elastic_modulus_m3: self.elastic_modulus(),
            shear_area_m2: self.shear_area(),
            moment_of_inertia_m4: self.moment_of_inertia(),
            area_m2: self.area(),
        }
    }
}

/// Computed section properties (SI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub elastic_modulus_m3: f64,
    pub shear_area_m2: f64,
    pub moment_of_inertia_m4: f64,
    pub area_m2: f64,
}

/// Design strengths of the section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignStrength {
    /// Design bending strength M_d (N·m)
    pub moment_nm: f64,
    /// Design shear strength V_d (N)
    pub shear_n: f64,
}

impl DesignStrength {
    /// M_d = β_b·Z·f_y/γ_m0, V_d = A_v·f_y/(√3·γ_m0)
    pub fn compute(section: &RectangularSection, material: &MaterialConfig) -> Self {
        let fy = material.yield_stress_pa;
        DesignStrength {
            moment_nm: material.beta_b * section.elastic_modulus() * fy / material.gamma_m0,
            shear_n: section.shear_area() * fy / (3.0_f64.sqrt() * material.gamma_m0),
        }
    }
}
