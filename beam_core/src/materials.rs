//! # Material Constants
//!
//! Elastic and design constants for the beam material. These are explicit
//! configuration values carried by each input document rather than
//! process-wide constants, so the same engine serves different steels and
//! code partial factors.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::MaterialConfig;
//!
//! let steel = MaterialConfig::structural_steel();
//! assert_eq!(steel.elastic_modulus_pa, 200e9);
//! assert!(steel.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material and partial-factor constants.
///
/// ## JSON Example
///
/// ```json
/// {
///   "elastic_modulus_pa": 200000000000.0,
///   "yield_stress_pa": 250000000.0,
///   "gamma_m0": 1.5,
///   "beta_b": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Modulus of elasticity E (Pa)
    pub elastic_modulus_pa: f64,
    /// Yield strength f_y (Pa)
    pub yield_stress_pa: f64,
    /// Partial safety factor for bending and shear
    pub gamma_m0: f64,
    /// Bending capacity reduction factor
    pub beta_b: f64,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self::structural_steel()
    }
}

impl MaterialConfig {
    /// Mild structural steel: E = 200 GPa, f_y = 250 MPa, γ_m0 = 1.5, β_b = 1.0
    pub fn structural_steel() -> Self {
        MaterialConfig {
            elastic_modulus_pa: 200e9,
            yield_stress_pa: 250e6,
            gamma_m0: 1.5,
            beta_b: 1.0,
        }
    }

    /// Validate that every constant is a positive finite number.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("elastic_modulus_pa", self.elastic_modulus_pa),
            ("yield_stress_pa", self.yield_stress_pa),
            ("gamma_m0", self.gamma_m0),
            ("beta_b", self.beta_b),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Material constant must be positive",
                ));
            }
        }
        Ok(())
    }
}
