//! # Unit Types
//!
//! Type-safe wrappers for the display units used in reports. The analysis
//! engine itself computes in plain SI `f64` values (m, N, N·m, Pa); these
//! newtypes exist so that the conversions to kN, kNm, MPa, mm and mm-based
//! section properties happen in exactly one place.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{KiloNewtonMeters, NewtonMeters};
//!
//! let moment = NewtonMeters(450.0);
//! let display: KiloNewtonMeters = moment.into();
//! assert_eq!(display.0, 0.45);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1e3)
    }
}


// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1e3)
    }
}


// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<NewtonMeters> for KiloNewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KiloNewtonMeters(nm.0 / 1e3)
    }
}


// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1e6)
    }
}


// ============================================================================
// Section Properties
// ============================================================================

/// Area in m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Second moment of area in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuarticMeters(pub f64);

impl SquareMeters {
    /// Value in mm²
    pub fn to_mm2(self) -> f64 {
        self.0 * 1e6
    }
}

impl CubicMeters {
    /// Value in mm³
    pub fn to_mm3(self) -> f64 {
        self.0 * 1e9
    }
}

impl QuarticMeters {
    /// Value in mm⁴
    pub fn to_mm4(self) -> f64 {
        self.0 * 1e12
    }
}

// ============================================================================
// Raw value access
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Meters);
impl_value!(Millimeters);
impl_value!(Newtons);
impl_value!(KiloNewtons);
impl_value!(NewtonMeters);
impl_value!(KiloNewtonMeters);
impl_value!(Pascals);
impl_value!(MegaPascals);
impl_value!(SquareMeters);
impl_value!(CubicMeters);
impl_value!(QuarticMeters);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.0125).into();
        assert_relative_eq!(mm.0, 12.5, max_relative = 1e-12);
    }

    #[test]
    fn test_force_and_moment_display_units() {
        let kn: KiloNewtons = Newtons(1500.0).into();
        assert_relative_eq!(kn.0, 1.5);

        let knm: KiloNewtonMeters = NewtonMeters(450.0).into();
        assert_relative_eq!(knm.0, 0.45);

        let mpa: MegaPascals = Pascals(250e6).into();
        assert_relative_eq!(mpa.0, 250.0);
    }

    #[test]
    fn test_section_property_conversions() {
        assert_relative_eq!(SquareMeters(0.002).to_mm2(), 2000.0, max_relative = 1e-12);
        assert_relative_eq!(CubicMeters(1e-4).to_mm3(), 1e5, max_relative = 1e-12);
        assert_relative_eq!(QuarticMeters(1e-6).to_mm4(), 1e6, max_relative = 1e-12);
    }

    #[test]
    fn test_value() {
        assert_eq!(Newtons(10.0).value(), 10.0);
        assert_eq!(KiloNewtons::from(Newtons(2500.0)).value(), 2.5);
    }

    #[test]
    fn test_serialization() {
        let span = Meters(6.5);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "6.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(span, roundtrip);
    }
}
