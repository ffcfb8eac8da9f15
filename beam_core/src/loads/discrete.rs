//! Discrete Load Types
//!
//! The three load records a beam can carry: concentrated point loads,
//! uniformly distributed loads (UDL) and uniformly varying loads (UVL).
//! All magnitudes are positive downward, positions are measured in meters
//! from the left support.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Load Records
// ============================================================================

/// Concentrated transverse force P (N) at x₀ (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    pub magnitude_n: f64,
    pub position_m: f64,
}

/// Constant intensity w (N/m) over [a, b]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    pub intensity_n_per_m: f64,
    pub start_m: f64,
    pub end_m: f64,
}

/// Linear ramp from peak intensity q (N/m) at m down to zero at n.
///
/// The ramp descends when `peak_m < zero_m` and ascends otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaryingLoad {
    pub peak_intensity_n_per_m: f64,
    pub peak_m: f64,
    pub zero_m: f64,
}

impl PointLoad {
    pub fn new(magnitude_n: f64, position_m: f64) -> Self {
        PointLoad {
            magnitude_n,
            position_m,
        }
    }
}

impl DistributedLoad {
    pub fn new(intensity_n_per_m: f64, start_m: f64, end_m: f64) -> Self {
        DistributedLoad {
            intensity_n_per_m,
            start_m,
            end_m,
        }
    }

    /// Loaded length b − a (m)
    pub fn length(&self) -> f64 {
        self.end_m - self.start_m
    }
}

impl VaryingLoad {
    pub fn new(peak_intensity_n_per_m: f64, peak_m: f64, zero_m: f64) -> Self {
        VaryingLoad {
            peak_intensity_n_per_m,
            peak_m,
            zero_m,
        }
    }

    /// Loaded length |n − m| (m)
    pub fn length(&self) -> f64 {
        (self.zero_m - self.peak_m).abs()
    }

    /// The loaded interval as `(start, start intensity, end, end intensity)`
    /// ordered left to right.
    pub fn segment(&self) -> (f64, f64, f64, f64) {
        let q = self.peak_intensity_n_per_m;
        if self.peak_m < self.zero_m {
            (self.peak_m, q, self.zero_m, 0.0)
        } else {
            (self.zero_m, 0.0, self.peak_m, q)
        }
    }
}

// ============================================================================
// Load
// ============================================================================

/// Any load the beam can carry.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "type": "Point", "magnitude_n": 10000.0, "position_m": 2.0 },
///   { "type": "Distributed", "intensity_n_per_m": 100.0, "start_m": 0.0, "end_m": 6.0 },
///   { "type": "Varying", "peak_intensity_n_per_m": 500.0, "peak_m": 0.0, "zero_m": 3.0 }
/// ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    Point(PointLoad),
    Distributed(DistributedLoad),
    Varying(VaryingLoad),
}

impl From<PointLoad> for Load {
    fn from(load: PointLoad) -> Self {
        Load::Point(load)
    }
}

impl From<DistributedLoad> for Load {
    fn from(load: DistributedLoad) -> Self {
        Load::Distributed(load)
    }
}

impl From<VaryingLoad> for Load {
    fn from(load: VaryingLoad) -> Self {
        Load::Varying(load)
    }
}

impl Load {
    /// Get display name for reports and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Load::Point(_) => "Point",
            Load::Distributed(_) => "UDL",
            Load::Varying(_) => "UVL",
        }
    }

    /// Total downward force carried by this load (N)
    pub fn resultant(&self) -> f64 {
        match self {
            Load::Point(p) => p.magnitude_n,
            Load::Distributed(d) => d.intensity_n_per_m * d.length(),
            Load::Varying(v) => 0.5 * v.peak_intensity_n_per_m * v.length(),
        }
    }

    /// Line of action of the resultant, measured from the left support (m)
    pub fn centroid(&self) -> f64 {
        match self {
            Load::Point(p) => p.position_m,
            Load::Distributed(d) => (d.start_m + d.end_m) / 2.0,
            // one third of the loaded length away from the peak
            Load::Varying(v) => v.peak_m + (v.zero_m - v.peak_m) / 3.0,
        }
    }

    /// True when the load contributes nothing
    pub fn is_zero(&self) -> bool {
        self.resultant() == 0.0
    }

    /// Validate this load against a span of `length_m`.
    ///
    /// `index` is the position of the load in its set and is only used
    /// to make the error point at the offending record.
    pub fn validate(&self, index: usize, length_m: f64) -> CalcResult<()> {
        let kind = self.kind();
        let finite = |value: f64, name: &str| -> CalcResult<()> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(CalcError::invalid_load(index, kind, format!("{} must be finite", name)))
            }
        };
        let in_span = |value: f64, name: &str| -> CalcResult<()> {
            if (0.0..=length_m).contains(&value) {
                Ok(())
            } else {
                Err(CalcError::out_of_range(format!("loads[{}].{}", index, name), value, length_m))
            }
        };

        match self {
            Load::Point(p) => {
                finite(p.magnitude_n, "magnitude_n")?;
                finite(p.position_m, "position_m")?;
                in_span(p.position_m, "position_m")?;
            }
            Load::Distributed(d) => {
                finite(d.intensity_n_per_m, "intensity_n_per_m")?;
                finite(d.start_m, "start_m")?;
                finite(d.end_m, "end_m")?;
                if d.start_m >= d.end_m {
                    return Err(CalcError::invalid_load(
                        index,
                        kind,
                        format!("start ({}) must be less than end ({})", d.start_m, d.end_m),
                    ));
                }
                in_span(d.start_m, "start_m")?;
                in_span(d.end_m, "end_m")?;
            }
            Load::Varying(v) => {
                finite(v.peak_intensity_n_per_m, "peak_intensity_n_per_m")?;
                finite(v.peak_m, "peak_m")?;
                finite(v.zero_m, "zero_m")?;
                if v.peak_m == v.zero_m {
                    return Err(CalcError::invalid_load(
                        index,
                        kind,
                        format!("peak and zero positions coincide at {}", v.peak_m),
                    ));
                }
                in_span(v.peak_m, "peak_m")?;
                in_span(v.zero_m, "zero_m")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
