//! Sample stations along the span and the series evaluated at them.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Relative tolerance used to decide whether a grid station coincides with L
const GRID_TOLERANCE: f64 = 1e-9;

/// Largest number of grid stations a single run may request
pub const MAX_GRID_STATIONS: usize = 1_000_000;

/// One station of the output series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position from the left support (m)
    pub x_m: f64,
    /// Shear V(x) (N)
    pub shear_n: f64,
    /// Moment M(x) (N·m)
    pub moment_nm: f64,
    /// Deflection v(x) (m), positive upward
    pub deflection_m: f64,
}

/// Value and position of an extreme
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Peak {
    pub value: f64,
    pub x_m: f64,
}

/// Largest magnitudes found along the series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremes {
    pub shear_n: Peak,
    pub moment_nm: Peak,
    pub deflection_m: Peak,
}

/// Samples ordered by strictly increasing position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0].x_m < w[1].x_m));
        SampleSeries { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Largest signed shear over the series (N)
    pub fn max_shear(&self) -> f64 {
        self.samples.iter().map(|s| s.shear_n).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest signed moment over the series (N·m)
    pub fn max_moment(&self) -> f64 {
        self.samples.iter().map(|s| s.moment_nm).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest absolute shear, moment and deflection with their positions.
    ///
    /// Ties keep the first station.
    pub fn extremes(&self) -> Extremes {
        let mut ext = Extremes::default();
        for s in &self.samples {
            track(&mut ext.shear_n, s.shear_n, s.x_m);
            track(&mut ext.moment_nm, s.moment_nm, s.x_m);
            track(&mut ext.deflection_m, s.deflection_m, s.x_m);
        }
        ext
    }
}

fn track(peak: &mut Peak, value: f64, x_m: f64) {
    if value.abs() > peak.value.abs() {
        *peak = Peak { value, x_m };
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Stations `0, step, 2·step, …` up to `length_m`, always ending at L.
///
/// Stations are `i·step` rather than a running sum so they do not drift. A
/// station within `1e-9·L` of L is snapped to L; otherwise L is appended after
/// the last station that fits.
pub fn grid_positions(length_m: f64, step_m: f64) -> CalcResult<Vec<f64>> {
    if !step_m.is_finite() || step_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "grid_step_m",
            step_m.to_string(),
            "Grid step must be a positive number",
        ));
    }
    if !length_m.is_finite() || length_m <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "length_m",
            length_m.to_string(),
            "Beam length must be positive",
        ));
    }

    let tol = GRID_TOLERANCE * length_m;
    let count = station_count(length_m, step_m)?;
    let mut positions: Vec<f64> = (0..=count).map(|i| i as f64 * step_m).collect();

    match positions.last_mut() {
        Some(last) if (length_m - *last).abs() <= tol => *last = length_m,
        _ => positions.push(length_m),
    }
    Ok(positions)
}

/// Number of whole steps that fit in `length_m`, bounded by [`MAX_GRID_STATIONS`].
///
/// Both arguments must already be positive and finite.
pub(crate) fn station_count(length_m: f64, step_m: f64) -> CalcResult<usize> {
    let count = ((length_m + GRID_TOLERANCE * length_m) / step_m).floor();
    // the appended end station makes `count + 2` the worst case
    if !count.is_finite() || count + 2.0 > MAX_GRID_STATIONS as f64 {
        return Err(CalcError::invalid_input(
            "grid_step_m",
            step_m.to_string(),
            format!(
                "Grid step is too small for a {} m span (at most {} stations)",
                length_m, MAX_GRID_STATIONS
            ),
        ));
    }
    Ok(count as usize)
}
