//! # File I/O Module
//!
//! Reading input documents and writing results:
//! - **Input**: a JSON [`BeamInput`] document
//! - **Design report**: plain-text summary in display units (kN, kNm, MPa, mm)
//! - **Result**: the full [`BeamResult`] as pretty JSON
//!
//! Writes are atomic: the content goes to a `.tmp` sibling, is synced, and is
//! then renamed over the target, so an interrupted run never leaves a
//! half-written file behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::calculate;
//! use beam_core::file_io::{load_input, write_design_report};
//! use std::path::Path;
//!
//! let input = load_input(Path::new("beam.json"))?;
//! let result = calculate(&input)?;
//! write_design_report(&result, Path::new("beam_design_input.txt"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::calculations::{BeamInput, BeamResult};
use crate::errors::{CalcError, CalcResult};
use crate::units::{
    CubicMeters, KiloNewtonMeters, KiloNewtons, MegaPascals, NewtonMeters, Newtons, Pascals,
    QuarticMeters, SquareMeters,
};

/// Default file name of the design-input report
pub const DEFAULT_REPORT_NAME: &str = "beam_design_input.txt";

/// Load a beam input document from a JSON file.
///
/// The document is parsed but not validated; [`crate::calculations::calculate`]
/// validates before analysing.
pub fn load_input(path: &Path) -> CalcResult<BeamInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Render the design-input report.
///
/// Moment and shear are the signed maxima over the sampled stations.
pub fn render_design_report(result: &BeamResult, generated: DateTime<Utc>) -> String {
    let moment: KiloNewtonMeters = NewtonMeters(result.max_moment_nm).into();
    let shear: KiloNewtons = Newtons(result.max_shear_n).into();
    let yield_stress: MegaPascals = Pascals(result.yield_stress_pa).into();

    let z_mm3 = CubicMeters(result.section.elastic_modulus_m3).to_mm3();
    let i_mm4 = QuarticMeters(result.section.moment_of_inertia_m4).to_mm4();
    let a_mm2 = SquareMeters(result.section.area_m2).to_mm2();

    format!(
        "Beam: {label}\n\
         Generated: {generated}\n\
         Span: {span} m\n\
         Moment: {moment} kNm\n\
         Shear Force: {shear} kN\n\
         Yield Strength: {fy} MPa\n\
         Section Modulus (Z): {z_mm3} mm^3\n\
         Moment of Inertia (I): {i_mm4} mm^4\n\
         Cross-sectional Area (A): {a_mm2} mm^2\n",
        label = result.label,
        generated = generated.to_rfc3339(),
        span = result.span_m,
        moment = moment.value(),
        shear = shear.value(),
        fy = yield_stress.value(),
    )
}

/// Write the design-input report to `path`.
pub fn write_design_report(result: &BeamResult, path: &Path) -> CalcResult<()> {
    let report = render_design_report(result, Utc::now());
    write_atomic(path, report.as_bytes())?;
    log::info!("design report written to {}", path.display());
    Ok(())
}

/// Save the full result as pretty JSON.
pub fn save_result(result: &BeamResult, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(result)?;
    write_atomic(path, json.as_bytes())
}

/// Write to `<path>.tmp`, sync, then rename over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    name.into()
}
