//! # Beam Analysis CLI
//!
//! Terminal front end for `beam_core`.
//!
//! ```text
//! beam_cli <input.json> [report.txt]   analyse a JSON input document
//! beam_cli                             enter the beam interactively
//! ```
//!
//! Prints the shear, moment and deflection at every station, writes the
//! design-input report (default `beam_design_input.txt`) and, on failure,
//! prints the structured error as JSON. Set `RUST_LOG=debug` to see the
//! reactions and integration constants as they are derived.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use beam_core::calculations::{calculate, BeamInput, BeamResult};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::file_io::{load_input, write_design_report, DEFAULT_REPORT_NAME};
use beam_core::loads::{DistributedLoad, Load, LoadSet, PointLoad, VaryingLoad};
use beam_core::materials::MaterialConfig;
use beam_core::section::RectangularSection;
use beam_core::settings::AnalysisSettings;
use beam_core::units::{KiloNewtons, Meters, Millimeters, Newtons};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let report_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_NAME));

    let input = match args.first() {
        Some(path) => load_input(Path::new(path)),
        None => Ok(prompt_input()),
    };

    if let Err(e) = input.and_then(|input| run(&input, &report_path)) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(input: &BeamInput, report_path: &Path) -> CalcResult<()> {
    log::debug!("analysing '{}' with {} loads", input.label, input.loads.len());
    let result = calculate(input)?;
    print_loads(&input.loads);
    print_result(&result);
    write_design_report(&result, report_path)?;
    println!();
    println!("Results saved to {}", report_path.display());
    Ok(())
}

fn print_loads(loads: &LoadSet) {
    println!();
    let total = KiloNewtons::from(Newtons(loads.total_resultant()));
    println!("Loads ({}, total {:.3} kN):", loads.len(), total.value());
    for p in loads.point_loads() {
        println!(
            "  Point  {:>10.3} kN at {:.3} m",
            KiloNewtons::from(Newtons(p.magnitude_n)).value(),
            p.position_m
        );
    }
    for d in loads.distributed_loads() {
        println!(
            "  UDL    {:>10.3} kN/m over {:.3}-{:.3} m",
            KiloNewtons::from(Newtons(d.intensity_n_per_m)).value(),
            d.start_m,
            d.end_m
        );
    }
    for v in loads.varying_loads() {
        println!(
            "  UVL    {:>10.3} kN/m peak at {:.3} m, zero at {:.3} m",
            KiloNewtons::from(Newtons(v.peak_intensity_n_per_m)).value(),
            v.peak_m,
            v.zero_m
        );
    }
}

fn print_result(result: &BeamResult) {
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS {}", result.label);
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("Reactions:");
    println!("  R_left  = {:.3} N", result.reactions.left_n);
    println!("  R_right = {:.3} N", result.reactions.right_n);
    println!();
    println!("{:>10} {:>16} {:>18} {:>16}", "x (m)", "V (N)", "M (Nm)", "v (m)");
    for s in &result.samples {
        println!(
            "{:>10.3} {:>16.4} {:>18.4} {:>16.6e}",
            s.x_m, s.shear_n, s.moment_nm, s.deflection_m
        );
    }
    println!();
    println!("Demand:");
    println!("  V_max = {:.3} N", result.max_shear_n);
    println!("  M_max = {:.3} Nm", result.max_moment_nm);
    let deflection = result.extremes.deflection_m;
    println!(
        "  v_max = {:.3} mm at x = {:.3} m",
        Millimeters::from(Meters(deflection.value)).value(),
        deflection.x_m
    );
    println!();
    println!("Capacity Checks:");
    println!(
        "  Bending: {:.2} (M_d = {:.1} Nm) {}",
        result.bending_unity,
        result.design_strength.moment_nm,
        status_icon(result.bending_unity <= 1.0)
    );
    println!(
        "  Shear:   {:.2} (V_d = {:.1} N) {}",
        result.shear_unity,
        result.design_strength.shear_n,
        status_icon(result.shear_unity <= 1.0)
    );
    println!();
    println!(
        "  RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    );
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

// ============================================================================
// Interactive entry
// ============================================================================

/// Line-oriented prompts over any buffered reader.
struct Prompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn new(input: R) -> Self {
        Prompter { input }
    }

    /// Read one trimmed line; `None` on EOF or read error.
    fn line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Number with a default shown in the prompt; blank input or EOF takes the default.
    fn f64_or(&mut self, prompt: &str, default: f64) -> f64 {
        loop {
            match self.line(prompt) {
                Some(s) if !s.is_empty() => match s.parse() {
                    Ok(value) => return value,
                    Err(_) => println!("Not a number: '{}'. Please try again.", s),
                },
                _ => return default,
            }
        }
    }

    /// Number with no default; re-prompts until one parses. `None` on EOF.
    fn required_f64(&mut self, prompt: &str) -> Option<f64> {
        loop {
            let s = self.line(prompt)?;
            match s.parse() {
                Ok(value) => return Some(value),
                Err(_) => println!("Not a number: '{}'. Please try again.", s),
            }
        }
    }
}

fn prompt_input() -> BeamInput {
    let mut prompter = Prompter::new(io::stdin().lock());
    read_input(&mut prompter)
}

fn read_input<R: BufRead>(prompter: &mut Prompter<R>) -> BeamInput {
    println!("Beam Analysis - Simply-Supported Span");
    println!("=====================================");
    println!();

    let span_m = prompter.f64_or("Enter the total length of the beam (m) [6.0]: ", 6.0);
    let width_m = prompter.f64_or("Enter the width of the beam (m) [0.15]: ", 0.15);
    let depth_m = prompter.f64_or("Enter the depth of the beam (m) [0.30]: ", 0.30);
    let web_m = prompter.f64_or("Enter the thickness of the web (m) [0.01]: ", 0.01);

    BeamInput {
        label: "CLI".to_string(),
        span_m,
        section: RectangularSection::new(width_m, depth_m, web_m),
        material: MaterialConfig::structural_steel(),
        loads: read_loads(prompter, span_m),
        settings: AnalysisSettings::default(),
    }
}

fn read_loads<R: BufRead>(prompter: &mut Prompter<R>, span_m: f64) -> LoadSet {
    let mut loads = LoadSet::new();

    loop {
        println!();
        println!("Select the load case:");
        println!("1. Add Uniformly Distributed Load (UDL)");
        println!("2. Add Point Load");
        println!("3. Add Uniformly Varying Load (UVL)");
        println!("4. Done with Loadings");

        let Some(choice) =
            prompter.line("Enter the load case number (1-3 for load types, 4 to finish): ")
        else {
            break;
        };

        let load = match choice.as_str() {
            "1" => read_udl(prompter),
            "2" => read_point_load(prompter),
            "3" => read_uvl(prompter),
            "4" => {
                println!("Load entry complete.");
                break;
            }
            _ => {
                println!("Invalid input. Please enter a valid load case number.");
                continue;
            }
        };
        // EOF part-way through a record drops it
        let Some(load) = load else {
            break;
        };

        match accept_load(&loads, load, span_m) {
            Ok(()) => loads.add_load(load),
            Err(e) => println!("Rejected: {}", e),
        }
    }

    loads
}

fn read_udl<R: BufRead>(prompter: &mut Prompter<R>) -> Option<Load> {
    let intensity = prompter.required_f64("Enter UDL intensity (N/m): ")?;
    let start = prompter.required_f64("Enter start position of UDL (m): ")?;
    let end = prompter.required_f64("Enter end position of UDL (m): ")?;
    Some(DistributedLoad::new(intensity, start, end).into())
}

fn read_point_load<R: BufRead>(prompter: &mut Prompter<R>) -> Option<Load> {
    let magnitude = prompter.required_f64("Enter point load value (N): ")?;
    let position =
        prompter.required_f64("Enter position of point load from left support (m): ")?;
    Some(PointLoad::new(magnitude, position).into())
}

fn read_uvl<R: BufRead>(prompter: &mut Prompter<R>) -> Option<Load> {
    let peak = prompter.required_f64("Enter maximum intensity of UVL (N/m): ")?;
    let peak_m = prompter.required_f64("Position of maximum intensity (m): ")?;
    let zero_m = prompter.required_f64("Position of minimum intensity (0) (m): ")?;
    Some(VaryingLoad::new(peak, peak_m, zero_m).into())
}

/// Validate a single record before it joins the set.
fn accept_load(loads: &LoadSet, load: Load, span_m: f64) -> Result<(), CalcError> {
    if !span_m.is_finite() || span_m <= 0.0 {
        // the span itself is reported by `calculate`; keep the record
        return Ok(());
    }
    load.validate(loads.len(), span_m)
}
