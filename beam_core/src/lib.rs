//! # beam_core - Simply-Supported Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear force, bending moment and
//! deflection along a single simply-supported span carrying any combination
//! of point loads, uniformly distributed loads (UDL) and uniformly varying
//! loads (UVL), using linear-elastic beam theory and superposition.
//!
//! ## Design Philosophy
//!
//! - **Closed form**: every load contributes Macaulay terms whose integrals are
//!   known exactly; no numerical integration and no runtime symbolic engine
//! - **Build once, evaluate many**: expressions are assembled once per load set
//!   and evaluated by substitution at each station
//! - **Validate at the boundary**: malformed geometry and loads are rejected
//!   with structured errors before any analysis runs
//! - **JSON-First**: inputs and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalysis, DistributedLoad, LoadSet};
//! use beam_core::settings::AnalysisModel;
//!
//! // 6 m span, 100 N/m over the full length
//! let beam = Beam::new(6.0, 1.0).unwrap();
//! let loads = LoadSet::new().with_load(DistributedLoad::new(100.0, 0.0, 6.0));
//! let analysis = BeamAnalysis::new(beam, &loads, AnalysisModel::Exact).unwrap();
//!
//! // wL²/8 at midspan
//! assert!((analysis.moment_at(3.0) - 450.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Point, uniform and varying load records and the load set
//! - [`calculations`] - Reactions, internal forces, elastic curve, sampling
//! - [`section`] - Rectangular section properties and design strength
//! - [`materials`] - Elastic modulus, yield stress and partial factors
//! - [`settings`] - Grid step and load model
//! - [`units`] - Display unit wrappers for reports
//! - [`errors`] - Structured error types
//! - [`file_io`] - Input documents, design report and result files

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod section;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, Beam, BeamAnalysis, BeamInput, BeamResult, ReactionPair, SampleSeries,
};
pub use errors::{CalcError, CalcResult};
pub use loads::{DistributedLoad, Load, LoadSet, PointLoad, VaryingLoad};
