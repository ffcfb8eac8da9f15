//! # Beam Calculations
//!
//! The analysis pipeline, leaf first:
//!
//! - [`singularity`] - Macaulay terms and their closed-form integrals
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`internal_forces`] - Shear V(x) and moment M(x) by superposition
//! - [`deflection`] - Elastic curve with v(0) = v(L) = 0
//! - [`sampling`] - Evaluation grid and the output series
//! - [`beam_analysis`] - [`Beam`] and the [`BeamAnalysis`] driver
//! - [`beam`] - Section/material wrapper following the `*Input` / `*Result` /
//!   `calculate(input)` pattern

pub mod beam;
pub mod beam_analysis;
pub mod deflection;
pub mod internal_forces;
pub mod reactions;
pub mod sampling;
pub mod singularity;

// Re-export commonly used types
pub use beam::{calculate, BeamInput, BeamResult};
pub use beam_analysis::{Beam, BeamAnalysis};
pub use reactions::ReactionPair;
pub use sampling::{Extremes, Peak, Sample, SampleSeries};
