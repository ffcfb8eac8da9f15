//! Load model for a single simply-supported span.
//!
//! # Overview
//!
//! - [`PointLoad`], [`DistributedLoad`], [`VaryingLoad`] - the individual load records
//! - [`Load`] - tagged union of the three, as it appears in JSON input
//! - [`LoadSet`] - the loads acting together on one beam
//!
//! Order inside a [`LoadSet`] carries no meaning: the analysis superposes
//! every load, so permuting the set gives the same shear, moment and
//! deflection.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! let loads = LoadSet::new()
//!     .with_load(PointLoad::new(10.0, 2.0))
//!     .with_load(DistributedLoad::new(100.0, 0.0, 4.0));
//!
//! assert_eq!(loads.total_resultant(), 410.0);
//! assert!(loads.validate(4.0).is_ok());
//! ```

pub mod discrete;

pub use discrete::{DistributedLoad, Load, PointLoad, VaryingLoad};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// The combined set of loads acting on one beam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadSet {
    loads: Vec<Load>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: impl Into<Load>) -> Self {
        self.loads.push(load.into());
        self
    }

    /// Add a load to this set
    pub fn add_load(&mut self, load: impl Into<Load>) {
        self.loads.push(load.into());
    }

    /// All loads in insertion order
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Check if there are any loads defined
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Get count of loads
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Get all point loads
    pub fn point_loads(&self) -> impl Iterator<Item = &PointLoad> {
        self.loads.iter().filter_map(|l| match l {
            Load::Point(p) => Some(p),
            _ => None,
        })
    }

    /// Get all uniformly distributed loads
    pub fn distributed_loads(&self) -> impl Iterator<Item = &DistributedLoad> {
        self.loads.iter().filter_map(|l| match l {
            Load::Distributed(d) => Some(d),
            _ => None,
        })
    }

    /// Get all uniformly varying loads
    pub fn varying_loads(&self) -> impl Iterator<Item = &VaryingLoad> {
        self.loads.iter().filter_map(|l| match l {
            Load::Varying(v) => Some(v),
            _ => None,
        })
    }

    /// Sum of all load resultants (N)
    pub fn total_resultant(&self) -> f64 {
        self.loads.iter().map(Load::resultant).sum()
    }

    /// Validate every load against a span of `length_m`.
    ///
    /// Stops at the first invalid record; the error carries its index.
    pub fn validate(&self, length_m: f64) -> CalcResult<()> {
        for (index, load) in self.loads.iter().enumerate() {
            load.validate(index, length_m)?;
            if load.is_zero() {
                log::warn!(
                    "{} load at index {} has zero magnitude and contributes nothing",
                    load.kind(),
                    index
                );
            }
        }
        Ok(())
    }
}

impl FromIterator<Load> for LoadSet {
    fn from_iter<I: IntoIterator<Item = Load>>(iter: I) -> Self {
        LoadSet {
            loads: iter.into_iter().collect(),
        }
    }
}
