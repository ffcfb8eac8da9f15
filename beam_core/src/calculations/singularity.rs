//! Singularity (Macaulay) functions.
//!
//! Every internal-force and deflection expression of a simply-supported beam
//! under point, uniform and linearly varying loads is a finite sum of terms
//! `c·⟨x − a⟩ⁿ`, where
//!
//! ```text
//! ⟨x − a⟩ⁿ = 0            for x < a
//!          = (x − a)ⁿ      for x ≥ a
//! ```
//!
//! `⟨x − a⟩¹` is the one-sided ramp `max(0, x − a)` and `⟨x − a⟩⁰` is a unit
//! step that already includes the jump at `x = a`. Each term integrates in
//! closed form (`∫₀ˣ c·⟨t − a⟩ⁿ dt = c/(n+1)·⟨x − a⟩ⁿ⁺¹` for `a ≥ 0`), so an
//! expression is built once and then evaluated at as many stations as needed.

use serde::{Deserialize, Serialize};

/// One term `coeff·⟨x − anchor⟩^power`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacaulayTerm {
    pub coeff: f64,
    pub anchor: f64,
    pub power: u32,
}

impl MacaulayTerm {
    pub fn new(coeff: f64, anchor: f64, power: u32) -> Self {
        MacaulayTerm { coeff, anchor, power }
    }

    /// Evaluate the term at `x`
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        if x < self.anchor {
            return 0.0;
        }
        match self.power {
            0 => self.coeff,
            1 => self.coeff * (x - self.anchor),
            n => self.coeff * (x - self.anchor).powi(n as i32),
        }
    }

    /// Antiderivative that vanishes at `x = anchor`
    pub fn integrate(&self) -> Self {
        MacaulayTerm {
            coeff: self.coeff / f64::from(self.power + 1),
            anchor: self.anchor,
            power: self.power + 1,
        }
    }
}

/// A sum of Macaulay terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingularityFn {
    terms: Vec<MacaulayTerm>,
}

impl SingularityFn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coeff·⟨x − anchor⟩^power`; zero coefficients are dropped.
    pub fn push(&mut self, coeff: f64, anchor: f64, power: u32) {
        if coeff != 0.0 {
            self.terms.push(MacaulayTerm::new(coeff, anchor, power));
        }
    }

    pub fn terms(&self) -> &[MacaulayTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Term-by-term antiderivative.
    ///
    /// With every anchor at or right of the origin the result is zero at
    /// `x = 0`, i.e. this is the definite integral from 0.
    pub fn integrate(&self) -> Self {
        SingularityFn {
            terms: self.terms.iter().map(MacaulayTerm::integrate).collect(),
        }
    }

    /// Multiply every coefficient by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        SingularityFn {
            terms: self
                .terms
                .iter()
                .map(|t| MacaulayTerm::new(t.coeff * factor, t.anchor, t.power))
                .collect(),
        }
    }
}
