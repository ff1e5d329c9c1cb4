//! Score value object (closeness coefficient on the 0-1 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places a score is reported with.
pub const SCORE_DECIMALS: i32 = 4;

/// A TOPSIS closeness score between 0 and 1 inclusive, rounded to
/// [`SCORE_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero closeness.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Score from a finite full-precision value, clamping to [0, 1]
    /// and rounding to the reported precision.
    pub fn new(value: f64) -> Self {
        debug_assert!(value.is_finite(), "Score must be finite");
        Self(round_to_precision(value.clamp(0.0, 1.0)))
    }

    /// Returns the rounded value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}
