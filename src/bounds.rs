//! # Bounds
//!
//! Per-dimension search box shared read-only by every firefly in a run.
//! Every parameter of every firefly satisfies `lower <= value <= upper` at
//! all times; the movement strategies enforce this by clamping each
//! candidate coordinate after a move.
//!
//! ## Example
//!
//! ```rust
//! use fireflyalg::bounds::Bounds;
//!
//! let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
//! assert_eq!(bounds.dimension(), 2);
//! assert_eq!(bounds.clamp(0, 7.3), 5.0);
//! assert_eq!(bounds.clamp(1, -9.9), -5.0);
//! ```

use crate::error::{FireflyError, Result};
use crate::rng::RandomNumberGenerator;

/// A per-dimension `[lower, upper]` box constraining every firefly's
/// position.
///
/// Construction validates the box once; afterwards clamping and sampling
/// never fail. A zero-width interval (`lower == upper`) is legal and pins
/// that coordinate to a single value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds with the same `[min, max]` interval for every
    /// dimension.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::InvalidBounds` if `dimension` is zero, if
    /// either endpoint is not finite, or if `min` exceeds `max`.
    pub fn uniform(dimension: usize, min: f64, max: f64) -> Result<Self> {
        Self::per_dimension(vec![min; dimension], vec![max; dimension])
    }

    /// Creates bounds from explicit per-dimension endpoint vectors.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::InvalidBounds` if the vectors are empty or of
    /// unequal length, if any endpoint is not finite, or if any lower bound
    /// exceeds its upper bound.
    pub fn per_dimension(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() {
            return Err(FireflyError::InvalidBounds(
                "Dimension cannot be zero".to_string(),
            ));
        }
        if lower.len() != upper.len() {
            return Err(FireflyError::InvalidBounds(format!(
                "Lower and upper bounds differ in length ({} vs {})",
                lower.len(),
                upper.len()
            )));
        }
        for (k, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(FireflyError::InvalidBounds(format!(
                    "Bounds for dimension {} must be finite (got [{}, {}])",
                    k, lo, hi
                )));
            }
            if lo > hi {
                return Err(FireflyError::InvalidBounds(format!(
                    "Lower bound {} exceeds upper bound {} in dimension {}",
                    lo, hi, k
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Returns the number of dimensions the box constrains.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Returns the lower endpoint of dimension `k`.
    pub fn lower(&self, k: usize) -> f64 {
        self.lower[k]
    }

    /// Returns the upper endpoint of dimension `k`.
    pub fn upper(&self, k: usize) -> f64 {
        self.upper[k]
    }

    /// Clamps `value` into the interval of dimension `k`.
    ///
    /// NaN propagates unchanged, matching the engine-wide policy of
    /// letting defective objective values flow through comparisons.
    pub fn clamp(&self, k: usize, value: f64) -> f64 {
        value.clamp(self.lower[k], self.upper[k])
    }

    /// Draws a uniform sample from the interval of dimension `k`.
    pub fn sample(&self, k: usize, rng: &mut RandomNumberGenerator) -> f64 {
        rng.uniform_inclusive(self.lower[k], self.upper[k])
    }

    /// Checks whether every coordinate of `params` lies inside the box.
    pub fn contains(&self, params: &[f64]) -> bool {
        params.len() == self.dimension()
            && params
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&value, (&lo, &hi))| value >= lo && value <= hi)
    }
}
