//! # Benchmark Objective Functions
//!
//! A catalog of classic continuous minimization benchmarks, each implementing
//! [`ObjectiveFunction`](crate::objective::ObjectiveFunction). All are pure
//! and allocation-free.
//!
//! Two of the catalog entries are deliberately nonstandard variants (see
//! [`Schwefel`] and [`Michalewicz`]); their rustdoc states exactly how they
//! deviate from the textbook forms, and no known minimum is published for
//! them. The well-behaved entries expose their exact global minimum as a
//! `KNOWN_MINIMUM` constant for convergence testing.
//!
//! ## Example
//!
//! ```rust
//! use fireflyalg::benchmarks::Ackley;
//! use fireflyalg::objective::ObjectiveFunction;
//!
//! let value = Ackley.evaluate(&[0.0, 0.0]);
//! assert!((value - Ackley::KNOWN_MINIMUM).abs() < 1e-12);
//! ```

use std::f64::consts::PI;

use crate::objective::ObjectiveFunction;

/// The Ackley function: a nearly flat outer region ringed with ripples and
/// a single deep funnel at the origin.
///
/// `f(x) = -20·exp(-0.2·√(Σx²/n)) - exp(Σcos(2πx)/n) + 20 + e`
///
/// Global minimum `0.0` at the origin, in any dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;

impl Ackley {
    /// The exact global minimum value.
    pub const KNOWN_MINIMUM: f64 = 0.0;
}

impl ObjectiveFunction for Ackley {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let n = params.len() as f64;
        let sum_sq: f64 = params.iter().map(|x| x * x).sum();
        let sum_cos: f64 = params.iter().map(|x| (2.0 * PI * x).cos()).sum();
        -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
            + 20.0
            + std::f64::consts::E
    }
}

/// A nonstandard Schwefel variant.
///
/// `f(x) = 418.9829 · n · Σ xᵢ·sin(√trunc(|xᵢ|))`
///
/// This differs from the textbook Schwefel function
/// (`418.9829·n − Σ xᵢ·sin(√|xᵢ|)`) in two ways: the sum is *multiplied*
/// by `418.9829·n` instead of subtracted from it, and the absolute value is
/// truncated to its integer part before the square root, so fractional
/// coordinates in `(-1, 1)` contribute nothing. Both quirks are preserved
/// deliberately; no `KNOWN_MINIMUM` is published for this variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Schwefel;

impl ObjectiveFunction for Schwefel {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let n = params.len() as f64;
        let sum: f64 = params
            .iter()
            .map(|x| x * x.trunc().abs().sqrt().sin())
            .sum();
        418.9829 * n * sum
    }
}

/// The Rosenbrock function: a long, narrow, parabolic valley.
///
/// `f(x) = Σᵢ₌₀ⁿ⁻² 100·(xᵢ₊₁ - xᵢ²)² + (1 - xᵢ)²`
///
/// Global minimum `0.0` at `(1, …, 1)`. A one-dimensional input has no
/// adjacent pair and evaluates to `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Rosenbrock {
    /// The exact global minimum value.
    pub const KNOWN_MINIMUM: f64 = 0.0;
}

impl ObjectiveFunction for Rosenbrock {
    fn evaluate(&self, params: &[f64]) -> f64 {
        params
            .windows(2)
            .map(|w| {
                let (x, next) = (w[0], w[1]);
                100.0 * (next - x * x).powi(2) + (1.0 - x).powi(2)
            })
            .sum()
    }
}

/// A nonstandard Michalewicz variant with steep, narrow valleys.
///
/// `f(x) = -Σᵢ sin(xᵢ)·sin(i·xᵢ²/π)^(2^(2m))` with `m = 10`.
///
/// Two deviations from the textbook form are preserved: the steepness term
/// squares the inner sine `2m` times, producing an effective exponent of
/// `2^20` rather than `2m`; and the dimension index `i` is zero-based, so
/// the first coordinate's term is always zero. No `KNOWN_MINIMUM` is
/// published for this variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Michalewicz;

/// The "m" steepness parameter of the Michalewicz family.
const STEEPNESS: u32 = 10;

impl ObjectiveFunction for Michalewicz {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let sum: f64 = params
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let mut partial = (i as f64 * x * x / PI).sin();
                for _ in 0..2 * STEEPNESS {
                    partial *= partial;
                }
                x.sin() * partial
            })
            .sum();
        -sum
    }
}

/// The Easom function: a flat plane with one narrow dimple.
///
/// `f(x, y) = -cos(x)·cos(y)·exp(-(x-π)² - (y-π)²)`
///
/// Global minimum `-1.0` at `(π, π)`. Only the first two coordinates are
/// read.
///
/// # Panics
///
/// Panics if `params` has fewer than two elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Easom;

impl Easom {
    /// The exact global minimum value.
    pub const KNOWN_MINIMUM: f64 = -1.0;
}

impl ObjectiveFunction for Easom {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let (x, y) = (params[0], params[1]);
        -x.cos() * y.cos() * (-(x - PI).powi(2) - (y - PI).powi(2)).exp()
    }
}

/// A Yang-style two-dimensional multimodal surface: four negated Gaussian
/// peaks, two of them double-weighted.
///
/// `f(x, y) = -[e^(-(x-4)²-(y-4)²) + e^(-(x+4)²-(y-4)²) + 2·(e^(-x²-y²) + e^(-x²-(y+4)²))]`
///
/// The two double-weight peaks at `(0, 0)` and `(0, -4)` are the global
/// minima, each with a value of approximately `-2.0` (the neighboring
/// peaks contribute a further `~2e-7`). Only the first two coordinates are
/// read.
///
/// # Panics
///
/// Panics if `params` has fewer than two elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yang;

impl ObjectiveFunction for Yang {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let (x, y) = (params[0], params[1]);
        let peak = |cx: f64, cy: f64| (-(x - cx).powi(2) - (y - cy).powi(2)).exp();
        -(peak(4.0, 4.0) + peak(-4.0, 4.0) + 2.0 * (peak(0.0, 0.0) + peak(0.0, -4.0)))
    }
}
