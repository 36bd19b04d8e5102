//! # Firefly
//!
//! A `Firefly` is one candidate solution: a fixed-length position vector in
//! the search box together with the cached objective value ("light
//! intensity") at that position. Lower fitness means brighter.
//!
//! The cache is never stale: position and fitness can only change together
//! through [`Firefly::move_to`], so any observer sees a fitness that was
//! computed at the current position.
//!
//! ## Example
//!
//! ```rust
//! use fireflyalg::firefly::Firefly;
//!
//! let fly = Firefly::new(vec![1.0, -2.0], 5.0);
//! assert_eq!(fly.params(), &[1.0, -2.0]);
//! assert_eq!(fly.fitness(), 5.0);
//! ```

/// A candidate solution vector plus its cached fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Firefly {
    params: Vec<f64>,
    fitness: f64,
}

impl Firefly {
    /// Creates a firefly at `params` with the objective value already
    /// evaluated there.
    pub fn new(params: Vec<f64>, fitness: f64) -> Self {
        Self { params, fitness }
    }

    /// Returns the position vector.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Returns the cached objective value at the current position.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Returns the squared Euclidean distance to another firefly.
    ///
    /// Attractiveness decays with `exp(-gamma * r^2)`, so the squared
    /// distance is used directly and the square root is never taken.
    pub fn squared_distance_to(&self, other: &Firefly) -> f64 {
        self.params
            .iter()
            .zip(other.params.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum()
    }

    /// Moves the firefly to a new position, replacing position and fitness
    /// in one step.
    pub(crate) fn move_to(&mut self, params: Vec<f64>, fitness: f64) {
        self.params = params;
        self.fitness = fitness;
    }
}
