//! # SearchOptions
//!
//! The `SearchOptions` struct represents the configuration options for a
//! firefly search. It includes the population size, the generation cap, and
//! the three coefficients of the movement rule: the randomization strength
//! `alpha`, the attractiveness at zero distance `beta0`, and the light
//! absorption coefficient `gamma`.
//!
//! The `ConvergenceCriteria` struct carries the prior knowledge needed to
//! declare success: the objective's known global optimum and the tolerance
//! `epsilon` around it.
//!
//! ## Example
//!
//! ```rust
//! use fireflyalg::search::options::{ConvergenceCriteria, SearchOptions};
//!
//! // Create a new SearchOptions instance with custom parameters
//! let custom_options = SearchOptions::new(30, 200, 0.25, 1.0, 0.5);
//!
//! // Create a new SearchOptions instance with default parameters
//! let default_options = SearchOptions::default();
//!
//! // Declare success within 0.01 of a known optimum of 0.0
//! let criteria = ConvergenceCriteria::new(0.0, 0.01).unwrap();
//! assert!(criteria.is_met(0.005));
//! assert!(!criteria.is_met(0.5));
//! ```
//!
//! ## Structs
//!
//! ### `SearchOptions`
//!
//! A struct representing the configuration options for a firefly search.
//!
//! #### Fields
//!
//! - `population_size`: The number of fireflies in the population.
//! - `max_generations`: The generation cap after which the search stops.
//! - `alpha`: The randomization strength scaling the uniform perturbation.
//! - `beta0`: The attractiveness between two fireflies at zero distance.
//! - `gamma`: The light absorption coefficient controlling how quickly
//!   attractiveness decays with squared distance.
//!
//! ### `ConvergenceCriteria`
//!
//! A struct pairing a known global optimum with a convergence tolerance.

use crate::error::{FireflyError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    population_size: usize,
    max_generations: usize,
    alpha: f64,
    beta0: f64,
    gamma: f64,
}

impl SearchOptions {
    pub fn new(
        population_size: usize,
        max_generations: usize,
        alpha: f64,
        beta0: f64,
        gamma: f64,
    ) -> Self {
        Self {
            population_size,
            max_generations,
            alpha,
            beta0,
            gamma,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn get_beta0(&self) -> f64 {
        self.beta0
    }

    pub fn get_gamma(&self) -> f64 {
        self.gamma
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the generation cap.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the randomization strength.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Sets the attractiveness at zero distance.
    pub fn set_beta0(&mut self, beta0: f64) {
        self.beta0 = beta0;
    }

    /// Sets the light absorption coefficient.
    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    ///
    /// This provides a more flexible way to configure search options
    /// with a fluent interface.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fireflyalg::search::options::SearchOptions;
    ///
    /// let options = SearchOptions::builder()
    ///     .population_size(20)
    ///     .max_generations(100)
    ///     .alpha(0.3)
    ///     .build();
    /// ```
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 50,
            alpha: 0.2,
            beta0: 1.0,
            gamma: 1.0,
        }
    }
}

/// Builder for `SearchOptions`.
///
/// Provides a fluent interface for constructing `SearchOptions` instances.
#[derive(Debug, Clone)]
pub struct SearchOptionsBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    alpha: Option<f64>,
    beta0: Option<f64>,
    gamma: Option<f64>,
}

impl Default for SearchOptionsBuilder {
    fn default() -> Self {
        Self {
            population_size: None,
            max_generations: None,
            alpha: None,
            beta0: None,
            gamma: None,
        }
    }
}

impl SearchOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the generation cap.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the randomization strength.
    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets the attractiveness at zero distance.
    pub fn beta0(mut self, value: f64) -> Self {
        self.beta0 = Some(value);
        self
    }

    /// Sets the light absorption coefficient.
    pub fn gamma(mut self, value: f64) -> Self {
        self.gamma = Some(value);
        self
    }

    /// Builds the `SearchOptions` instance.
    pub fn build(self) -> SearchOptions {
        SearchOptions {
            population_size: self.population_size.unwrap_or(50),
            max_generations: self.max_generations.unwrap_or(50),
            alpha: self.alpha.unwrap_or(0.2),
            beta0: self.beta0.unwrap_or(1.0),
            gamma: self.gamma.unwrap_or(1.0),
        }
    }
}

/// The success condition for a search on a benchmark with a known optimum.
///
/// A fitness value meets the criteria when it lies strictly within `epsilon`
/// of the known optimum. The pair is configuration supplied alongside the
/// objective, not part of the objective's own contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceCriteria {
    known_optimum: f64,
    epsilon: f64,
}

impl ConvergenceCriteria {
    /// Creates convergence criteria for the given optimum and tolerance.
    ///
    /// # Arguments
    ///
    /// * `known_optimum` - The objective's known global minimum value.
    /// * `epsilon` - The allowed gap between best-found fitness and the
    ///   optimum that defines success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `epsilon` is not positive and finite
    /// - `known_optimum` is not finite
    pub fn new(known_optimum: f64, epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(FireflyError::Configuration(
                "Epsilon must be positive and finite".to_string(),
            ));
        }
        if !known_optimum.is_finite() {
            return Err(FireflyError::Configuration(
                "Known optimum must be finite".to_string(),
            ));
        }
        Ok(Self {
            known_optimum,
            epsilon,
        })
    }

    /// Returns the known global optimum the search is measured against.
    pub fn known_optimum(&self) -> f64 {
        self.known_optimum
    }

    /// Returns the convergence tolerance.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Checks whether `fitness` lies strictly within `epsilon` of the
    /// known optimum. A `NaN` fitness never meets the criteria.
    pub fn is_met(&self, fitness: f64) -> bool {
        (fitness - self.known_optimum).abs() < self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_unset_fields_with_defaults() {
        let options = SearchOptions::builder()
            .population_size(20)
            .gamma(0.05)
            .build();

        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_gamma(), 0.05);
        assert_eq!(options.get_max_generations(), 50);
        assert_eq!(options.get_alpha(), 0.2);
        assert_eq!(options.get_beta0(), 1.0);
    }

    #[test]
    fn test_criteria_rejects_bad_epsilon() {
        assert!(ConvergenceCriteria::new(0.0, 0.0).is_err());
        assert!(ConvergenceCriteria::new(0.0, -0.01).is_err());
        assert!(ConvergenceCriteria::new(0.0, f64::NAN).is_err());
        assert!(ConvergenceCriteria::new(0.0, f64::INFINITY).is_err());

        let error = ConvergenceCriteria::new(0.0, 0.0).unwrap_err();
        assert!(error.to_string().contains("Epsilon must be positive"));
    }

    #[test]
    fn test_criteria_rejects_non_finite_optimum() {
        assert!(ConvergenceCriteria::new(f64::NAN, 0.01).is_err());
        assert!(ConvergenceCriteria::new(f64::NEG_INFINITY, 0.01).is_err());
    }

    #[test]
    fn test_is_met_is_strict() {
        let criteria = ConvergenceCriteria::new(0.0, 0.01).unwrap();
        assert!(criteria.is_met(0.0099));
        assert!(criteria.is_met(-0.0099));
        // The gap must be strictly smaller than epsilon.
        assert!(!criteria.is_met(0.01));
        assert!(!criteria.is_met(f64::NAN));
    }

    #[test]
    fn test_is_met_around_nonzero_optimum() {
        let criteria = ConvergenceCriteria::new(-1.0, 0.05).unwrap();
        assert!(criteria.is_met(-0.96));
        assert!(!criteria.is_met(-0.9));
    }
}
