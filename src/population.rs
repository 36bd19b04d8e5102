//! # Population
//!
//! An ordered collection of exactly `npop` fireflies, fixed in size for the
//! lifetime of a run and owned exclusively by the driver of that run.
//! Initialization draws every coordinate uniformly from its bound interval
//! and evaluates the objective once per firefly, so a freshly built
//! population already carries `npop` cached fitness values.
//!
//! ## Example
//!
//! ```rust
//! use fireflyalg::bounds::Bounds;
//! use fireflyalg::objective::ObjectiveFunction;
//! use fireflyalg::population::Population;
//! use fireflyalg::rng::RandomNumberGenerator;
//!
//! struct Sphere;
//!
//! impl ObjectiveFunction for Sphere {
//!     fn evaluate(&self, params: &[f64]) -> f64 {
//!         params.iter().map(|x| x * x).sum()
//!     }
//! }
//!
//! let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let population = Population::initialize(10, &bounds, &Sphere, &mut rng).unwrap();
//!
//! assert_eq!(population.len(), 10);
//! let best = population.best().unwrap();
//! assert!(best.fitness() <= 2.0);
//! ```

use crate::bounds::Bounds;
use crate::error::{FireflyError, Result};
use crate::firefly::Firefly;
use crate::objective::ObjectiveFunction;
use crate::rng::RandomNumberGenerator;

/// The swarm: a fixed-size, index-ordered set of fireflies.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Firefly>,
}

impl Population {
    /// Builds a population of `npop` fireflies with uniformly drawn
    /// positions and their fitness evaluated and cached.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::Configuration` if `npop` is zero. Degenerate
    /// bounds never reach this point; they are rejected when the `Bounds`
    /// value is constructed.
    pub fn initialize<F: ObjectiveFunction>(
        npop: usize,
        bounds: &Bounds,
        objective: &F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if npop == 0 {
            return Err(FireflyError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let dimension = bounds.dimension();
        let mut members = Vec::with_capacity(npop);
        for _ in 0..npop {
            let params: Vec<f64> = (0..dimension).map(|k| bounds.sample(k, rng)).collect();
            let fitness = objective.evaluate(&params);
            members.push(Firefly::new(params, fitness));
        }

        Ok(Self { members })
    }

    /// Returns the number of fireflies in the population.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population holds no fireflies.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the fireflies in index order.
    pub fn members(&self) -> &[Firefly] {
        &self.members
    }

    /// Mutable access for the movement strategies.
    pub(crate) fn members_mut(&mut self) -> &mut [Firefly] {
        &mut self.members
    }

    /// Returns the firefly with the lowest cached fitness.
    ///
    /// Ties break to the first occurrence in population order, so the
    /// result is deterministic. NaN fitness values compare as equal and are
    /// propagated rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::EmptyPopulation` if the population is empty;
    /// a successfully initialized population can never be.
    pub fn best(&self) -> Result<&Firefly> {
        self.members
            .iter()
            .min_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(FireflyError::EmptyPopulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sphere;

    impl ObjectiveFunction for Sphere {
        fn evaluate(&self, params: &[f64]) -> f64 {
            params.iter().map(|x| x * x).sum()
        }
    }

    #[test]
    fn test_initialize_draws_within_bounds_and_caches_fitness() {
        let bounds = Bounds::uniform(3, -2.0, 2.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = Population::initialize(25, &bounds, &Sphere, &mut rng).unwrap();

        assert_eq!(population.len(), 25);
        for fly in population.members() {
            assert!(bounds.contains(fly.params()));
            assert_eq!(fly.fitness(), Sphere.evaluate(fly.params()));
        }
    }

    #[test]
    fn test_initialize_rejects_zero_population() {
        let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = Population::initialize(0, &bounds, &Sphere, &mut rng);

        match result {
            Err(FireflyError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            _ => panic!("Expected configuration error"),
        }
    }

    #[test]
    fn test_initialize_is_deterministic_for_a_seed() {
        let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
        let mut rng1 = RandomNumberGenerator::from_seed(99);
        let mut rng2 = RandomNumberGenerator::from_seed(99);

        let pop1 = Population::initialize(8, &bounds, &Sphere, &mut rng1).unwrap();
        let pop2 = Population::initialize(8, &bounds, &Sphere, &mut rng2).unwrap();

        for (a, b) in pop1.members().iter().zip(pop2.members().iter()) {
            assert_eq!(a.params(), b.params());
            assert_eq!(a.fitness(), b.fitness());
        }
    }

    #[test]
    fn test_best_breaks_ties_by_first_occurrence() {
        let population = Population {
            members: vec![
                Firefly::new(vec![3.0], 2.0),
                Firefly::new(vec![1.0], 1.0),
                Firefly::new(vec![2.0], 1.0),
            ],
        };

        let best = population.best().unwrap();
        assert_eq!(best.params(), &[1.0]);
    }

    #[test]
    fn test_best_on_empty_population_errors() {
        let population = Population { members: vec![] };
        assert!(matches!(
            population.best(),
            Err(FireflyError::EmptyPopulation)
        ));
    }
}
