use tracing::debug;

use super::{candidate_toward, GenerationStats, MoveStrategy};
use crate::bounds::Bounds;
use crate::error::{FireflyError, Result};
use crate::objective::ObjectiveFunction;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::search::options::SearchOptions;

/// The cooling configuration for an [`AnnealedFlight`] strategy.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every generation. An optional `alpha_decay` shrinks
/// the randomization strength by the same mechanism, which narrows the
/// search as the temperature drops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingSchedule {
    initial_temperature: f64,
    cooling_rate: f64,
    alpha_decay: Option<f64>,
}

impl AnnealingSchedule {
    /// Creates a new annealing schedule with the given parameters.
    ///
    /// # Arguments
    ///
    /// * `initial_temperature` - The temperature at the start of each run.
    /// * `cooling_rate` - The multiplicative factor applied after each
    ///   generation (strictly between 0 and 1).
    ///
    /// # Returns
    ///
    /// A new annealing schedule without alpha decay.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `initial_temperature` is not positive and finite
    /// - `cooling_rate` is not strictly between 0 and 1
    pub fn new(initial_temperature: f64, cooling_rate: f64) -> Result<Self> {
        if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
            return Err(FireflyError::Configuration(
                "Initial temperature must be positive and finite".to_string(),
            ));
        }
        if !(cooling_rate > 0.0 && cooling_rate < 1.0) {
            return Err(FireflyError::Configuration(
                "Cooling rate must be strictly between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(Self {
            initial_temperature,
            cooling_rate,
            alpha_decay: None,
        })
    }

    /// Enables per-generation decay of the randomization strength.
    ///
    /// # Arguments
    ///
    /// * `alpha_decay` - The multiplicative factor applied to `alpha` after
    ///   each generation (greater than 0 and at most 1).
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha_decay` is not in `(0.0, 1.0]`.
    pub fn with_alpha_decay(mut self, alpha_decay: f64) -> Result<Self> {
        if !(alpha_decay > 0.0 && alpha_decay <= 1.0) {
            return Err(FireflyError::Configuration(
                "Alpha decay must be greater than 0.0 and at most 1.0".to_string(),
            ));
        }
        self.alpha_decay = Some(alpha_decay);
        Ok(self)
    }

    /// Returns the temperature the strategy starts each run at.
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Returns the per-generation cooling factor.
    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// Returns the per-generation alpha decay factor, if enabled.
    pub fn alpha_decay(&self) -> Option<f64> {
        self.alpha_decay
    }
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            cooling_rate: 0.95,
            alpha_decay: None,
        }
    }
}

/// # AnnealedFlight
///
/// The `AnnealedFlight` struct hybridizes the firefly movement rule with a
/// simulated annealing acceptance test. Candidate moves that improve fitness
/// are always adopted; worsening moves are adopted with probability
/// `exp(-delta / temperature)`, so early generations explore freely while
/// late, cold generations behave greedily.
///
/// Every candidate is evaluated before the acceptance test, so rejected
/// moves still count toward the evaluation total.
#[derive(Debug, Clone)]
pub struct AnnealedFlight {
    schedule: AnnealingSchedule,
    temperature: f64,
    alpha: f64,
}

impl AnnealedFlight {
    /// Creates a new annealed strategy from the given schedule.
    pub fn new(schedule: AnnealingSchedule) -> Self {
        Self {
            temperature: schedule.initial_temperature(),
            alpha: 0.0,
            schedule,
        }
    }

    /// Returns the schedule this strategy was configured with.
    pub fn schedule(&self) -> &AnnealingSchedule {
        &self.schedule
    }

    /// Returns the current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the current randomization strength, after any decay applied
    /// so far in the run.
    pub fn current_alpha(&self) -> f64 {
        self.alpha
    }
}

impl<F> MoveStrategy<F> for AnnealedFlight
where
    F: ObjectiveFunction,
{
    /// Restores the temperature and randomization strength for a fresh run.
    fn begin_run(&mut self, options: &SearchOptions) {
        self.temperature = self.schedule.initial_temperature();
        self.alpha = options.get_alpha();
    }

    /// Moves fireflies as in the classic algorithm, but filters each proposed
    /// move through the Metropolis criterion at the current temperature.
    ///
    /// ## Parameters
    ///
    /// - `population`: The population to move in place.
    /// - `objective`: The objective function used to evaluate candidates.
    /// - `options`: Search parameters (`beta0`, `gamma`).
    /// - `bounds`: The box constraint every candidate is clamped to.
    /// - `rng`: A mutable reference to the random number generator used for
    ///   perturbation and acceptance draws.
    ///
    /// ## Returns
    ///
    /// Generation statistics in which `accepted` may be smaller than
    /// `evaluations`, since rejected candidates are evaluated but discarded.
    fn generation(
        &mut self,
        population: &mut Population,
        objective: &F,
        options: &SearchOptions,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> GenerationStats {
        let mut stats = GenerationStats::default();
        let flies = population.members_mut();

        for i in 0..flies.len() {
            for j in 0..flies.len() {
                if flies[j].fitness() < flies[i].fitness() {
                    let candidate =
                        candidate_toward(&flies[i], &flies[j], self.alpha, options, bounds, rng);
                    let candidate_fitness = objective.evaluate(&candidate);
                    stats.evaluations += 1;

                    let delta = candidate_fitness - flies[i].fitness();
                    let accept = if delta <= 0.0 {
                        true
                    } else {
                        let probability = (-delta / self.temperature).exp();
                        rng.uniform(0.0, 1.0) < probability
                    };

                    if accept {
                        flies[i].move_to(candidate, candidate_fitness);
                        stats.accepted += 1;
                    }
                }
            }
        }

        stats
    }

    /// Cools the temperature and, if configured, decays the randomization
    /// strength.
    fn end_generation(&mut self) {
        self.temperature *= self.schedule.cooling_rate();
        if let Some(decay) = self.schedule.alpha_decay() {
            self.alpha *= decay;
        }
        debug!(
            temperature = self.temperature,
            alpha = self.alpha,
            "annealing schedule advanced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::Ackley;

    #[test]
    fn test_schedule_rejects_non_positive_temperature() {
        let result = AnnealingSchedule::new(0.0, 0.9);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, FireflyError::Configuration(_)));
        assert!(error.to_string().contains("temperature must be positive"));

        assert!(AnnealingSchedule::new(-1.0, 0.9).is_err());
        assert!(AnnealingSchedule::new(f64::NAN, 0.9).is_err());
        assert!(AnnealingSchedule::new(f64::INFINITY, 0.9).is_err());
    }

    #[test]
    fn test_schedule_rejects_cooling_rate_outside_open_interval() {
        assert!(AnnealingSchedule::new(10.0, 0.0).is_err());
        assert!(AnnealingSchedule::new(10.0, 1.0).is_err());
        assert!(AnnealingSchedule::new(10.0, 1.5).is_err());
        assert!(AnnealingSchedule::new(10.0, f64::NAN).is_err());

        let result = AnnealingSchedule::new(10.0, 1.0);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cooling rate must be strictly between"));
    }

    #[test]
    fn test_schedule_accepts_valid_parameters() {
        let schedule = AnnealingSchedule::new(25.0, 0.85).unwrap();
        assert_eq!(schedule.initial_temperature(), 25.0);
        assert_eq!(schedule.cooling_rate(), 0.85);
        assert_eq!(schedule.alpha_decay(), None);
    }

    #[test]
    fn test_alpha_decay_validation() {
        let schedule = AnnealingSchedule::new(10.0, 0.9).unwrap();
        assert!(schedule.with_alpha_decay(0.0).is_err());
        assert!(schedule.with_alpha_decay(1.1).is_err());
        assert!(schedule.with_alpha_decay(f64::NAN).is_err());

        let decayed = schedule.with_alpha_decay(1.0).unwrap();
        assert_eq!(decayed.alpha_decay(), Some(1.0));
    }

    #[test]
    fn test_begin_run_resets_temperature_and_alpha() {
        let schedule = AnnealingSchedule::new(10.0, 0.5).unwrap();
        let mut flight = AnnealedFlight::new(schedule);
        let options = SearchOptions::builder().alpha(0.4).build();

        <AnnealedFlight as MoveStrategy<Ackley>>::begin_run(&mut flight, &options);
        assert_eq!(flight.temperature(), 10.0);
        assert_eq!(flight.current_alpha(), 0.4);

        <AnnealedFlight as MoveStrategy<Ackley>>::end_generation(&mut flight);
        <AnnealedFlight as MoveStrategy<Ackley>>::end_generation(&mut flight);
        assert!((flight.temperature() - 2.5).abs() < 1e-12);
        // No decay configured, so alpha is untouched.
        assert_eq!(flight.current_alpha(), 0.4);

        <AnnealedFlight as MoveStrategy<Ackley>>::begin_run(&mut flight, &options);
        assert_eq!(flight.temperature(), 10.0);
    }

    #[test]
    fn test_end_generation_decays_alpha_when_configured() {
        let schedule = AnnealingSchedule::new(10.0, 0.9)
            .unwrap()
            .with_alpha_decay(0.5)
            .unwrap();
        let mut flight = AnnealedFlight::new(schedule);
        let options = SearchOptions::builder().alpha(0.8).build();

        <AnnealedFlight as MoveStrategy<Ackley>>::begin_run(&mut flight, &options);
        <AnnealedFlight as MoveStrategy<Ackley>>::end_generation(&mut flight);
        assert!((flight.current_alpha() - 0.4).abs() < 1e-12);
    }
}
