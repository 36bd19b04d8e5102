use tracing::{debug, info};

use super::options::{ConvergenceCriteria, SearchOptions};
use crate::bounds::Bounds;
use crate::error::Result;
use crate::firefly::Firefly;
use crate::objective::ObjectiveFunction;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::strategy::MoveStrategy;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best fitness came strictly within `epsilon` of the known optimum.
    Converged,
    /// The generation cap was reached without meeting the tolerance.
    Exhausted,
}

/// Represents the result of a search, containing the best firefly found and
/// the cost of finding it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The best firefly observed over the whole run.
    pub best: Firefly,
    /// Total number of objective function evaluations, including the initial
    /// population and, for the annealed strategy, rejected candidates.
    pub evaluations: usize,
    /// Number of generations processed before termination.
    pub generations: usize,
    /// Whether the run converged or exhausted its generation budget.
    pub termination: Termination,
    /// Best-so-far fitness after the initial population and after each
    /// generation; always `generations + 1` entries, non-increasing.
    pub best_history: Vec<f64>,
    /// Total number of proposed moves that were accepted.
    pub accepted_moves: usize,
}

impl SearchOutcome {
    /// Returns `true` if the run ended in [`Termination::Converged`].
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Manages the search process using a specified movement strategy and
/// objective function.
///
/// The driver owns the strategy and the objective for its lifetime, builds a
/// fresh population for every run, and walks the generation loop until the
/// convergence criteria are met or the generation cap is reached.
///
/// # Example
///
/// ```rust
/// use fireflyalg::benchmarks::Ackley;
/// use fireflyalg::bounds::Bounds;
/// use fireflyalg::rng::RandomNumberGenerator;
/// use fireflyalg::search::{ConvergenceCriteria, SearchDriver, SearchOptions};
/// use fireflyalg::strategy::OrdinaryFlight;
///
/// let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
/// let options = SearchOptions::builder()
///     .population_size(10)
///     .max_generations(20)
///     .alpha(0.05)
///     .build();
/// let criteria = ConvergenceCriteria::new(Ackley::KNOWN_MINIMUM, 0.5).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let mut driver = SearchDriver::new(OrdinaryFlight::new(), Ackley);
/// let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();
///
/// assert!(outcome.evaluations >= 10);
/// assert!(bounds.contains(outcome.best.params()));
/// ```
#[derive(Debug, Clone)]
pub struct SearchDriver<F, S>
where
    F: ObjectiveFunction,
    S: MoveStrategy<F>,
{
    strategy: S,
    objective: F,
}

impl<F, S> SearchDriver<F, S>
where
    F: ObjectiveFunction,
    S: MoveStrategy<F>,
{
    /// Creates a new `SearchDriver` instance with the specified movement
    /// strategy and objective function.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The movement strategy applied once per generation.
    /// * `objective` - The objective function being minimized.
    ///
    /// # Returns
    ///
    /// A new `SearchDriver` instance.
    pub fn new(strategy: S, objective: F) -> Self {
        Self {
            strategy,
            objective,
        }
    }

    /// Returns the movement strategy, including any per-run state it carries.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the objective function being minimized.
    pub fn objective(&self) -> &F {
        &self.objective
    }

    /// Runs one complete search.
    ///
    /// The population is initialized uniformly within `bounds` and every
    /// initial fitness evaluation is counted, so the evaluation total starts
    /// at the population size. If the best initial firefly already meets the
    /// criteria the run converges after zero generations. Otherwise, each
    /// generation moves the population through the strategy, advances the
    /// strategy's schedule, refreshes the best-so-far, and checks the
    /// criteria again.
    ///
    /// # Arguments
    ///
    /// * `options` - Search parameters controlling population size, the
    ///   generation cap, and the movement coefficients.
    /// * `bounds` - The box constraint for every firefly position.
    /// * `criteria` - The known optimum and tolerance that define success.
    /// * `rng` - A random number generator threaded through every stochastic
    ///   draw; reusing a seed reproduces the run exactly.
    ///
    /// # Returns
    ///
    /// A `Result` containing the best firefly found, the evaluation count,
    /// and the termination state, or a `FireflyError` if the run cannot
    /// start.
    ///
    /// # Errors
    ///
    /// This method will return an error if the population size in `options`
    /// is zero. Degenerate bounds never reach this point; they are rejected
    /// when the [`Bounds`] value is constructed.
    pub fn run(
        &mut self,
        options: &SearchOptions,
        bounds: &Bounds,
        criteria: &ConvergenceCriteria,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchOutcome> {
        let mut population =
            Population::initialize(options.get_population_size(), bounds, &self.objective, rng)?;
        let mut evaluations = population.len();
        let mut accepted_moves = 0;

        let mut best = population.best()?.clone();
        let mut best_history = vec![best.fitness()];

        self.strategy.begin_run(options);

        if criteria.is_met(best.fitness()) {
            info!(
                evaluations,
                best_fitness = best.fitness(),
                "initial population already within tolerance"
            );
            return Ok(SearchOutcome {
                best,
                evaluations,
                generations: 0,
                termination: Termination::Converged,
                best_history,
                accepted_moves,
            });
        }

        for generation in 1..=options.get_max_generations() {
            let stats = self
                .strategy
                .generation(&mut population, &self.objective, options, bounds, rng);
            self.strategy.end_generation();
            evaluations += stats.evaluations;
            accepted_moves += stats.accepted;

            let generation_best = population.best()?;
            if generation_best.fitness() < best.fitness() {
                best = generation_best.clone();
            }
            best_history.push(best.fitness());

            debug!(
                generation,
                evaluations,
                best_fitness = best.fitness(),
                "generation complete"
            );

            if criteria.is_met(best.fitness()) {
                info!(
                    generation,
                    evaluations,
                    best_fitness = best.fitness(),
                    "search converged"
                );
                return Ok(SearchOutcome {
                    best,
                    evaluations,
                    generations: generation,
                    termination: Termination::Converged,
                    best_history,
                    accepted_moves,
                });
            }
        }

        info!(
            evaluations,
            best_fitness = best.fitness(),
            "generation budget exhausted without convergence"
        );
        Ok(SearchOutcome {
            best,
            evaluations,
            generations: options.get_max_generations(),
            termination: Termination::Exhausted,
            best_history,
            accepted_moves,
        })
    }
}
