//! # Movement Strategies
//!
//! This module defines the `MoveStrategy` trait, which describes how a firefly
//! population moves during one generation of the search, together with the two
//! built-in strategies:
//!
//! - [`OrdinaryFlight`](ordinary::OrdinaryFlight): the classic firefly update,
//!   where every proposed move is accepted unconditionally.
//! - [`AnnealedFlight`](annealed::AnnealedFlight): a hybrid that filters
//!   proposed moves through a simulated annealing acceptance test and cools
//!   its temperature after every generation.
//!
//! Both strategies share the same attraction rule: a firefly is pulled toward
//! every brighter (lower fitness) firefly with an attractiveness that decays
//! exponentially in the squared distance between them, plus a uniform random
//! perturbation scaled by the randomization strength `alpha`.

pub mod annealed;
pub mod ordinary;

use std::fmt::Debug;

use crate::bounds::Bounds;
use crate::firefly::Firefly;
use crate::objective::ObjectiveFunction;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::search::options::SearchOptions;

/// Per-generation bookkeeping reported by a [`MoveStrategy`].
///
/// The search driver sums `evaluations` across generations to obtain the
/// total objective evaluation count, which is the cost measure reported by
/// [`SearchOutcome`](crate::search::SearchOutcome).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of objective function evaluations performed this generation.
    pub evaluations: usize,
    /// Number of proposed moves that were accepted this generation.
    pub accepted: usize,
}

/// A strategy for moving fireflies during one generation of the search.
///
/// Implementors decide whether a proposed move is kept. The classic algorithm
/// accepts every move, while the annealed hybrid applies a Metropolis
/// criterion. Strategies may carry per-run state (such as a temperature),
/// which is reset through [`begin_run`](MoveStrategy::begin_run).
///
/// ## Example
///
/// ```rust
/// use fireflyalg::strategy::{MoveStrategy, OrdinaryFlight};
/// use fireflyalg::benchmarks::Ackley;
/// use fireflyalg::bounds::Bounds;
/// use fireflyalg::population::Population;
/// use fireflyalg::rng::RandomNumberGenerator;
/// use fireflyalg::search::options::SearchOptions;
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let options = SearchOptions::default();
/// let mut rng = RandomNumberGenerator::from_seed(7);
/// let mut population = Population::initialize(10, &bounds, &Ackley, &mut rng).unwrap();
///
/// let mut strategy = OrdinaryFlight::new();
/// // Strategies implement `MoveStrategy` for every objective type, so calls
/// // that take no objective argument must name one explicitly.
/// <OrdinaryFlight as MoveStrategy<Ackley>>::begin_run(&mut strategy, &options);
/// let stats = strategy.generation(&mut population, &Ackley, &options, &bounds, &mut rng);
/// assert_eq!(stats.accepted, stats.evaluations);
/// ```
pub trait MoveStrategy<F: ObjectiveFunction>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Resets any per-run state before the first generation.
    ///
    /// The default implementation does nothing. Strategies with mutable
    /// state (temperature, decayed randomization strength) restore it from
    /// their configuration here so that a driver can be reused for several
    /// independent runs.
    fn begin_run(&mut self, _options: &SearchOptions) {}

    /// Performs one generation of firefly movement.
    ///
    /// For every ordered pair `(i, j)` where firefly `j` is strictly brighter
    /// than firefly `i`, a candidate position for `i` is generated, evaluated,
    /// and either adopted or discarded according to the strategy's acceptance
    /// rule. Comparisons always use the current cached fitness, so a firefly
    /// that moved earlier in the same generation attracts (and is attracted)
    /// based on its updated value.
    ///
    /// ## Parameters
    ///
    /// - `population`: The population to move in place.
    /// - `objective`: The objective function used to evaluate candidates.
    /// - `options`: Search parameters (`beta0`, `gamma`, base `alpha`).
    /// - `bounds`: The box constraint every candidate is clamped to.
    /// - `rng`: A mutable reference to the random number generator used for
    ///   perturbation and acceptance draws.
    ///
    /// ## Returns
    ///
    /// The number of objective evaluations performed and moves accepted
    /// during this generation.
    fn generation(
        &mut self,
        population: &mut Population,
        objective: &F,
        options: &SearchOptions,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> GenerationStats;

    /// Hook invoked after each generation completes.
    ///
    /// The default implementation does nothing. The annealed strategy cools
    /// its temperature and decays its randomization strength here.
    fn end_generation(&mut self) {}
}

/// Generates a candidate position for `current` pulled toward `brighter`.
///
/// Attractiveness is `beta0 * exp(-gamma * r^2)` where `r^2` is the squared
/// euclidean distance between the two fireflies. Each coordinate receives an
/// independent uniform perturbation from `[-0.5, 0.5)` scaled by `alpha`,
/// and the result is clamped to `bounds`.
pub(crate) fn candidate_toward(
    current: &Firefly,
    brighter: &Firefly,
    alpha: f64,
    options: &SearchOptions,
    bounds: &Bounds,
    rng: &mut RandomNumberGenerator,
) -> Vec<f64> {
    let attractiveness =
        options.get_beta0() * (-options.get_gamma() * current.squared_distance_to(brighter)).exp();
    let noise = rng.fetch_uniform(-0.5, 0.5, current.params().len());

    current
        .params()
        .iter()
        .zip(brighter.params().iter())
        .zip(noise)
        .enumerate()
        .map(|(k, ((x, y), draw))| {
            let pulled = x + attractiveness * (y - x) + alpha * draw;
            bounds.clamp(k, pulled)
        })
        .collect()
}

pub use annealed::{AnnealedFlight, AnnealingSchedule};
pub use ordinary::OrdinaryFlight;
