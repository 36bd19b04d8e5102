use super::{candidate_toward, GenerationStats, MoveStrategy};
use crate::bounds::Bounds;
use crate::objective::ObjectiveFunction;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::search::options::SearchOptions;

/// # OrdinaryFlight
///
/// The `OrdinaryFlight` struct implements the classic firefly movement rule:
/// every firefly is pulled toward each strictly brighter firefly in turn, and
/// every proposed move is accepted unconditionally, even when it worsens the
/// mover's fitness.
///
/// Because acceptance is unconditional, the number of accepted moves reported
/// by this strategy always equals the number of objective evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryFlight;

impl OrdinaryFlight {
    pub fn new() -> Self {
        Self
    }
}

impl<F> MoveStrategy<F> for OrdinaryFlight
where
    F: ObjectiveFunction,
{
    /// Moves every firefly toward each brighter firefly, accepting all moves.
    ///
    /// Pairs are visited in index order, and each move immediately updates the
    /// mover's position and cached fitness, so later pairs in the same
    /// generation compare against the refreshed values.
    ///
    /// ## Parameters
    ///
    /// - `population`: The population to move in place.
    /// - `objective`: The objective function used to evaluate candidates.
    /// - `options`: Search parameters (`alpha`, `beta0`, `gamma`).
    /// - `bounds`: The box constraint every candidate is clamped to.
    /// - `rng`: A mutable reference to the random number generator used for
    ///   the perturbation term.
    ///
    /// ## Returns
    ///
    /// Generation statistics in which `accepted` equals `evaluations`.
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
                    let candidate = candidate_toward(
                        &flies[i],
                        &flies[j],
                        options.get_alpha(),
                        options,
                        bounds,
                        rng,
                    );
                    let fitness = objective.evaluate(&candidate);
                    flies[i].move_to(candidate, fitness);
                    stats.evaluations += 1;
                    stats.accepted += 1;
                }
            }
        }

        stats
    }
}
