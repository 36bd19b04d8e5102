use fireflyalg::{
    benchmarks::{Ackley, Easom},
    bounds::Bounds,
    objective::ObjectiveFunction,
    rng::RandomNumberGenerator,
    search::{ConvergenceCriteria, SearchDriver, SearchOptions, Termination},
    strategy::{AnnealedFlight, AnnealingSchedule, OrdinaryFlight},
};

#[test]
fn test_initial_population_within_tolerance_converges_immediately() {
    let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    let options = SearchOptions::builder()
        .population_size(10)
        .max_generations(50)
        .build();
    // A tolerance wide enough to cover the whole Ackley range on this box.
    let criteria = ConvergenceCriteria::new(0.0, 1e9).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(2);

    let mut driver = SearchDriver::new(OrdinaryFlight::new(), Ackley);
    let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();

    assert_eq!(outcome.termination, Termination::Converged);
    assert!(outcome.converged());
    assert_eq!(outcome.generations, 0);
    assert_eq!(outcome.evaluations, 10);
    assert_eq!(outcome.best_history.len(), 1);
    assert_eq!(outcome.accepted_moves, 0);
}

#[test]
fn test_exhausted_run_reports_full_history() {
    let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    let options = SearchOptions::builder()
        .population_size(8)
        .max_generations(7)
        .build();
    let criteria = ConvergenceCriteria::new(0.0, 1e-15).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(6);

    let mut driver = SearchDriver::new(OrdinaryFlight::new(), Ackley);
    let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();

    assert_eq!(outcome.termination, Termination::Exhausted);
    assert!(!outcome.converged());
    assert_eq!(outcome.generations, 7);
    // One entry for the initial population plus one per generation.
    assert_eq!(outcome.best_history.len(), 8);
    assert_eq!(
        outcome.best_history.last().copied(),
        Some(outcome.best.fitness())
    );
}

#[test]
fn test_driver_can_be_reused_for_independent_runs() {
    let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    let options = SearchOptions::builder()
        .population_size(10)
        .max_generations(10)
        .alpha(0.5)
        .build();
    let criteria = ConvergenceCriteria::new(0.0, 1e-12).unwrap();

    let schedule = AnnealingSchedule::new(10.0, 0.8)
        .unwrap()
        .with_alpha_decay(0.9)
        .unwrap();
    let mut driver = SearchDriver::new(AnnealedFlight::new(schedule), Ackley);

    let mut first_rng = RandomNumberGenerator::from_seed(77);
    let first = driver
        .run(&options, &bounds, &criteria, &mut first_rng)
        .unwrap();

    // The second run must start from a fresh temperature and alpha, so with
    // the same seed it reproduces the first run exactly.
    let mut second_rng = RandomNumberGenerator::from_seed(77);
    let second = driver
        .run(&options, &bounds, &criteria, &mut second_rng)
        .unwrap();

    assert_eq!(first.evaluations, second.evaluations);
    assert_eq!(first.accepted_moves, second.accepted_moves);
    assert_eq!(first.best_history, second.best_history);
}

#[test]
fn test_nan_objective_never_converges() {
    #[derive(Debug, Clone, Copy)]
    struct AlwaysNan;

    impl ObjectiveFunction for AlwaysNan {
        fn evaluate(&self, _params: &[f64]) -> f64 {
            f64::NAN
        }
    }

    let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
    let options = SearchOptions::builder()
        .population_size(6)
        .max_generations(3)
        .build();
    let criteria = ConvergenceCriteria::new(0.0, 1e9).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let mut driver = SearchDriver::new(OrdinaryFlight::new(), AlwaysNan);
    let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();

    // NaN fitness propagates unchanged: no firefly is ever strictly brighter
    // than another, so no pairwise move fires, and even a huge tolerance is
    // never met.
    assert_eq!(outcome.termination, Termination::Exhausted);
    assert!(outcome.best.fitness().is_nan());
    assert_eq!(outcome.evaluations, 6);
    assert_eq!(outcome.accepted_moves, 0);
    assert!(outcome.best_history.iter().all(|fitness| fitness.is_nan()));
}

#[test]
fn test_two_dimensional_objectives_work_through_the_driver() {
    // Easom's optimum sits at (pi, pi) with value -1; check the driver wires
    // a non-zero known optimum through the convergence test.
    let bounds = Bounds::uniform(2, 2.0, 4.0).unwrap();
    let options = SearchOptions::builder()
        .population_size(15)
        .max_generations(100)
        .alpha(0.05)
        .build();
    let criteria = ConvergenceCriteria::new(Easom::KNOWN_MINIMUM, 0.05).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(9);

    let mut driver = SearchDriver::new(OrdinaryFlight::new(), Easom);
    let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();

    assert_eq!(outcome.termination, Termination::Converged);
    assert!(outcome.best.fitness() < -0.95);
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn test_outcome_round_trips_through_json() {
        let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
        let options = SearchOptions::builder()
            .population_size(8)
            .max_generations(5)
            .build();
        let criteria = ConvergenceCriteria::new(0.0, 1e-12).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(12);

        let mut driver = SearchDriver::new(OrdinaryFlight::new(), Ackley);
        let outcome = driver.run(&options, &bounds, &criteria, &mut rng).unwrap();

        let json = serde_json::to_string(&outcome).unwrap();
        let back: fireflyalg::search::SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_options_and_bounds_round_trip_through_json() {
        let options = SearchOptions::builder()
            .population_size(20)
            .alpha(0.7)
            .build();
        let json = serde_json::to_string(&options).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);

        let bounds = Bounds::uniform(3, -2.0, 2.0).unwrap();
        let json = serde_json::to_string(&bounds).unwrap();
        let back: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimension(), 3);
        assert!(back.contains(&[0.0, 0.0, 0.0]));
    }
}
