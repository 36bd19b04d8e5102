//! Firefly search CLI: compares the plain firefly algorithm against the
//! simulated annealing hybrid by counting objective evaluations to
//! convergence on the Ackley benchmark.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fireflyalg::benchmarks::Ackley;
use fireflyalg::bounds::Bounds;
use fireflyalg::rng::RandomNumberGenerator;
use fireflyalg::search::{
    ConvergenceCriteria, SearchDriver, SearchOptions, SearchOutcome, Termination,
};
use fireflyalg::strategy::{AnnealedFlight, AnnealingSchedule, OrdinaryFlight};

const EPSILON: f64 = 0.01;
const ALPHA: f64 = 0.2;
const BETA0: f64 = 1.0;
const GAMMA: f64 = 0.005;
const INITIAL_TEMPERATURE: f64 = 10.0;
const COOLING_RATE: f64 = 0.85;
const ALPHA_DECAY: f64 = 0.9;

#[derive(Parser, Debug)]
#[command(name = "fireflyalg")]
#[command(about = "Compares firefly search strategies by objective evaluations to convergence")]
#[command(version)]
struct Cli {
    /// Number of fireflies in the population
    #[arg(short = 'n', long, default_value_t = 50)]
    population: usize,

    /// Generation cap per run
    #[arg(short = 'g', long, default_value_t = 50)]
    generations: usize,

    /// Problem dimensionality
    #[arg(short = 'd', long, default_value_t = 2)]
    dimension: usize,

    /// Lower bound shared by every dimension
    #[arg(short = 'm', long, default_value_t = -5.0, allow_negative_numbers = true)]
    min: f64,

    /// Upper bound shared by every dimension
    #[arg(short = 'x', long, default_value_t = 5.0, allow_negative_numbers = true)]
    max: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    // Diagnostics go to stderr so stdout carries only the comparison report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fireflyalg=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.exit()
        }
        Err(_) => {
            // Malformed flags are non-fatal; the run proceeds on defaults.
            eprintln!(
                "usage: fireflyalg [-n <population>] [-g <generations>] [-d <dimension>] [-m <min>] [-x <max>] [--seed <seed>]"
            );
            Cli::parse_from(["fireflyalg"])
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> fireflyalg::Result<()> {
    let bounds = Bounds::uniform(cli.dimension, cli.min, cli.max)?;
    let options = SearchOptions::builder()
        .population_size(cli.population)
        .max_generations(cli.generations)
        .alpha(ALPHA)
        .beta0(BETA0)
        .gamma(GAMMA)
        .build();

    // TODO: make the objective selectable from the command line
    let criteria = ConvergenceCriteria::new(Ackley::KNOWN_MINIMUM, EPSILON)?;

    let mut rng = match cli.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    println!("Beginning standard firefly algorithm...");
    let mut ordinary = SearchDriver::new(OrdinaryFlight::new(), Ackley);
    let outcome = ordinary.run(&options, &bounds, &criteria, &mut rng)?;
    report(&outcome);

    println!("Beginning firefly algorithm with simulated annealing...");
    let schedule =
        AnnealingSchedule::new(INITIAL_TEMPERATURE, COOLING_RATE)?.with_alpha_decay(ALPHA_DECAY)?;
    let mut annealed = SearchDriver::new(AnnealedFlight::new(schedule), Ackley);
    let outcome = annealed.run(&options, &bounds, &criteria, &mut rng)?;
    report(&outcome);

    Ok(())
}

fn report(outcome: &SearchOutcome) {
    match outcome.termination {
        Termination::Converged => {
            println!(
                "Evaluations necessary to be within epsilon of optima: {}\n",
                outcome.evaluations
            );
        }
        Termination::Exhausted => {
            println!(
                "Did not converge within {} generations; evaluations spent: {} (best fitness {:.6})\n",
                outcome.generations,
                outcome.evaluations,
                outcome.best.fitness()
            );
        }
    }
}
