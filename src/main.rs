//! Command-line entry point: solve a TSPLIB instance with tabu search.

use clap::{ArgGroup, Parser, ValueEnum};
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

use tabu_tsp::config::Config;
use tabu_tsp::instances::BuiltinInstance;
use tabu_tsp::problem::Problem;
use tabu_tsp::utils::{format_duration, save_result, SearchStatistics};
use tabu_tsp::TabuTspAlgorithm;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["instance", "builtin"])))]
struct Cli {
    /// Path to a TSPLIB file with a NODE_COORD_SECTION
    #[arg(short, long)]
    instance: Option<PathBuf>,

    /// Use a bundled instance instead of a file
    #[arg(short, long, value_enum)]
    builtin: Option<BuiltinInstance>,

    /// Number of iterations per start
    #[arg(short = 'n', long, default_value_t = 100)]
    iterations: usize,

    /// Capacity of the tabu memory
    #[arg(short, long, default_value_t = 10)]
    tabu_size: usize,

    /// Number of consecutive cities exchanged per move
    #[arg(short, long, default_value_t = 1)]
    segment_length: usize,

    /// Admit tabu moves that yield a new best tour
    #[arg(long)]
    aspiration: bool,

    /// Disable memoization of tour costs
    #[arg(long)]
    no_cache: bool,

    /// Number of independent starts (the first uses the identity tour)
    #[arg(short, long, default_value_t = 1)]
    restarts: usize,

    /// Seed for the random starting tours
    #[arg(long)]
    seed: Option<u64>,

    /// Write the best run, with its convergence log, to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.to_filter())
        .format_timestamp_millis()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> tabu_tsp::Result<()> {
    let problem = match (&cli.instance, cli.builtin) {
        (Some(path), _) => {
            info!("Loading problem from: {}", path.display());
            Problem::from_file(path)?
        }
        (None, Some(builtin)) => builtin.load()?,
        (None, None) => {
            return Err(tabu_tsp::Error::invalid_input(
                "either --instance or --builtin is required",
            ))
        }
    };
    info!(
        "Loaded problem: {} with {} cities",
        problem.name,
        problem.city_count()
    );

    let mut config = Config::new()
        .with_iterations(cli.iterations)
        .with_tabu_capacity(cli.tabu_size)
        .with_segment_length(cli.segment_length)
        .with_aspiration(cli.aspiration)
        .with_cost_cache(!cli.no_cache)
        .with_restarts(cli.restarts);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut algorithm = TabuTspAlgorithm::new(problem, config);
    let best = algorithm.run()?.clone();

    let statistics = SearchStatistics::new(&algorithm.problem, &best);
    println!("{}", statistics.format());
    println!("Total time: {}", format_duration(algorithm.run_time));
    println!("Best tour: {}", best.best_tour);

    if let Some(builtin) = cli.builtin {
        println!(
            "Gap to {} optimum ({}): {:.2}%",
            builtin.name(),
            builtin.optimum(),
            builtin.gap(best.best_cost)
        );
    }

    if let Some(path) = &cli.output {
        info!("Saving result to: {}", path.display());
        save_result(&best, path)?;
    }

    Ok(())
}
