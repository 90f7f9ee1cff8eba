//! Basic example of using the tabu search library.

use tabu_tsp::config::Config;
use tabu_tsp::instances::BuiltinInstance;
use tabu_tsp::problem::Problem;
use tabu_tsp::search;
use tabu_tsp::tour::Tour;
use tabu_tsp::utils::{format_duration, save_result, SearchStatistics};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get instance path from command line or use the bundled berlin52
    let args: Vec<String> = env::args().collect();
    let problem = if args.len() > 1 {
        println!("Loading problem from: {}", args[1]);
        Problem::from_file(&args[1])?
    } else {
        BuiltinInstance::Berlin52.load()?
    };
    println!(
        "Loaded problem: {} with {} cities",
        problem.name,
        problem.city_count()
    );

    // Configure search
    let config = Config::new()
        .with_iterations(200)
        .with_tabu_capacity(20)
        .with_segment_length(1);

    // Start from the identity tour
    let initial_tour = Tour::identity(problem.city_count());
    let initial_cost = initial_tour.cost(&problem);
    println!("Initial tour cost: {:.2}", initial_cost);

    let result = search(&initial_tour, initial_cost, &problem, &config)?;

    // Print results
    println!("Search completed in {}", format_duration(result.run_time));
    println!("{}", SearchStatistics::new(&problem, &result).format());
    println!("Best tour: {}", result.best_tour);

    // Save result with its convergence log
    let output_path = format!("{}.json", problem.name);
    println!("Saving result to: {}", output_path);
    save_result(&result, &output_path)?;

    Ok(())
}
