//! Independent multi-start runs.
//!
//! Every start owns its own engine, memory and cache; runs only meet when the
//! best result is picked at the end.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::search::search;
use crate::solution::SearchResult;
use crate::tour::Tour;

/// Results of all starts, in start order.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    pub runs: Vec<SearchResult>,
    pub best_index: usize,
}

impl MultiStartResult {
    /// The run with the lowest best cost.
    pub fn best(&self) -> &SearchResult {
        &self.runs[self.best_index]
    }
}

/// Starting tour of start `k`: the identity for the first, seeded random tours after.
pub fn starting_tour(n: usize, seed: u64, k: usize) -> Tour {
    if k == 0 {
        Tour::identity(n)
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(k as u64));
        Tour::random(n, &mut rng)
    }
}

fn run_start(problem: &Problem, config: &Config, seed: u64, k: usize) -> Result<SearchResult> {
    let tour = starting_tour(problem.city_count(), seed, k);
    let cost = tour.cost(problem);
    search(&tour, cost, problem, config)
}

/// Run `config.restarts` independent searches and keep every result.
pub fn multi_start(problem: &Problem, config: &Config) -> Result<MultiStartResult> {
    if config.restarts == 0 {
        return Err(Error::invalid_input("at least one start is required"));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "multi-start on {}: {} starts, seed {}",
        problem.name, config.restarts, seed
    );

    #[cfg(feature = "parallel")]
    let runs = (0..config.restarts)
        .into_par_iter()
        .map(|k| run_start(problem, config, seed, k))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let runs = (0..config.restarts)
        .map(|k| run_start(problem, config, seed, k))
        .collect::<Result<Vec<_>>>()?;

    let mut best_index = 0;
    for (k, run) in runs.iter().enumerate() {
        if run.best_cost < runs[best_index].best_cost {
            best_index = k;
        }
    }

    info!(
        "multi-start best {:.2} from start {}",
        runs[best_index].best_cost, best_index
    );

    Ok(MultiStartResult { runs, best_index })
}
