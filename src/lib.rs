//! # Tabu TSP
//!
//! A tabu search for the symmetric Travelling Salesman Problem.
//!
//! Starting from a given tour, every iteration enumerates all exchanges of two
//! disjoint, equal-length segments, ranks the resulting tours by cost and moves
//! to the cheapest one whose move is not forbidden by a bounded FIFO memory of
//! recent moves. Worse moves are accepted, which lets the search leave local
//! optima; the best tour seen is kept aside and returned.
//!
//! Tour costs are closed cycles: the edge from the last city back to the
//! anchor at position 0 is always included.

pub mod config;
pub mod error;
pub mod instances;
pub mod problem;
pub mod restart;
pub mod search;
pub mod solution;
pub mod tour;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::search::search;

use crate::config::Config;
use crate::problem::Problem;
use crate::restart::{multi_start, MultiStartResult};
use crate::solution::SearchResult;

use std::time::{Duration, Instant};

/// Runs the configured number of tabu searches on one problem.
pub struct TabuTspAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub result: Option<MultiStartResult>,
    pub run_time: Duration,
}

impl TabuTspAlgorithm {
    /// Create a new instance for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        TabuTspAlgorithm {
            problem,
            config,
            result: None,
            run_time: Duration::from_secs(0),
        }
    }

    /// Run every start and return the best result.
    pub fn run(&mut self) -> Result<&SearchResult> {
        let start_time = Instant::now();
        let result = multi_start(&self.problem, &self.config)?;
        self.run_time = start_time.elapsed();

        Ok(self.result.insert(result).best())
    }

    /// The best result of the last run, if any.
    pub fn best(&self) -> Option<&SearchResult> {
        self.result.as_ref().map(MultiStartResult::best)
    }
}
