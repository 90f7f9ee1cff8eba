//! Configuration parameters for the tabu search.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration settings for a tabu search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of iterations to execute
    pub iterations: usize,
    /// Maximum number of move signatures held in the tabu memory
    pub tabu_capacity: usize,
    /// Number of consecutive cities exchanged by one move
    pub segment_length: usize,
    /// Admit a tabu move when it yields a new best cost
    pub aspiration: bool,
    /// Memoize candidate costs by tour for the duration of a run
    pub cost_cache: bool,
    /// Number of independent starts used by multi-start runs
    pub restarts: usize,
    /// Seed for random starting tours
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iterations: 100,
            tabu_capacity: 10,
            segment_length: 1,
            aspiration: false,
            cost_cache: true,
            restarts: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the tabu memory capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Set the segment length of swap moves.
    pub fn with_segment_length(mut self, length: usize) -> Self {
        self.segment_length = length;
        self
    }

    /// Enable or disable the aspiration criterion.
    pub fn with_aspiration(mut self, enabled: bool) -> Self {
        self.aspiration = enabled;
        self
    }

    /// Enable or disable cost memoization.
    pub fn with_cost_cache(mut self, enabled: bool) -> Self {
        self.cost_cache = enabled;
        self
    }

    /// Set the number of independent starts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameter values no search can run with.
    pub fn validate(&self) -> Result<()> {
        if self.segment_length == 0 {
            return Err(Error::invalid_input("segment length must be at least 1"));
        }
        Ok(())
    }
}
