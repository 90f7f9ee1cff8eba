//! Search results and convergence history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::tour::Tour;

/// Costs observed after one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based iteration number
    pub iteration: usize,
    /// Cost of the tour accepted in this iteration
    pub current_cost: f64,
    /// Best cost seen up to and including this iteration
    pub best_cost: f64,
}

/// Outcome of a tabu search run.
#[derive(Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Cost of the tour the run started from
    pub initial_cost: f64,
    /// The best tour found, or the initial tour if nothing beat it
    pub best_tour: Tour,
    /// Closed-cycle cost of the best tour
    pub best_cost: f64,
    /// Iterations executed
    pub iterations: usize,
    /// Iteration at which the best tour was found (0 = initial tour)
    pub best_iteration: usize,
    /// Per-iteration convergence log
    pub history: Vec<IterationRecord>,
    /// Candidate costs served from the memo cache
    pub cache_hits: usize,
    /// Candidate costs computed from the oracle
    pub cache_misses: usize,
    /// Wall-clock time of the run
    pub run_time: Duration,
}

impl SearchResult {
    /// Best cost after each iteration, preceded by the initial cost.
    pub fn convergence(&self) -> Vec<f64> {
        std::iter::once(self.initial_cost)
            .chain(self.history.iter().map(|record| record.best_cost))
            .collect()
    }
}

impl fmt::Debug for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SearchResult:")?;
        writeln!(f, "  Initial Cost: {:.2}", self.initial_cost)?;
        writeln!(f, "  Best Cost: {:.2}", self.best_cost)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Best Iteration: {}", self.best_iteration)?;
        writeln!(
            f,
            "  Cache: {} hits / {} misses",
            self.cache_hits, self.cache_misses
        )?;
        writeln!(f, "  Tour: {}", self.best_tour)?;

        Ok(())
    }
}
