//! Utility functions for reporting and persisting search runs.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::SearchResult;

/// Format a duration as hours, minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Save a search result, including its convergence history, as pretty JSON.
pub fn save_result<P: AsRef<Path>>(result: &SearchResult, path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)?;
    Ok(())
}

/// Load a search result written by [`save_result`].
pub fn load_result<P: AsRef<Path>>(path: P) -> Result<SearchResult> {
    let file = File::open(path)?;
    let result = serde_json::from_reader(BufReader::new(file))?;
    Ok(result)
}

/// Summary of a finished run.
pub struct SearchStatistics {
    pub instance: String,
    pub cities: usize,
    pub iterations: usize,
    pub runtime: Duration,
    pub initial_cost: f64,
    pub best_cost: f64,
    pub best_iteration: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

impl SearchStatistics {
    pub fn new(problem: &Problem, result: &SearchResult) -> Self {
        SearchStatistics {
            instance: problem.name.clone(),
            cities: problem.city_count(),
            iterations: result.iterations,
            runtime: result.run_time,
            initial_cost: result.initial_cost,
            best_cost: result.best_cost,
            best_iteration: result.best_iteration,
            cache_hits: result.cache_hits,
            cache_misses: result.cache_misses,
        }
    }

    /// Improvement of the best cost over the initial cost, in percent.
    pub fn improvement(&self) -> f64 {
        if self.initial_cost > 0.0 {
            (self.initial_cost - self.best_cost) / self.initial_cost * 100.0
        } else {
            0.0
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Instance: {} ({} cities)
- Iterations: {}
- Runtime: {}
- Initial Cost: {:.2}
- Best Cost: {:.2} ({:.2}% better)
- Best Found At Iteration: {}
- Cost Cache: {} hits / {} misses",
            self.instance,
            self.cities,
            self.iterations,
            format_duration(self.runtime),
            self.initial_cost,
            self.best_cost,
            self.improvement(),
            self.best_iteration,
            self.cache_hits,
            self.cache_misses
        )
    }
}
