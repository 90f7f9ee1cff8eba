//! Tabu search engine over segment-swap neighborhoods.
//!
//! Each iteration ranks the full neighborhood of the current tour and moves
//! to the cheapest candidate whose move signature is not remembered in the
//! tabu memory, even when that candidate is worse than the current tour.

pub mod cache;
pub mod memory;
pub mod neighborhood;

use log::{debug, info, trace};
use std::time::Instant;

use self::cache::CostCache;
use self::memory::{MoveSignature, TabuMemory};
use self::neighborhood::Candidate;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::problem::DistanceOracle;
use crate::solution::{IterationRecord, SearchResult};
use crate::tour::Tour;

/// What happened in one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Cost of the accepted candidate, now the current cost
    pub cost: f64,
    /// The accepted move was tabu and admitted by aspiration or exhaustion
    pub tabu_overridden: bool,
    /// The accepted candidate set a new best cost
    pub improved: bool,
}

/// State of a single tabu search run.
///
/// One engine owns its memory and cost cache; nothing is shared between runs.
pub struct TabuSearch<'a, D: DistanceOracle + ?Sized> {
    oracle: &'a D,
    segment_length: usize,
    iterations: usize,
    aspiration: bool,
    initial_cost: f64,
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    best_iteration: usize,
    iteration: usize,
    memory: TabuMemory,
    cache: Option<CostCache>,
    history: Vec<IterationRecord>,
}

impl<'a, D: DistanceOracle + ?Sized> TabuSearch<'a, D> {
    /// Create an engine positioned at the initial tour.
    ///
    /// Fails with `InvalidInput` when the tour is not a permutation of the
    /// oracle's cities, the cost is negative or NaN, or the tour is shorter
    /// than `2 * segment_length + 1`.
    pub fn new(
        initial_tour: Tour,
        initial_cost: f64,
        oracle: &'a D,
        config: &Config,
    ) -> Result<Self> {
        config.validate()?;
        initial_tour.validate(oracle.len())?;

        if initial_cost.is_nan() || initial_cost < 0.0 {
            return Err(Error::invalid_input(format!(
                "initial cost must be a non-negative number, got {}",
                initial_cost
            )));
        }

        let min_len = 2 * config.segment_length + 1;
        if initial_tour.len() < min_len {
            return Err(Error::invalid_input(format!(
                "a tour of {} cities is too short for segment length {} (need at least {})",
                initial_tour.len(),
                config.segment_length,
                min_len
            )));
        }

        Ok(TabuSearch {
            oracle,
            segment_length: config.segment_length,
            iterations: config.iterations,
            aspiration: config.aspiration,
            initial_cost,
            best: initial_tour.clone(),
            best_cost: initial_cost,
            current: initial_tour,
            current_cost: initial_cost,
            best_iteration: 0,
            iteration: 0,
            memory: TabuMemory::new(config.tabu_capacity),
            cache: config.cost_cache.then(CostCache::new),
            history: Vec::with_capacity(config.iterations),
        })
    }

    /// Execute one iteration: rank the neighborhood, accept, remember, track best.
    ///
    /// Fails with `EmptyNeighborhood` when the current tour admits no move,
    /// which happens for tours of exactly `2 * segment_length + 1` cities.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let mut neighborhood = neighborhood::generate(
            &self.current,
            self.oracle,
            self.segment_length,
            self.cache.as_mut(),
        )?;

        let (index, signature, tabu_overridden) = self.select(&neighborhood);
        let Candidate { tour, cost } = neighborhood.swap_remove(index);

        self.memory.push(signature);
        self.current = tour;
        self.current_cost = cost;
        self.iteration += 1;

        let improved = cost < self.best_cost;
        if improved {
            debug!(
                "iteration {}: new best {:.2} (was {:.2})",
                self.iteration, cost, self.best_cost
            );
            self.best = self.current.clone();
            self.best_cost = cost;
            self.best_iteration = self.iteration;
        }

        trace!(
            "iteration {}: current {:.2}, best {:.2}, tabu {}/{}",
            self.iteration,
            self.current_cost,
            self.best_cost,
            self.memory.len(),
            self.memory.capacity()
        );

        self.history.push(IterationRecord {
            iteration: self.iteration,
            current_cost: self.current_cost,
            best_cost: self.best_cost,
        });

        Ok(StepOutcome {
            cost,
            tabu_overridden,
            improved,
        })
    }

    /// Pick the first admissible candidate in ranked order.
    ///
    /// A candidate is admissible when its signature (either orientation) is
    /// not tabu, or when aspiration is enabled and it beats the best cost.
    /// If none is admissible the top-ranked candidate is forced through.
    fn select(&self, neighborhood: &[Candidate]) -> (usize, MoveSignature, bool) {
        for (index, candidate) in neighborhood.iter().enumerate() {
            let signature =
                MoveSignature::between(&self.current, &candidate.tour, self.segment_length);

            if !self.memory.is_tabu(&signature) {
                return (index, signature, false);
            }

            if self.aspiration && candidate.cost < self.best_cost {
                debug!(
                    "iteration {}: aspiration admits tabu move {:?}",
                    self.iteration + 1,
                    signature
                );
                return (index, signature, true);
            }
        }

        debug!(
            "iteration {}: all {} candidates tabu, forcing the best one",
            self.iteration + 1,
            neighborhood.len()
        );
        let signature =
            MoveSignature::between(&self.current, &neighborhood[0].tour, self.segment_length);
        (0, signature, true)
    }

    /// Run the remaining iteration budget.
    pub fn run(&mut self) -> Result<()> {
        while self.iteration < self.iterations {
            self.step()?;
        }
        Ok(())
    }

    /// Consume the engine and report the best tour found.
    pub fn into_result(self, run_time: std::time::Duration) -> SearchResult {
        let (cache_hits, cache_misses) = self
            .cache
            .as_ref()
            .map_or((0, 0), |cache| (cache.hits(), cache.misses()));

        SearchResult {
            initial_cost: self.initial_cost,
            best_tour: self.best,
            best_cost: self.best_cost,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            history: self.history,
            cache_hits,
            cache_misses,
            run_time,
        }
    }

    pub fn current(&self) -> &Tour {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn best(&self) -> &Tour {
        &self.best
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    pub fn history(&self) -> &[IterationRecord] {
        &self.history
    }
}

/// Run a complete tabu search from `initial_tour`.
///
/// Stateless and reentrant: all state lives in a private engine, so
/// concurrent calls with different oracles are safe.
pub fn search<D: DistanceOracle + ?Sized>(
    initial_tour: &Tour,
    initial_cost: f64,
    oracle: &D,
    config: &Config,
) -> Result<SearchResult> {
    let start_time = Instant::now();
    let mut engine = TabuSearch::new(initial_tour.clone(), initial_cost, oracle, config)?;

    info!(
        "tabu search: {} cities, {} iterations, tabu capacity {}, segment length {}",
        initial_tour.len(),
        config.iterations,
        config.tabu_capacity,
        config.segment_length
    );

    engine.run()?;

    let result = engine.into_result(start_time.elapsed());
    info!(
        "tabu search finished: best {:.2} at iteration {} (initial {:.2})",
        result.best_cost, result.best_iteration, initial_cost
    );

    Ok(result)
}
