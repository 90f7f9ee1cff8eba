//! Per-run memoization of tour costs.

use std::collections::HashMap;

use crate::problem::DistanceOracle;
use crate::tour::Tour;

/// Grow-only map from a tour to its cost.
///
/// Keys are tours, not oracle-qualified, so a cache must only ever be used
/// with the oracle it was filled from. The engine owns one per run.
#[derive(Debug, Default)]
pub struct CostCache {
    costs: HashMap<Vec<usize>, f64>,
    hits: usize,
    misses: usize,
}

impl CostCache {
    pub fn new() -> Self {
        CostCache::default()
    }

    /// Return the cached cost of `tour`, computing and storing it on a miss.
    pub fn cost_of<D: DistanceOracle + ?Sized>(&mut self, tour: &Tour, oracle: &D) -> f64 {
        if let Some(&cost) = self.costs.get(tour.cities()) {
            self.hits += 1;
            return cost;
        }

        self.misses += 1;
        let cost = tour.cost(oracle);
        self.costs.insert(tour.cities().to_vec(), cost);
        cost
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
