//! Segment-swap neighborhood generation.

use itertools::Itertools;
use std::collections::HashSet;

use super::cache::CostCache;
use crate::error::{Error, Result};
use crate::problem::DistanceOracle;
use crate::tour::Tour;

/// A neighbor of the current tour together with its cost.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub tour: Tour,
    pub cost: f64,
}

/// Build every tour reachable by exchanging two disjoint ranges of
/// `segment_length` cities, ranked by ascending cost.
///
/// Ranges start in `1..len - segment_length`, so the anchor at position 0
/// never moves and the final position is never a range start. Structurally
/// identical tours are kept once, at their first discovery. Equal costs keep
/// discovery order; NaN costs rank last.
///
/// Fails with `EmptyNeighborhood` when no pair of disjoint ranges fits.
pub fn generate<D: DistanceOracle + ?Sized>(
    current: &Tour,
    oracle: &D,
    segment_length: usize,
    mut cache: Option<&mut CostCache>,
) -> Result<Vec<Candidate>> {
    let n = current.len();
    let empty = || Error::EmptyNeighborhood {
        tour_len: n,
        segment_length,
    };

    if segment_length == 0 {
        return Err(empty());
    }

    let mut seen: HashSet<Tour> = HashSet::new();
    let mut neighborhood = Vec::new();

    for (i, j) in (1..n.saturating_sub(segment_length)).tuple_combinations() {
        // Skip overlapping ranges
        if j < i + segment_length {
            continue;
        }

        let tour = current.swap_segments(i, j, segment_length);
        if seen.contains(&tour) {
            continue;
        }

        let cost = match cache.as_deref_mut() {
            Some(cache) => cache.cost_of(&tour, oracle),
            None => tour.cost(oracle),
        };

        seen.insert(tour.clone());
        neighborhood.push(Candidate { tour, cost });
    }

    if neighborhood.is_empty() {
        return Err(empty());
    }

    // Stable sort: ties keep discovery order
    neighborhood.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    Ok(neighborhood)
}
