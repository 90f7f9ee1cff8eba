//! Tour representation for the TSP.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::problem::DistanceOracle;

/// A visiting order over all cities.
///
/// Position 0 is the anchor: neighborhood moves never touch it, which removes
/// rotated duplicates of the same cycle. Tours are values; moves build new ones.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Tour {
            cities: (0..n).collect(),
        }
    }

    /// A random tour that keeps city 0 as the anchor and shuffles the rest.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        if n > 1 {
            cities[1..].shuffle(rng);
        }
        Tour { cities }
    }

    /// The visiting order as a slice of city indices.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Consume the tour, returning the visiting order.
    pub fn into_inner(self) -> Vec<usize> {
        self.cities
    }

    /// Length of the closed cycle: every consecutive edge plus the edge back to the anchor.
    pub fn cost<D: DistanceOracle + ?Sized>(&self, oracle: &D) -> f64 {
        let n = self.cities.len();
        if n < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        for i in 0..n - 1 {
            total_distance += oracle.distance(self.cities[i], self.cities[i + 1]);
        }

        // Closing edge
        total_distance += oracle.distance(self.cities[n - 1], self.cities[0]);

        total_distance
    }

    /// Return a new tour with the ranges `i..i+len` and `j..j+len` exchanged element-wise.
    ///
    /// The ranges must not overlap and must lie inside the tour.
    pub fn swap_segments(&self, i: usize, j: usize, len: usize) -> Tour {
        debug_assert!(i + len <= j || j + len <= i, "segments overlap");

        let mut cities = self.cities.clone();
        for k in 0..len {
            cities.swap(i + k, j + k);
        }
        Tour { cities }
    }

    /// Check that this tour is a permutation of `0..n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.cities.len() != n {
            return Err(Error::invalid_input(format!(
                "tour visits {} cities, expected {}",
                self.cities.len(),
                n
            )));
        }

        let mut seen = vec![false; n];
        for &city in &self.cities {
            if city >= n {
                return Err(Error::invalid_input(format!(
                    "city index {} is out of range for {} cities",
                    city, n
                )));
            }
            if seen[city] {
                return Err(Error::invalid_input(format!(
                    "city {} appears more than once",
                    city
                )));
            }
            seen[city] = true;
        }

        Ok(())
    }

    /// Check if both tours visit exactly the same set of cities.
    pub fn is_permutation_of(&self, other: &Tour) -> bool {
        if self.cities.len() != other.cities.len() {
            return false;
        }

        let mut a = self.cities.clone();
        let mut b = other.cities.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Tour { cities }
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.cities
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour{:?}", self.cities)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", city)?;
        }
        if let Some(first) = self.cities.first() {
            write!(f, " -> {}", first)?;
        }
        Ok(())
    }
}
