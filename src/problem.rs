//! Problem definition and distance oracles for the symmetric TSP.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Answers point-to-point distance queries between city indices.
///
/// Implementations must be symmetric and return `0.0` on the diagonal.
/// Indexing outside `0..len()` is a contract violation and may panic.
pub trait DistanceOracle {
    /// Distance between cities `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> f64;

    /// Number of cities the oracle knows about.
    fn len(&self) -> usize;

    /// Check if the oracle covers no cities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A city with a stable index and planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Create a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        City { id, x, y }
    }

    /// Calculate the Euclidean distance between two cities.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A TSP instance with an eagerly computed distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub cities: Vec<City>,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new problem. City ids are expected to match their position.
    pub fn new(name: String, cities: Vec<City>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&cities);

        Problem {
            name,
            cities,
            distance_matrix,
        }
    }

    /// Create a problem from bare coordinates, numbering cities in order.
    pub fn from_coordinates(name: impl Into<String>, coordinates: &[(f64, f64)]) -> Self {
        let cities = coordinates
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| City::new(id, x, y))
            .collect();

        Problem::new(name.into(), cities)
    }

    /// Distance between two city indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Number of cities in the instance.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Generate the symmetric distance matrix, filling both halves from one computation.
    fn compute_distance_matrix(cities: &[City]) -> Vec<Vec<f64>> {
        let n = cities.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance(&cities[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }

    /// Parse a TSPLIB instance with a `NODE_COORD_SECTION`.
    ///
    /// Only `NAME` is read from the header. Coordinate lines are `id x y`;
    /// cities are re-indexed from zero in file order. Reading stops at `EOF`.
    pub fn from_tsplib_str(data: &str) -> Result<Self> {
        let mut name = String::from("unnamed");
        let mut in_coord_section = false;
        let mut seen_coord_section = false;
        let mut coordinates = Vec::new();

        for (line_no, line) in data.lines().enumerate() {
            let line = line.trim();

            if line.starts_with("EOF") {
                break;
            }

            if !in_coord_section {
                if line.starts_with("NODE_COORD_SECTION") {
                    in_coord_section = true;
                    seen_coord_section = true;
                } else if let Some((key, value)) = line.split_once(':') {
                    if key.trim() == "NAME" {
                        name = value.trim().to_string();
                    }
                }
                continue;
            }

            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                return Err(Error::parse(format!(
                    "line {}: expected `id x y`, found {:?}",
                    line_no + 1,
                    line
                )));
            }

            let x = parse_coordinate(parts[1], line_no)?;
            let y = parse_coordinate(parts[2], line_no)?;
            coordinates.push((x, y));
        }

        if !seen_coord_section {
            return Err(Error::parse("missing NODE_COORD_SECTION"));
        }

        Ok(Problem::from_coordinates(name, &coordinates))
    }

    /// Load a TSPLIB problem from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_tsplib_str(&data)
    }
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|e| {
        Error::parse(format!(
            "line {}: invalid coordinate {:?}: {}",
            line_no + 1,
            token,
            e
        ))
    })
}

impl DistanceOracle for Problem {
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.get_distance(i, j)
    }

    fn len(&self) -> usize {
        self.city_count()
    }
}

/// Coordinate-backed oracle that computes every distance on demand.
///
/// Uses O(N) memory instead of the O(N²) matrix held by [`Problem`].
#[derive(Debug, Clone)]
pub struct LazyDistances<'a> {
    cities: &'a [City],
}

impl<'a> LazyDistances<'a> {
    pub fn new(cities: &'a [City]) -> Self {
        LazyDistances { cities }
    }
}

impl DistanceOracle for LazyDistances<'_> {
    fn distance(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        self.cities[i].distance(&self.cities[j])
    }

    fn len(&self) -> usize {
        self.cities.len()
    }
}

impl<D: DistanceOracle + ?Sized> DistanceOracle for &D {
    fn distance(&self, i: usize, j: usize) -> f64 {
        (**self).distance(i, j)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
