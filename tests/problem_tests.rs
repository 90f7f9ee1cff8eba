//! Tests for the distance oracles and instance loading.

use tabu_tsp::instances::BuiltinInstance;
use tabu_tsp::problem::{City, DistanceOracle, LazyDistances, Problem};
use tabu_tsp::Error;

/// Creates a small problem with cities at irregular positions.
fn create_test_problem() -> Problem {
    Problem::from_coordinates(
        "TestProblem",
        &[
            (0.0, 0.0),
            (3.0, 4.0),
            (6.0, 0.0),
            (-2.5, 7.25),
            (10.0, 10.0),
            (1.0, -1.0),
        ],
    )
}

#[test]
fn test_city_distance() {
    let a = City::new(0, 0.0, 0.0);
    let b = City::new(1, 3.0, 4.0);

    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);
    assert_eq!(a.distance(&a), 0.0);
}

#[test]
fn test_distance_matrix_symmetric_with_zero_diagonal() {
    let problem = create_test_problem();
    let n = problem.city_count();

    for i in 0..n {
        assert_eq!(problem.distance(i, i), 0.0);
        for j in 0..n {
            assert_eq!(problem.distance(i, j), problem.distance(j, i));
            if i != j {
                assert!(problem.distance(i, j) > 0.0);
            }
        }
    }
}

#[test]
fn test_lazy_distances_match_matrix() {
    let problem = create_test_problem();
    let lazy = LazyDistances::new(&problem.cities);

    assert_eq!(lazy.len(), DistanceOracle::len(&problem));
    for i in 0..problem.city_count() {
        for j in 0..problem.city_count() {
            assert!((lazy.distance(i, j) - problem.get_distance(i, j)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_triangle_inequality_on_euclidean_points() {
    let problem = create_test_problem();
    let n = problem.city_count();

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                assert!(
                    problem.distance(i, k)
                        <= problem.distance(i, j) + problem.distance(j, k) + 1e-9
                );
            }
        }
    }
}

#[test]
fn test_parse_tsplib() {
    let data = "NAME: tiny
TYPE: TSP
COMMENT: three cities
DIMENSION: 3
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 3 0
3 3.0 4.0
EOF
";
    let problem = Problem::from_tsplib_str(data).unwrap();

    assert_eq!(problem.name, "tiny");
    assert_eq!(problem.city_count(), 3);
    assert_eq!(problem.cities[2], City::new(2, 3.0, 4.0));
    assert_eq!(problem.get_distance(0, 2), 5.0);
}

#[test]
fn test_parse_tsplib_errors() {
    let missing_section = "NAME: broken\nDIMENSION: 2\nEOF\n";
    assert!(matches!(
        Problem::from_tsplib_str(missing_section),
        Err(Error::Parse(_))
    ));

    let bad_number = "NAME: broken\nNODE_COORD_SECTION\n1 0.0 zero\nEOF\n";
    assert!(matches!(
        Problem::from_tsplib_str(bad_number),
        Err(Error::Parse(_))
    ));

    let short_line = "NAME: broken\nNODE_COORD_SECTION\n1 0.0\nEOF\n";
    assert!(matches!(
        Problem::from_tsplib_str(short_line),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Problem::from_file("does/not/exist.tsp");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_builtin_instances_load() {
    let berlin = BuiltinInstance::Berlin52.load().unwrap();
    assert_eq!(berlin.name, "berlin52");
    assert_eq!(berlin.city_count(), 52);
    assert_eq!(berlin.cities[0], City::new(0, 565.0, 575.0));

    let kroa = BuiltinInstance::Kroa100.load().unwrap();
    assert_eq!(kroa.name, "kroA100");
    assert_eq!(kroa.city_count(), 100);
    assert_eq!(kroa.cities[99], City::new(99, 3950.0, 1558.0));
}

#[test]
fn test_builtin_gap() {
    let instance = BuiltinInstance::Berlin52;
    assert_eq!(instance.gap(instance.optimum()), 0.0);
    assert!((instance.gap(7542.0 * 1.1) - 10.0).abs() < 1e-9);
}
