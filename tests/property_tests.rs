//! Property tests for search invariants on random instances.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tabu_tsp::config::Config;
use tabu_tsp::problem::{DistanceOracle, Problem};
use tabu_tsp::search::TabuSearch;
use tabu_tsp::tour::Tour;
use tabu_tsp::search;

fn instance() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 5..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn best_tour_is_a_permutation(
        coordinates in instance(),
        seed in any::<u64>(),
        iterations in 0usize..12,
        capacity in 0usize..6,
        segment_length in 1usize..3,
    ) {
        let problem = Problem::from_coordinates("random", &coordinates);
        let n = problem.city_count();
        // One spare city past the last range start keeps the neighborhood non-empty
        prop_assume!(n >= 2 * segment_length + 2);

        let tour = Tour::random(n, &mut ChaCha8Rng::seed_from_u64(seed));
        let cost = tour.cost(&problem);
        let config = Config::new()
            .with_iterations(iterations)
            .with_tabu_capacity(capacity)
            .with_segment_length(segment_length);

        let result = search(&tour, cost, &problem, &config).unwrap();

        prop_assert!(result.best_tour.is_permutation_of(&tour));
        prop_assert_eq!(result.best_tour.cities()[0], tour.cities()[0]);
        prop_assert!(result.best_cost <= cost);
        prop_assert!((result.best_tour.cost(&problem) - result.best_cost).abs() < 1e-6);
        prop_assert_eq!(result.history.len(), iterations);
    }

    #[test]
    fn best_cost_never_increases_with_more_iterations(
        coordinates in instance(),
        iterations in 0usize..10,
        capacity in 0usize..5,
    ) {
        let problem = Problem::from_coordinates("random", &coordinates);
        let tour = Tour::identity(problem.city_count());
        let cost = tour.cost(&problem);
        let config = Config::new().with_tabu_capacity(capacity);

        let shorter = search(&tour, cost, &problem, &config.clone().with_iterations(iterations)).unwrap();
        let longer = search(&tour, cost, &problem, &config.with_iterations(iterations + 1)).unwrap();

        prop_assert!(longer.best_cost <= shorter.best_cost);
    }

    #[test]
    fn memory_stays_within_capacity(
        coordinates in instance(),
        capacity in 0usize..4,
        aspiration in any::<bool>(),
    ) {
        let problem = Problem::from_coordinates("random", &coordinates);
        let tour = Tour::identity(problem.city_count());
        let config = Config::new()
            .with_iterations(15)
            .with_tabu_capacity(capacity)
            .with_aspiration(aspiration);

        let mut engine = TabuSearch::new(tour.clone(), tour.cost(&problem), &problem, &config).unwrap();
        let mut previous_best = engine.best_cost();
        for _ in 0..15 {
            engine.step().unwrap();
            prop_assert!(engine.memory().len() <= capacity);
            prop_assert!(engine.best_cost() <= previous_best);
            prop_assert!(engine.current().is_permutation_of(&tour));
            previous_best = engine.best_cost();
        }
    }

    #[test]
    fn oracle_is_symmetric(coordinates in instance()) {
        let problem = Problem::from_coordinates("random", &coordinates);
        for i in 0..problem.city_count() {
            prop_assert_eq!(problem.distance(i, i), 0.0);
            for j in 0..problem.city_count() {
                prop_assert_eq!(problem.distance(i, j), problem.distance(j, i));
            }
        }
    }
}
