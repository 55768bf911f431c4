#[cfg(test)]
mod integration_tests {
    use crate::KdTree;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    /// Random point cloud in [0, extent)², value = index into the returned vector
    fn random_points(seed: u64, count: usize, extent: f64) -> Vec<(f64, f64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| (rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
            .collect()
    }

    fn build(points: &[(f64, f64)]) -> KdTree<usize> {
        let mut tree = KdTree::with_capacity(points.len());
        for (i, &(x, y)) in points.iter().enumerate() {
            tree.insert(x, y, i);
        }
        tree
    }

    fn dist_sq(a: (f64, f64), b: (f64, f64)) -> f64 {
        (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1)
    }

    #[test]
    fn test_scenario_three_points() {
        let mut tree = KdTree::new();
        tree.insert(0.0, 0.0, "A");
        tree.insert(10.0, 0.0, "B");
        tree.insert(0.0, 10.0, "C");

        assert_eq!(tree.query(0.0, 0.0, 5.0, 10), vec![&"A"]);

        let wide = tree.query(0.0, 0.0, 15.0, 10);
        assert_eq!(wide.len(), 3);
        assert_eq!(wide[0], &"A", "closest value comes first");
        let rest: HashSet<_> = wide[1..].iter().copied().collect();
        assert_eq!(rest, HashSet::from([&"B", &"C"]));
    }

    #[test]
    fn test_scenario_duplicate_coordinate() {
        let mut tree = KdTree::new();
        tree.insert(5.0, 5.0, "X1");
        tree.insert(5.0, 5.0, "X2");

        let found: HashSet<_> = tree.query(5.0, 5.0, 1.0, 10).into_iter().collect();
        assert_eq!(found, HashSet::from([&"X1", &"X2"]));
    }

    #[test]
    fn test_scenario_every_point_finds_itself() {
        let points = random_points(95_756_739, 1_000, 1000.0);
        let tree = build(&points);
        assert_eq!(tree.len(), 1_000);

        for (i, &(x, y)) in points.iter().enumerate() {
            let results = tree.query(x, y, 0.001, 5);
            assert!(results.contains(&&i), "point {i} at ({x}, {y}) not found: {results:?}");
        }
    }

    #[test]
    fn test_results_sorted_by_distance() {
        let points = random_points(7, 500, 1000.0);
        let tree = build(&points);
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..100 {
            let q = (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0));
            let results = tree.query(q.0, q.1, 150.0, 100);
            let distances: Vec<f64> = results.iter().map(|&&i| dist_sq(points[i], q)).collect();
            assert!(
                distances.windows(2).all(|w| w[0] <= w[1]),
                "distances not ascending: {distances:?}"
            );
            assert!(distances.iter().all(|&d| d < 150.0 * 150.0), "result outside radius");
        }
    }

    #[test]
    fn test_radius_monotonicity() {
        // Sparse enough that no query fills the gatherer
        let points = random_points(11, 300, 1000.0);
        let tree = build(&points);
        let mut rng = StdRng::seed_from_u64(12);

        for _ in 0..100 {
            let q = (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0));
            let small: HashSet<usize> = tree.query(q.0, q.1, 40.0, usize::MAX).into_iter().copied().collect();
            let large: HashSet<usize> = tree.query(q.0, q.1, 80.0, usize::MAX).into_iter().copied().collect();
            assert!(small.is_subset(&large), "radius 40 results {small:?} not within radius 80 results {large:?}");
        }
    }

    #[test]
    fn test_exact_search_matches_brute_force() {
        let points = random_points(21, 2_000, 100.0);
        let tree = build(&points).with_gather_limit(usize::MAX);
        let mut rng = StdRng::seed_from_u64(22);

        for _ in 0..50 {
            let q = (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            let radius = rng.random_range(1.0..20.0);
            let found: HashSet<usize> = tree.query(q.0, q.1, radius, usize::MAX).into_iter().copied().collect();
            let expected: HashSet<usize> = (0..points.len())
                .filter(|&i| dist_sq(points[i], q) < radius * radius)
                .collect();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_default_limit_bounds_dense_queries() {
        // 2000 points in a 100x100 square: a radius-20 query covers ~250 points
        let points = random_points(31, 2_000, 100.0);
        let tree = build(&points);
        let mut rng = StdRng::seed_from_u64(32);

        for _ in 0..50 {
            let q = (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            let gatherer = tree.gather(q.0, q.1, 20.0);
            let in_range = points.iter().filter(|&&p| dist_sq(p, q) < 400.0).count();
            assert!(gatherer.value_count() <= in_range);
            assert!(gatherer.max_distance_sq().is_none_or(|d| d < 400.0));
        }
    }

    #[test]
    fn test_max_count_bounds_leaves() {
        // Grid with three values stacked at every integer point
        let mut tree = KdTree::new();
        for x in 0..10 {
            for y in 0..10 {
                for k in 0..3 {
                    tree.insert(f64::from(x), f64::from(y), (x, y, k));
                }
            }
        }

        for max_count in [1, 2, 5, 9] {
            let results = tree.query(4.2, 4.7, 3.0, max_count);
            let leaves: HashSet<(i32, i32)> = results.iter().map(|&&(x, y, _)| (x, y)).collect();
            assert!(leaves.len() <= max_count);
            assert_eq!(results.len(), leaves.len() * 3, "every drained leaf contributes all its values");
            assert!(results.len() > max_count, "multi-value leaves exceed max_count values");
        }
    }

    #[test]
    fn test_rebuild_per_tick_pattern() {
        // Insert everything, query everything, discard; repeated like a simulation loop
        let mut rng = StdRng::seed_from_u64(41);
        let mut positions = random_points(40, 200, 500.0);
        let mut tree = KdTree::with_capacity(positions.len());

        for _tick in 0..10 {
            tree.clear();
            for (i, &(x, y)) in positions.iter().enumerate() {
                tree.insert(x, y, i);
            }
            let mut neighbors = Vec::new();
            for (i, &(x, y)) in positions.iter().enumerate() {
                neighbors.clear();
                tree.query_into(x, y, 30.0, 8, &mut neighbors);
                assert!(neighbors.contains(&&i));
            }
            for p in &mut positions {
                p.0 += rng.random_range(-5.0..5.0);
                p.1 += rng.random_range(-5.0..5.0);
            }
        }
    }
}
