#[cfg(test)]
mod proptests {
    use crate::KdTree;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = f64> {
        // Coarse grid so that duplicate coordinates actually occur
        (-50_i32..50).prop_map(|v| f64::from(v) * 0.5)
    }

    fn points(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((coord(), coord()), 1..max)
    }

    fn dist_sq(a: (f64, f64), b: (f64, f64)) -> f64 {
        (a.0 - b.0) * (a.0 - b.0) + (a.1 - b.1) * (a.1 - b.1)
    }

    proptest! {
        /// Every inserted value is found by a tiny-radius query at its own point.
        #[test]
        fn prop_inserted_value_is_found(pts in points(200)) {
            let mut tree = KdTree::new();
            for (i, &(x, y)) in pts.iter().enumerate() {
                tree.insert(x, y, i);
            }
            prop_assert_eq!(tree.len(), pts.len());
            for (i, &(x, y)) in pts.iter().enumerate() {
                let results = tree.query(x, y, 1e-6, 1);
                prop_assert!(results.contains(&&i));
            }
        }

        /// Output is ascending in distance and strictly inside the radius.
        #[test]
        fn prop_results_ordered_and_in_radius(
            pts in points(200),
            qx in -30.0_f64..30.0,
            qy in -30.0_f64..30.0,
            radius in 0.1_f64..40.0,
            max_count in 1_usize..20,
        ) {
            let tree: KdTree<usize> = pts.iter().enumerate().map(|(i, &(x, y))| (x, y, i)).collect();
            let results = tree.query(qx, qy, radius, max_count);
            let distances: Vec<f64> = results.iter().map(|&&i| dist_sq(pts[i], (qx, qy))).collect();
            prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(distances.iter().all(|&d| d < radius * radius));
        }

        /// `max_count` caps the number of distinct leaves; values beyond it come from shared points.
        #[test]
        fn prop_max_count_bounds_distinct_points(
            pts in points(200),
            qx in -30.0_f64..30.0,
            qy in -30.0_f64..30.0,
            max_count in 1_usize..10,
        ) {
            let tree: KdTree<usize> = pts.iter().enumerate().map(|(i, &(x, y))| (x, y, i)).collect();
            let results = tree.query(qx, qy, 20.0, max_count);
            let mut leaves: Vec<(f64, f64)> = results.iter().map(|&&i| pts[i]).collect();
            leaves.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            leaves.dedup();
            prop_assert!(leaves.len() <= max_count);
        }

        /// With the cutoff disabled, a larger radius never loses results.
        #[test]
        fn prop_exact_search_is_monotonic(
            pts in points(150),
            qx in -30.0_f64..30.0,
            qy in -30.0_f64..30.0,
            r1 in 0.1_f64..20.0,
            extra in 0.0_f64..20.0,
        ) {
            let tree: KdTree<usize> = pts
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| (x, y, i))
                .collect::<KdTree<usize>>()
                .with_gather_limit(usize::MAX);
            let mut small: Vec<usize> = tree.query(qx, qy, r1, usize::MAX).into_iter().copied().collect();
            let large: Vec<usize> = tree.query(qx, qy, r1 + extra, usize::MAX).into_iter().copied().collect();
            small.retain(|i| !large.contains(i));
            prop_assert!(small.is_empty(), "lost {:?} when growing the radius", small);
        }
    }
}
