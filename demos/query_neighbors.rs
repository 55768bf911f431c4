//! Radius-bounded neighbor queries on a small point set.
//!
//! Shows how the radius, the leaf cap, and values stacked on one point shape
//! the result of `KdTree::query`. Results are sorted by distance (closest first).

use kdpoint::prelude::*;

fn main() {
    let mut tree = KdTree::with_capacity(7);

    tree.insert(0.0, 0.0, "origin");
    tree.insert(1.0, 0.0, "east"); // distance 1 from (0, 0)
    tree.insert(0.0, 1.0, "north"); // distance 1 from (0, 0)
    tree.insert(1.0, 1.0, "north-east"); // distance sqrt(2) ≈ 1.41 from (0, 0)
    tree.insert(3.0, 3.0, "far-a"); // distance sqrt(18) ≈ 4.24 from (0, 0)
    tree.insert(3.0, 3.0, "far-b"); // same point as far-a
    tree.insert(10.0, 10.0, "remote"); // distance sqrt(200) ≈ 14.14 from (0, 0)

    println!("=== Query Neighbors Example ===\n");

    // Query 1: tight radius
    println!("Query 1: radius 0.5 around (0, 0):");
    let results = tree.query(0.0, 0.0, 0.5, 10);
    println!("  Result: {:?}", results);
    assert_eq!(results, vec![&"origin"]);
    println!("  ✓ Correct!\n");

    // Query 2: radius is strict, points exactly on it are excluded
    println!("Query 2: radius 1.0 around (0, 0) (east and north lie exactly on it):");
    let results = tree.query(0.0, 0.0, 1.0, 10);
    println!("  Result: {:?}", results);
    assert_eq!(results, vec![&"origin"]);
    println!("  ✓ Correct!\n");

    // Query 3: wider radius, closest first
    println!("Query 3: radius 2.0 around (0, 0):");
    let results = tree.query(0.0, 0.0, 2.0, 10);
    println!("  Result: {:?}", results);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], &"origin");
    assert_eq!(results[3], &"north-east");
    println!("  ✓ Correct!\n");

    // Query 4: the cap counts leaves, and a shared point is one leaf
    println!("Query 4: radius 1.0 around (3, 3), at most 1 leaf:");
    let results = tree.query(3.0, 3.0, 1.0, 1);
    println!("  Result: {:?}", results);
    assert_eq!(results.len(), 2, "both values at (3, 3) come back together");
    println!("  ✓ Correct!\n");

    // Query 5: reuse one results vector across queries
    println!("Query 5: nearest value to several probes, reusing a vector:");
    let mut results = Vec::new();
    for (x, y) in [(0.2, 0.1), (0.9, 1.2), (9.0, 9.5)] {
        results.clear();
        tree.query_into(x, y, 2.0, 1, &mut results);
        println!("  ({x}, {y}) -> {:?}", results);
    }
    println!();

    // Search statistics from the gather phase
    let gatherer = tree.gather(0.0, 0.0, 5.0);
    println!("=== Gather statistics for radius 5 around (0, 0) ===");
    println!("  leaves:            {}", gatherer.leaf_count());
    println!("  values:            {}", gatherer.value_count());
    println!("  max distance²:     {:?}", gatherer.max_distance_sq());
    println!("  hit gather limit:  {}", gatherer.is_full());
}
