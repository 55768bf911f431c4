//! Boids-style simulation loop driving the tree.
//!
//! Every tick the tree is cleared, every boid position is inserted, and each
//! boid queries its neighbors within a fixed radius to steer by separation,
//! alignment and cohesion. This is the call pattern the tree is built for:
//! many inserts, then many queries, then discard.

use kdpoint::KdTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const NUM_BOIDS: usize = 2_000;
const NUM_TICKS: usize = 100;
const WORLD: f64 = 1_000.0;
const NEIGHBOR_RADIUS: f64 = 25.0;
const MAX_NEIGHBORS: usize = 10;
const MAX_SPEED: f64 = 4.0;

#[derive(Clone, Copy, Debug)]
struct Boid {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

fn main() {
    let mut rng = StdRng::seed_from_u64(95_756_739);
    let mut boids: Vec<Boid> = (0..NUM_BOIDS)
        .map(|_| Boid {
            x: rng.random_range(0.0..WORLD),
            y: rng.random_range(0.0..WORLD),
            vx: rng.random_range(-1.0..1.0),
            vy: rng.random_range(-1.0..1.0),
        })
        .collect();

    let mut tree = KdTree::with_capacity(NUM_BOIDS);
    let mut steering = vec![(0.0, 0.0); NUM_BOIDS];
    let mut total_neighbors = 0usize;

    let start = Instant::now();
    for _ in 0..NUM_TICKS {
        tree.clear();
        for (i, boid) in boids.iter().enumerate() {
            tree.insert(boid.x, boid.y, i);
        }

        let mut neighbors = Vec::with_capacity(MAX_NEIGHBORS * 2);
        for (i, boid) in boids.iter().enumerate() {
            neighbors.clear();
            tree.query_into(boid.x, boid.y, NEIGHBOR_RADIUS, MAX_NEIGHBORS, &mut neighbors);

            let (mut sep_x, mut sep_y) = (0.0, 0.0);
            let (mut avg_vx, mut avg_vy) = (0.0, 0.0);
            let (mut center_x, mut center_y) = (0.0, 0.0);
            let mut count = 0.0;
            for &&j in &neighbors {
                if j == i {
                    continue;
                }
                let other = boids[j];
                let dx = boid.x - other.x;
                let dy = boid.y - other.y;
                let d2 = (dx * dx + dy * dy).max(1e-6);
                sep_x += dx / d2;
                sep_y += dy / d2;
                avg_vx += other.vx;
                avg_vy += other.vy;
                center_x += other.x;
                center_y += other.y;
                count += 1.0;
            }
            total_neighbors += neighbors.len().saturating_sub(1);

            steering[i] = if count > 0.0 {
                (
                    sep_x * 1.5 + (avg_vx / count - boid.vx) * 0.05 + (center_x / count - boid.x) * 0.005,
                    sep_y * 1.5 + (avg_vy / count - boid.vy) * 0.05 + (center_y / count - boid.y) * 0.005,
                )
            } else {
                (0.0, 0.0)
            };
        }

        for (boid, &(ax, ay)) in boids.iter_mut().zip(&steering) {
            boid.vx += ax;
            boid.vy += ay;
            let speed = (boid.vx * boid.vx + boid.vy * boid.vy).sqrt();
            if speed > MAX_SPEED {
                boid.vx *= MAX_SPEED / speed;
                boid.vy *= MAX_SPEED / speed;
            }
            boid.x = (boid.x + boid.vx).rem_euclid(WORLD);
            boid.y = (boid.y + boid.vy).rem_euclid(WORLD);
        }
    }
    let elapsed = start.elapsed();

    println!("Flocking simulation");
    println!("===================");
    println!("boids:               {NUM_BOIDS}");
    println!("ticks:               {NUM_TICKS}");
    println!("tree nodes (last):   {}", tree.node_count());
    println!("tree height (last):  {}", tree.height());
    println!(
        "avg neighbors/query: {:.2}",
        total_neighbors as f64 / (NUM_BOIDS * NUM_TICKS) as f64
    );
    println!(
        "time per tick:       {:.3}ms",
        elapsed.as_secs_f64() * 1000.0 / NUM_TICKS as f64
    );
}
