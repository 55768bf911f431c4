//! KD-tree SVG visualizer
//! Inserts a random point cloud and draws every split line and leaf as SVG,
//! using `KdTree::traverse` to walk the nodes.

use kdpoint::{Axis, KdTree, NodeView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Write;

/// Region covered by a node: min_x, min_y, max_x, max_y
type Region = (f64, f64, f64, f64);

fn main() {
    let width = 1280.0;
    let height = 1280.0;
    let margin = 50.0;
    let world = 100.0;
    let scale = (width - 2.0 * margin) / world;

    // Parameter: number of points (clustered around a few centers)
    let num_points = 400;

    let mut rng = StdRng::seed_from_u64(95_756_739);
    let centers = [(25.0, 30.0), (70.0, 65.0), (40.0, 80.0)];
    let mut tree = KdTree::with_capacity(num_points);
    for i in 0..num_points {
        let (cx, cy) = centers[i % centers.len()];
        let x: f64 = (cx + rng.random_range(-20.0..20.0_f64)).clamp(0.0, world);
        let y: f64 = (cy + rng.random_range(-20.0..20.0_f64)).clamp(0.0, world);
        // Snap to a grid so some points share coordinates
        tree.insert((x * 2.0).round() / 2.0, (y * 2.0).round() / 2.0, i);
    }

    let to_svg = |x: f64, y: f64| (margin + x * scale, height - margin - y * scale);

    let mut lines = String::new();
    let mut dots = String::new();
    let mut pending: Vec<Region> = vec![(0.0, 0.0, world, world)];

    // Pre-order walk: each node consumes the region pushed for it by its parent
    tree.traverse(|node, depth| {
        let Some((min_x, min_y, max_x, max_y)) = pending.pop() else {
            return false;
        };
        match node {
            NodeView::Internal { split, axis, has_left, has_right } => {
                let (left, right, (x1, y1), (x2, y2)) = match axis {
                    Axis::X => {
                        let s = split.clamp(min_x, max_x);
                        ((min_x, min_y, s, max_y), (s, min_y, max_x, max_y), to_svg(s, min_y), to_svg(s, max_y))
                    }
                    Axis::Y => {
                        let s = split.clamp(min_y, max_y);
                        ((min_x, min_y, max_x, s), (min_x, s, max_x, max_y), to_svg(min_x, s), to_svg(max_x, s))
                    }
                };
                let opacity = (1.0 - depth as f64 * 0.04).max(0.2);
                lines.push_str(&format!(
                    "    <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" class=\"split-{}\" opacity=\"{:.2}\"/>\n",
                    x1, y1, x2, y2, if axis == Axis::X { "x" } else { "y" }, opacity
                ));
                if has_right {
                    pending.push(right);
                }
                if has_left {
                    pending.push(left);
                }
            }
            NodeView::Leaf { point, values } => {
                let (cx, cy) = to_svg(point.x, point.y);
                let class = if values.len() > 1 { "multi" } else { "single" };
                dots.push_str(&format!(
                    "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" class=\"{}\"/>\n",
                    cx, cy, 2 + values.len().min(4), class
                ));
            }
            _ => {}
        }
        true
    });

    // Generate SVG
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        width as i32, height as i32, width as i32, height as i32
    ));

    svg.push_str("  <defs>\n");
    svg.push_str("    <style>\n");
    svg.push_str("      .split-x { stroke: #FF6B35; stroke-width: 1.5; }\n");
    svg.push_str("      .split-y { stroke: #3572FF; stroke-width: 1.5; }\n");
    svg.push_str("      .single { fill: #333333; }\n");
    svg.push_str("      .multi { fill: #D7263D; }\n");
    svg.push_str("      .world-box { fill: none; stroke: #333333; stroke-width: 2; }\n");
    svg.push_str("    </style>\n");
    svg.push_str("  </defs>\n\n");

    // Outer rectangle
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" class=\"world-box\"/>\n\n",
        margin as i32,
        margin as i32,
        (width - 2.0 * margin) as i32,
        (height - 2.0 * margin) as i32
    ));

    svg.push_str("  <g id=\"splits\">\n");
    svg.push_str(&lines);
    svg.push_str("  </g>\n\n");
    svg.push_str("  <g id=\"leaves\">\n");
    svg.push_str(&dots);
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");

    // Write to file
    let mut file = File::create("kdtree_splits.svg").expect("Failed to create file");
    file.write_all(svg.as_bytes())
        .expect("Failed to write to file");

    println!("✓ Generated: kdtree_splits.svg");
    println!("  - Values: {}", tree.len());
    println!("  - Nodes: {}", tree.node_count());
    println!("  - Height: {}", tree.height());
}
