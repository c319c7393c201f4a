// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf neighbor walk.
//!
//! Subdivide a region by inserting a few items, then inspect one coarse leaf:
//! its root-relative path and every leaf abutting it, coarse or fine.
//!
//! Run:
//! - `cargo run -p quadrat_demos --example neighbor_walk`

use kurbo::Rect;
use quadrat_index::Quadtree;
use quadrat_tree::Quadrant;

fn main() {
    let mut qt: Quadtree<u32> =
        Quadtree::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 2).unwrap();

    // Small items split the north-east and south-west quadrants one level
    // further; the south-east quadrant stays a coarse depth-1 leaf.
    qt.insert(1, Rect::new(80.0, 80.0, 82.0, 82.0)).unwrap();
    qt.insert(2, Rect::new(2.0, 2.0, 22.0, 22.0)).unwrap();

    let tree = qt.tree();
    let leaf = tree.get(&[Quadrant::SouthEast]);
    println!(
        "leaf {:?} at depth {} covers {:?}",
        tree.path(leaf),
        tree.depth(leaf),
        tree.region(leaf)
    );

    // The neighborhood mixes the coarse north-west leaf with the finer
    // leaves of the two subdivided quadrants, deduplicated.
    let neighbors = tree.neighbors(leaf);
    for &n in &neighbors {
        println!(
            "  neighbor {:?} at depth {} covers {:?}",
            tree.path(n),
            tree.depth(n),
            tree.region(n)
        );
    }

    assert!(neighbors.iter().all(|&n| tree.is_leaf(n)));
    assert!(neighbors.iter().any(|&n| tree.depth(n) == 1));
    assert!(neighbors.iter().any(|&n| tree.depth(n) == 2));
}
