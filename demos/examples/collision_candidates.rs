// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision candidate basics.
//!
//! Build an index over a handful of moving bodies, ask for the interaction
//! candidates of one of them, and move it by remove + reinsert.
//!
//! Run:
//! - `cargo run -p quadrat_demos --example collision_candidates`

use kurbo::Rect;
use quadrat_index::Quadtree;

fn main() {
    // A 256x256 arena, at most 5 subdivision levels.
    let mut qt: Quadtree<u32> =
        Quadtree::new(Rect::new(0.0, 0.0, 256.0, 256.0), 0.0, 5).unwrap();

    // A small cluster near the origin and one body far away.
    qt.insert(1, Rect::new(10.0, 10.0, 14.0, 14.0)).unwrap();
    qt.insert(2, Rect::new(16.0, 10.0, 20.0, 14.0)).unwrap();
    qt.insert(3, Rect::new(10.0, 16.0, 14.0, 20.0)).unwrap();
    qt.insert(4, Rect::new(200.0, 200.0, 204.0, 204.0)).unwrap();

    let near_one = qt.candidates(1);
    println!("candidates of body 1: {near_one:?}");
    assert!(near_one.contains(&2) && near_one.contains(&3));
    assert!(!near_one.contains(&4), "distant bodies are pruned");

    // Rectangle query over the cluster's corner of the arena.
    let visible: Vec<u32> = qt.query_rect(Rect::new(0.0, 0.0, 32.0, 32.0)).collect();
    println!("bodies near the origin: {visible:?}");
    assert_eq!(visible.len(), 3);

    // Boxes are immutable: moving body 4 is a remove + reinsert.
    qt.remove(4).unwrap();
    qt.insert(4, Rect::new(22.0, 16.0, 26.0, 20.0)).unwrap();
    let near_one = qt.candidates(1);
    println!("candidates of body 1 after the move: {near_one:?}");
    assert!(near_one.contains(&4), "body 4 moved into the cluster");

    println!("{qt:?}");
}
