// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrat_index --heading-base-level=0

//! Quadrat Index: a point-region quadtree index over item AABBs.
//!
//! Quadrat Index is a reusable building block for spatial query workloads:
//! proximity queries, and movement or collision candidate generation in
//! simulations.
//!
//! - Insert and remove axis-aligned bounding boxes (AABBs) keyed by opaque
//!   item identifiers; misuse (duplicate insert, unknown remove) fails with a
//!   recoverable [`Error`], never partial mutation.
//! - Query identifiers by rectangle with [`Quadtree::query_rect`].
//! - Generate interaction candidates with [`Quadtree::candidates`]: items
//!   sharing a leaf with the probe item or occupying adjacent leaves.
//!
//! The heavy lifting lives in [`quadrat_tree`]: a quaternary tree that
//! subdivides leaves under a tolerance-and-depth policy and finds adjacent
//! leaves through a direction transition automaton instead of a full-tree
//! scan. This container owns that tree plus the authoritative
//! identifier-to-AABB map, and lends the map into every tree mutation.
//!
//! AABBs are immutable once inserted: to move an item, remove it and insert
//! it again with the new box. The index is single-threaded; callers needing
//! shared access serialize externally.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use quadrat_index::Quadtree;
//!
//! // A 100x100 region, subdivided at most 3 levels deep.
//! let mut qt: Quadtree<u32> = Quadtree::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 3).unwrap();
//!
//! qt.insert(1, Rect::new(10.0, 10.0, 12.0, 12.0)).unwrap();
//! qt.insert(2, Rect::new(14.0, 10.0, 16.0, 12.0)).unwrap();
//! qt.insert(3, Rect::new(80.0, 80.0, 82.0, 82.0)).unwrap();
//!
//! // Rectangle queries filter against the authoritative AABBs.
//! let near_origin: Vec<u32> = qt.query_rect(Rect::new(0.0, 0.0, 20.0, 20.0)).collect();
//! assert_eq!(near_origin.len(), 2);
//!
//! // Items 1 and 2 occupy nearby leaves, so each is the other's candidate.
//! assert_eq!(qt.candidates(1), vec![2]);
//!
//! // Duplicate inserts are contract errors and leave the index unchanged.
//! assert!(qt.insert(1, Rect::new(0.0, 0.0, 1.0, 1.0)).is_err());
//!
//! qt.remove(3).unwrap();
//! assert_eq!(qt.len(), 2);
//! ```
//!
//! Leaf-level queries (adjacent-leaf discovery, edge expansion, path lookup)
//! are reachable through [`Quadtree::tree`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod index;

pub use error::Error;
pub use index::Quadtree;
