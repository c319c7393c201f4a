// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrat_tree --heading-base-level=0

//! Quadrat Tree: a point-region quadtree engine.
//!
//! Quadrat Tree is the recursive core of the quadrat spatial index. It keeps
//! item identifiers at the leaves of a quaternary tree over a bounded 2-D
//! region and knows how to find the leaves adjacent to any leaf without
//! scanning the whole tree.
//!
//! - Insert and remove identifiers against a caller-owned identifier-to-AABB
//!   map; leaves subdivide and merge under a tolerance-and-depth policy.
//! - Discover adjacent leaves in the four cardinal and four diagonal
//!   directions via a transition automaton over root-relative paths.
//! - Expand any node to the leaves along one of its sides or corners.
//!
//! The authoritative geometry stays with the caller (typically the
//! `quadrat_index` container): every mutation borrows the map, and leaves
//! store identifiers only. Coordinates follow the mathematical convention
//! (north is +y, east is +x); [`kurbo::Rect`] is the AABB type.
//!
//! # Example
//!
//! ```rust
//! use hashbrown::HashMap;
//! use kurbo::Rect;
//! use quadrat_tree::{Quadrant, Tree};
//!
//! // The caller owns the identifier-to-AABB map and lends it to the tree.
//! let mut boxes: HashMap<u32, Rect> = HashMap::new();
//! boxes.insert(7, Rect::new(10.0, 10.0, 12.0, 12.0));
//!
//! let mut tree: Tree<u32> = Tree::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 2);
//! tree.insert(7, &boxes);
//!
//! // The small item settled at the depth limit in the south-west corner.
//! let leaf = tree.get(&[Quadrant::SouthWest, Quadrant::SouthWest]);
//! assert!(tree.contains_item(leaf, 7));
//! assert!(!tree.neighbors(leaf).is_empty());
//!
//! // Removal collapses the emptied branches back into the root.
//! tree.remove(7, &boxes);
//! boxes.remove(&7);
//! assert_eq!(tree.node_count(), 1);
//! ```
//!
//! The tree is single-threaded: no operation yields, and callers needing
//! shared access must serialize mutations externally.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod fsm;
pub mod geom;
pub mod tree;
pub mod types;

pub use tree::Tree;
pub use types::{Direction, NodeId, Path, Quadrant};
