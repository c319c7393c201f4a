// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Quadtree` container: the identifier-to-AABB authority over the
//! tree engine.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;
use quadrat_tree::geom::disjoint;
use quadrat_tree::{NodeId, Tree};

use crate::error::Error;

/// A mutable point-region quadtree index from item identifiers to AABBs.
///
/// The container owns the authoritative identifier-to-AABB map and the tree
/// that accelerates spatial queries over it. An item's AABB is immutable once
/// inserted; remove and reinsert to move an item. Leaf item sets are
/// existence witnesses, never geometry copies.
pub struct Quadtree<I> {
    tree: Tree<I>,
    boxes: HashMap<I, Rect>,
}

impl<I> Debug for Quadtree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("items", &self.boxes.len())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<I: Copy + Eq + Hash + Debug> Quadtree<I> {
    /// Create an index covering `bounds`.
    ///
    /// `tolerance` is the absolute size-fit threshold that stops subdivision
    /// for near-cell-sized items; `floor` is the maximum tree depth.
    ///
    /// Errors with [`Error::ZeroDepthLimit`] when `floor` is zero.
    pub fn new(bounds: Rect, tolerance: f64, floor: usize) -> Result<Self, Error<I>> {
        if floor == 0 {
            return Err(Error::ZeroDepthLimit);
        }
        Ok(Self {
            tree: Tree::new(bounds, tolerance, floor),
            boxes: HashMap::with_capacity(128),
        })
    }

    /// Record `aabb` for `id` and insert it into the tree.
    ///
    /// Errors with [`Error::DuplicateItem`] when `id` is already present;
    /// the container is unchanged in that case.
    pub fn insert(&mut self, id: I, aabb: Rect) -> Result<(), Error<I>> {
        if self.boxes.contains_key(&id) {
            return Err(Error::DuplicateItem(id));
        }
        self.boxes.insert(id, aabb);
        self.tree.insert(id, &self.boxes);
        Ok(())
    }

    /// Remove `id` from the tree and drop its AABB.
    ///
    /// Errors with [`Error::UnknownItem`] when `id` is not present; the
    /// container is unchanged in that case.
    pub fn remove(&mut self, id: I) -> Result<(), Error<I>> {
        if !self.boxes.contains_key(&id) {
            return Err(Error::UnknownItem(id));
        }
        self.tree.remove(id, &self.boxes);
        self.boxes.remove(&id);
        Ok(())
    }

    /// The AABB recorded for `id`, if present.
    pub fn get(&self, id: I) -> Option<Rect> {
        self.boxes.get(&id).copied()
    }

    /// Whether `id` is present in the index.
    pub fn contains(&self, id: I) -> bool {
        self.boxes.contains_key(&id)
    }

    /// Number of items in the index.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the index holds no items.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The region covered by the index.
    pub fn bounds(&self) -> Rect {
        self.tree.bounds()
    }

    /// Read-only access to the tree engine, for leaf-level queries.
    pub fn tree(&self) -> &Tree<I> {
        &self.tree
    }

    /// Iterate identifiers whose AABB intersects `rect`.
    ///
    /// Leaves intersecting `rect` supply candidates, which are then filtered
    /// precisely against the authoritative AABB map.
    pub fn query_rect(&self, rect: Rect) -> impl Iterator<Item = I> + '_ {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut open = vec![self.tree.root()];
        while let Some(m) = open.pop() {
            if disjoint(self.tree.region(m), rect) {
                continue;
            }
            if let Some(children) = self.tree.children(m) {
                open.extend(children);
                continue;
            }
            for item in self.tree.items(m) {
                if seen.insert(item) && !disjoint(self.boxes[&item], rect) {
                    out.push(item);
                }
            }
        }
        out.into_iter()
    }

    /// Identifiers that could interact with `id`: items sharing a leaf with
    /// it, plus items in the leaves adjacent to those leaves.
    ///
    /// Excludes `id` itself. The result is a candidate set for proximity or
    /// collision tests; callers apply their own precise geometry. An unknown
    /// identifier yields no candidates.
    pub fn candidates(&self, id: I) -> Vec<I> {
        let Some(&aabb) = self.boxes.get(&id) else {
            return Vec::new();
        };

        // Leaves holding the item, found by pruning on its AABB.
        let mut holders = Vec::new();
        let mut open = vec![self.tree.root()];
        while let Some(m) = open.pop() {
            if disjoint(self.tree.region(m), aabb) {
                continue;
            }
            if let Some(children) = self.tree.children(m) {
                open.extend(children);
                continue;
            }
            if self.tree.contains_item(m, id) {
                holders.push(m);
            }
        }

        let mut leaves: Vec<NodeId> = Vec::new();
        let mut seen_leaves = HashSet::new();
        for &leaf in &holders {
            if seen_leaves.insert(leaf) {
                leaves.push(leaf);
            }
            for neighbor in self.tree.neighbors(leaf) {
                if seen_leaves.insert(neighbor) {
                    leaves.push(neighbor);
                }
            }
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for leaf in leaves {
            for item in self.tree.items(leaf) {
                if item != id && seen.insert(item) {
                    out.push(item);
                }
            }
        }
        out
    }
}
