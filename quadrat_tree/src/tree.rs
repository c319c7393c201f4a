// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: the node arena, subdivision, and neighbor
//! queries.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::fsm;
use crate::geom::{disjoint, extents_within, quadrant_rect};
use crate::types::{Direction, NodeId, Path, Quadrant};

struct Node<I> {
    generation: u32,
    parent: Option<NodeId>,
    // Child order follows the `Quadrant` discriminants: NE, SE, SW, NW.
    children: Option<[NodeId; 4]>,
    depth: usize,
    region: Rect,
    items: HashSet<I>,
    path: Path,
}

/// Collapse candidates pop deepest-first; ordering ignores the handle.
struct Candidate {
    depth: usize,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth.cmp(&other.depth)
    }
}

/// A point-region quadtree over a bounded 2-D region.
///
/// The tree stores item identifiers at its leaves; the authoritative
/// identifier-to-AABB map stays with the caller and is lent into every
/// mutation. A leaf accepts an identifier once it reaches the depth limit or
/// once the item's AABB is within the size tolerance of the leaf region;
/// otherwise the leaf subdivides into four children and the item is retried
/// against them. Removal collapses any subtree whose four sibling leaves are
/// all left empty.
///
/// Nodes live in a slot arena addressed by generational [`NodeId`] handles:
/// children are owned in groups of four, parent links are non-owning
/// navigation aids, and the root occupies slot zero for the lifetime of the
/// tree.
pub struct Tree<I> {
    nodes: Vec<Option<Node<I>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    tolerance: f64,
    floor: usize,
}

impl<I> Debug for Tree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("tolerance", &self.tolerance)
            .field("depth_limit", &self.floor)
            .finish_non_exhaustive()
    }
}

impl<I: Copy + Eq + Hash + Debug> Tree<I> {
    /// Create a tree covering `region`.
    ///
    /// `tolerance` is the absolute size-fit threshold: a leaf accepts an item
    /// without subdividing when their extents differ by at most `tolerance`
    /// on both axes. `floor` is the maximum node depth.
    ///
    /// # Panics
    ///
    /// Panics when `floor` is zero.
    pub fn new(region: Rect, tolerance: f64, floor: usize) -> Self {
        assert!(floor > 0, "depth limit must be positive");
        let root = Node {
            generation: 1,
            parent: None,
            children: None,
            depth: 0,
            region,
            items: HashSet::new(),
            path: Path::new(),
        };
        Self {
            nodes: vec![Some(root)],
            generations: vec![1],
            free_list: Vec::new(),
            tolerance,
            floor,
        }
    }

    /// Handle of the root node. The root is never destroyed.
    pub fn root(&self) -> NodeId {
        NodeId::new(0, self.generations[0])
    }

    /// Whether `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Whether the node is a leaf. A node has either four children or none.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).children.is_none()
    }

    /// The region covered by the node.
    pub fn region(&self, id: NodeId) -> Rect {
        self.node(id).region
    }

    /// Depth of the node; the root is at depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    /// Root-relative quadrant path of the node (empty for the root).
    pub fn path(&self, id: NodeId) -> &[Quadrant] {
        &self.node(id).path
    }

    /// Iterate the identifiers stored at the node. Only leaves hold items.
    pub fn items(&self, id: NodeId) -> impl Iterator<Item = I> + '_ {
        self.node(id).items.iter().copied()
    }

    /// Number of identifiers stored at the node.
    pub fn item_count(&self, id: NodeId) -> usize {
        self.node(id).items.len()
    }

    /// Whether the node stores `item`.
    pub fn contains_item(&self, id: NodeId, item: I) -> bool {
        self.node(id).items.contains(&item)
    }

    /// The four children in quadrant order, or `None` for a leaf.
    pub fn children(&self, id: NodeId) -> Option<[NodeId; 4]> {
        self.node(id).children
    }

    /// The child occupying `quadrant`, or `None` for a leaf.
    pub fn child(&self, id: NodeId, quadrant: Quadrant) -> Option<NodeId> {
        self.node(id).children.map(|c| c[quadrant.index()])
    }

    /// Parent handle; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// The region covered by the whole tree.
    pub fn bounds(&self) -> Rect {
        self.node(self.root()).region
    }

    /// The absolute size-fit threshold fixed at construction.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The maximum node depth fixed at construction.
    pub fn depth_limit(&self) -> usize {
        self.floor
    }

    /// Insert `id` into every leaf whose region intersects its AABB,
    /// subdividing leaves until the depth or tolerance policy accepts it.
    ///
    /// After this returns, exactly the leaves whose regions are not disjoint
    /// from the item's AABB hold the identifier. An AABB straddling a
    /// subdivision boundary lands in several sibling leaves.
    ///
    /// # Panics
    ///
    /// Panics when `boxes` has no entry for `id`.
    pub fn insert(&mut self, id: I, boxes: &HashMap<I, Rect>) {
        let aabb = boxes[&id];

        let mut open = vec![self.root()];
        while let Some(m) = open.pop() {
            if disjoint(self.region(m), aabb) {
                continue;
            }
            if let Some(children) = self.children(m) {
                open.extend(children);
                continue;
            }
            let (depth, region) = {
                let n = self.node(m);
                (n.depth, n.region)
            };
            if depth >= self.floor || extents_within(self.tolerance, region, aabb) {
                let _ = self.node_mut(m).items.insert(id);
            } else {
                self.split(m, boxes);
                open.extend(self.children(m).expect("split populates children"));
            }
        }
    }

    /// Remove `id` from every leaf that holds it, collapsing subtrees whose
    /// four sibling leaves are all left empty.
    ///
    /// Collapse candidates are processed deepest-first, so a merge can
    /// cascade: a parent that becomes an empty leaf re-enters the queue and
    /// may merge with its own siblings in turn. The root is never removed.
    ///
    /// # Panics
    ///
    /// Panics when `boxes` has no entry for `id`.
    pub fn remove(&mut self, id: I, boxes: &HashMap<I, Rect>) {
        let aabb = boxes[&id];

        let mut candidates = BinaryHeap::new();
        let mut open = vec![self.root()];
        while let Some(m) = open.pop() {
            if disjoint(self.region(m), aabb) {
                continue;
            }
            if let Some(children) = self.children(m) {
                open.extend(children);
                continue;
            }
            let node = self.node_mut(m);
            let _ = node.items.remove(&id);
            if node.items.is_empty() {
                let depth = node.depth;
                candidates.push(Candidate { depth, node: m });
            }
        }

        while let Some(Candidate { node: m, .. }) = candidates.pop() {
            if !self.is_alive(m) {
                // Freed while collapsing a sibling from the same queue.
                continue;
            }
            let Some(p) = self.parent(m) else {
                continue;
            };
            let children = self.children(p).expect("parent of a live node has children");
            let mergeable = children
                .iter()
                .all(|&c| self.is_leaf(c) && self.node(c).items.is_empty());
            if mergeable {
                for c in children {
                    self.free(c);
                }
                let parent = self.node_mut(p);
                parent.children = None;
                let depth = parent.depth;
                candidates.push(Candidate { depth, node: p });
            }
        }
    }

    /// All leaf descendants of `id` adjacent to one side or corner of its
    /// region.
    ///
    /// Cardinal sides expand into the two children sharing that side at every
    /// internal node visited; corners follow exactly one child. A leaf input
    /// yields itself.
    pub fn edge(&self, id: NodeId, direction: Direction) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut open = vec![id];
        while let Some(m) = open.pop() {
            let Some([ne, se, sw, nw]) = self.children(m) else {
                leaves.push(m);
                continue;
            };
            match direction {
                Direction::North => open.extend([ne, nw]),
                Direction::East => open.extend([ne, se]),
                Direction::South => open.extend([se, sw]),
                Direction::West => open.extend([sw, nw]),
                Direction::NorthEast => open.push(ne),
                Direction::SouthEast => open.push(se),
                Direction::SouthWest => open.push(sw),
                Direction::NorthWest => open.push(nw),
            }
        }
        leaves
    }

    /// Resolve a root-relative path, stopping at the last node that exists.
    ///
    /// A truncated result means the queried location is covered by a node
    /// coarser than the path implies.
    pub fn get(&self, path: &[Quadrant]) -> NodeId {
        let mut m = self.root();
        for &quadrant in path {
            match self.child(m, quadrant) {
                Some(c) => m = c,
                None => break,
            }
        }
        m
    }

    /// All leaves adjacent to `id` along the four cardinal and the four
    /// diagonal directions, deduplicated, in discovery order.
    ///
    /// Each direction's same-depth candidate path comes from the transition
    /// automaton; diagonals compose two cardinal shifts and require both to
    /// succeed. A resolved candidate may be coarser than `id`, so its facing
    /// edge is expanded with the inverted direction to reach exactly the
    /// finer leaves that abut `id`. A node on the outer boundary contributes
    /// nothing in the directions pointing off the region; a root-only tree
    /// has no neighbors.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let path = self.path(id);

        let north = fsm::shift(path, Direction::North);
        let east = fsm::shift(path, Direction::East);
        let south = fsm::shift(path, Direction::South);
        let west = fsm::shift(path, Direction::West);

        let compose =
            |base: &Option<Path>, d: Direction| base.as_ref().and_then(|p| fsm::shift(p, d));
        let north_east = compose(&north, Direction::East);
        let south_east = compose(&south, Direction::East);
        let south_west = compose(&south, Direction::West);
        let north_west = compose(&north, Direction::West);

        let routes = [
            (Direction::North, north),
            (Direction::East, east),
            (Direction::South, south),
            (Direction::West, west),
            (Direction::NorthEast, north_east),
            (Direction::SouthEast, south_east),
            (Direction::SouthWest, south_west),
            (Direction::NorthWest, north_west),
        ];

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (direction, route) in routes {
            let Some(route) = route else {
                continue;
            };
            for leaf in self.edge(self.get(&route), direction.invert()) {
                if seen.insert(leaf) {
                    out.push(leaf);
                }
            }
        }
        out
    }

    /// Subdivide a leaf into four children partitioning its region at the
    /// midpoint, fanning the leaf's items out to every non-disjoint child.
    fn split(&mut self, id: NodeId, boxes: &HashMap<I, Rect>) {
        {
            let n = self.node(id);
            assert!(n.children.is_none(), "cannot split an internal node");
            assert!(n.depth < self.floor, "cannot split past the depth limit");
        }

        let items = core::mem::take(&mut self.node_mut(id).items);
        let (region, depth, base_path) = {
            let n = self.node(id);
            (n.region, n.depth, n.path.clone())
        };

        let mut children = [NodeId::new(0, 0); 4];
        for quadrant in Quadrant::ALL {
            let sub = quadrant_rect(region, quadrant);
            let mut path = base_path.clone();
            path.push(quadrant);
            let mut held = HashSet::with_capacity(items.len());
            for &item in &items {
                if !disjoint(sub, boxes[&item]) {
                    let _ = held.insert(item);
                }
            }
            children[quadrant.index()] = self.alloc(Node {
                generation: 0, // assigned by alloc
                parent: Some(id),
                children: None,
                depth: depth + 1,
                region: sub,
                items: held,
                path,
            });
        }

        self.node_mut(id).children = Some(children);
    }

    // --- arena internals ---

    fn node(&self, id: NodeId) -> &Node<I> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<I> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn alloc(&mut self, node: Node<I>) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node { generation, ..node });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node { generation, ..node }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            NodeId::new((self.nodes.len() - 1) as u32, generation)
        }
    }

    fn free(&mut self, id: NodeId) {
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }
}
