// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrants, query directions, and node handles.

use smallvec::SmallVec;

/// Root-relative position of a node: the quadrant followed at each level from
/// the root down. Empty for the root itself.
pub type Path = SmallVec<[Quadrant; 8]>;

/// The quadrant of a parent region that a child node occupies.
///
/// The discriminants double as the fixed child order, so quadrant `q` always
/// addresses slot `q as usize` of a node's child array.
///
/// Coordinates follow the mathematical convention: north is +y, east is +x.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quadrant {
    /// Upper-right quadrant.
    NorthEast = 0,
    /// Lower-right quadrant.
    SouthEast = 1,
    /// Lower-left quadrant.
    SouthWest = 2,
    /// Upper-left quadrant.
    NorthWest = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Direction of a neighbor or edge query relative to a node: one of the four
/// cardinal sides or the four corners.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward +y.
    North,
    /// Toward +x.
    East,
    /// Toward -y.
    South,
    /// Toward -x.
    West,
    /// Toward +x, +y.
    NorthEast,
    /// Toward +x, -y.
    SouthEast,
    /// Toward -x, -y.
    SouthWest,
    /// Toward -x, +y.
    NorthWest,
}

impl Direction {
    /// All directions, cardinal sides first.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Whether this is one of the four cardinal sides.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// The opposite direction (north and south, east and west, and the
    /// corners pairwise).
    pub const fn invert(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - Nodes are allocated in groups of four by subdivision; each gets a fresh
///   generation for its slot.
/// - When four sibling leaves collapse into their parent, their slots are
///   freed; any `NodeId` that pointed at them is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `NodeId`. Stale handles never alias a live node.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId`
/// still refers to a live node. The root's handle is valid for the lifetime
/// of the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}
