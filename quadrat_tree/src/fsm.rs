// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction transition automaton over root-relative paths.
//!
//! Given a node's quadrant path and a cardinal direction, [`shift`] computes
//! the path of the same-depth region adjacent in that direction, or reports
//! that the node sits on the outer boundary. Diagonal neighbors are composed
//! from two cardinal shifts by the caller.

use crate::types::{Direction, Path, Quadrant};

/// One table entry: the replacement quadrant for the current position and,
/// when the move crosses the parent's own edge on that side, the direction
/// that keeps propagating toward the root.
struct Hop {
    quadrant: Quadrant,
    carry: Option<Direction>,
}

const fn hop(quadrant: Quadrant, carry: Option<Direction>) -> Hop {
    Hop { quadrant, carry }
}

/// Transition table for same-depth neighbor lookup, indexed by
/// `[cardinal direction][quadrant]`. See Yoder 2006.
///
/// Moving "into" the sibling that shares the queried side mirrors within the
/// same parent and stops; moving "out" across the parent's edge mirrors the
/// quadrant and carries the direction to the next ancestor, so a usable
/// sibling found higher up composes correctly back down.
static TRANSITIONS: [[Hop; 4]; 4] = [
    // North
    [
        hop(Quadrant::SouthEast, Some(Direction::North)), // from NE
        hop(Quadrant::NorthEast, None),                   // from SE
        hop(Quadrant::NorthWest, None),                   // from SW
        hop(Quadrant::SouthWest, Some(Direction::North)), // from NW
    ],
    // East
    [
        hop(Quadrant::NorthWest, Some(Direction::East)),
        hop(Quadrant::SouthWest, Some(Direction::East)),
        hop(Quadrant::SouthEast, None),
        hop(Quadrant::NorthEast, None),
    ],
    // South
    [
        hop(Quadrant::SouthEast, None),
        hop(Quadrant::NorthEast, Some(Direction::South)),
        hop(Quadrant::NorthWest, Some(Direction::South)),
        hop(Quadrant::SouthWest, None),
    ],
    // West
    [
        hop(Quadrant::NorthWest, None),
        hop(Quadrant::SouthWest, None),
        hop(Quadrant::SouthEast, Some(Direction::West)),
        hop(Quadrant::NorthEast, Some(Direction::West)),
    ],
];

/// Rewrite `path` into the root-relative path of its same-depth neighbor in
/// the given cardinal `direction`.
///
/// The path is processed from its deepest element backward. Returns `None`
/// when the whole path is consumed while the direction is still propagating:
/// the node lies on the outer edge of the indexed region and has no neighbor
/// on that side. The root (empty path) has no neighbors in any direction.
///
/// # Panics
///
/// Panics when `direction` is a corner; diagonal neighbor paths are composed
/// from two cardinal shifts.
pub fn shift(path: &[Quadrant], direction: Direction) -> Option<Path> {
    assert!(
        direction.is_cardinal(),
        "shift expects a cardinal direction"
    );

    let mut out = Path::from_slice(path);
    let mut carry = Some(direction);
    for i in (0..path.len()).rev() {
        let Some(d) = carry else { break };
        let next = &TRANSITIONS[d as usize][path[i].index()];
        out[i] = next.quadrant;
        carry = next.carry;
    }
    // Still expecting an ancestor after consuming the whole path: the input
    // asks for a region outside the tree.
    carry.is_none().then_some(out)
}
