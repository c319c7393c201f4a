// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for container operations.

use core::fmt;

/// Errors returned by [`Quadtree`](crate::Quadtree) operations.
///
/// Every variant is a caller contract violation with no retry semantics; the
/// container state is unchanged when one is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error<I> {
    /// The identifier is already present in the index.
    DuplicateItem(I),
    /// The identifier is not present in the index.
    UnknownItem(I),
    /// The depth limit passed at construction was zero.
    ZeroDepthLimit,
}

impl<I: fmt::Debug> fmt::Display for Error<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem(id) => write!(f, "cannot insert duplicate item {id:?}"),
            Self::UnknownItem(id) => write!(f, "cannot remove unknown item {id:?}"),
            Self::ZeroDepthLimit => write!(f, "depth limit must be positive"),
        }
    }
}

impl<I: fmt::Debug> core::error::Error for Error<I> {}
