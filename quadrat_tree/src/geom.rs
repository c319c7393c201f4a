// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AABB helpers over [`kurbo::Rect`].

use kurbo::Rect;

use crate::types::Quadrant;

/// Whether two AABBs share no point.
///
/// Boxes are treated as closed regions: boxes that merely touch along an edge
/// or at a corner are not disjoint.
pub fn disjoint(a: Rect, b: Rect) -> bool {
    a.x1 < b.x0 || b.x1 < a.x0 || a.y1 < b.y0 || b.y1 < a.y0
}

/// Whether the extents of `a` and `b` differ by at most `tolerance` on both
/// axes.
pub fn extents_within(tolerance: f64, a: Rect, b: Rect) -> bool {
    abs(a.width() - b.width()) <= tolerance && abs(a.height() - b.height()) <= tolerance
}

/// The sub-rectangle of `region` covered by `quadrant`, splitting at the
/// geometric midpoint on both axes.
pub fn quadrant_rect(region: Rect, quadrant: Quadrant) -> Rect {
    let mid = region.center();
    match quadrant {
        Quadrant::NorthEast => Rect::new(mid.x, mid.y, region.x1, region.y1),
        Quadrant::SouthEast => Rect::new(mid.x, region.y0, region.x1, mid.y),
        Quadrant::SouthWest => Rect::new(region.x0, region.y0, mid.x, mid.y),
        Quadrant::NorthWest => Rect::new(region.x0, mid.y, mid.x, region.y1),
    }
}

// `f64::abs` is only available with `std` or `libm`.
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes_are_not_disjoint() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(50.0, 0.0, 100.0, 50.0);
        assert!(!disjoint(a, b));
        assert!(!disjoint(b, a));
    }

    #[test]
    fn separated_boxes_are_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.5, 0.0, 20.0, 10.0);
        assert!(disjoint(a, b));
        assert!(disjoint(b, a));

        let below = Rect::new(0.0, -20.0, 10.0, -0.5);
        assert!(disjoint(a, below));
    }

    #[test]
    fn overlapping_boxes_are_not_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(!disjoint(a, b));
    }

    #[test]
    fn extent_fit_is_symmetric_per_axis() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let near = Rect::new(0.0, 0.0, 100.0, 99.1);
        assert!(extents_within(1.0, region, near));
        assert!(extents_within(1.0, near, region));
        assert!(!extents_within(0.5, region, near));
        // Exact match passes a zero tolerance.
        assert!(extents_within(0.0, region, region));
    }

    #[test]
    fn quadrants_partition_the_region() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            quadrant_rect(region, Quadrant::NorthEast),
            Rect::new(50.0, 50.0, 100.0, 100.0)
        );
        assert_eq!(
            quadrant_rect(region, Quadrant::SouthEast),
            Rect::new(50.0, 0.0, 100.0, 50.0)
        );
        assert_eq!(
            quadrant_rect(region, Quadrant::SouthWest),
            Rect::new(0.0, 0.0, 50.0, 50.0)
        );
        assert_eq!(
            quadrant_rect(region, Quadrant::NorthWest),
            Rect::new(0.0, 50.0, 50.0, 100.0)
        );
    }
}
