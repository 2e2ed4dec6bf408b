//! Oriented rectangle geometry and Separating Axis Theorem overlap
//!
//! Rectangles rotate about their **top-left** corner, matching how sprites are
//! drawn with a zero origin. Angles are in degrees, clockwise-positive in
//! screen space (y grows downward).
//!
//! Corner order is always top-left, top-right, bottom-right, bottom-left, so
//! edges 0-1, 1-2, 2-3 and 3-0 walk the outline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (x, y is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Corners with no rotation
    pub fn corners(&self) -> OrientedRect {
        rotated_corners(*self, 0.0)
    }
}

/// Four corners of a possibly rotated rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedRect {
    pub points: [Vec2; 4],
}

impl OrientedRect {
    /// The four edges as (start, end) pairs: 0-1, 1-2, 2-3, 3-0
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let p = &self.points;
        [(p[0], p[1]), (p[1], p[2]), (p[2], p[3]), (p[3], p[0])]
    }

    /// Outward-or-inward normals of all four edges (unnormalized)
    pub fn axes(&self) -> [Vec2; 4] {
        self.edges().map(|(a, b)| edge_normal(a, b))
    }
}

/// Rotate a rectangle's corners about its top-left corner
pub fn rotated_corners(rect: Rect, angle_degrees: f32) -> OrientedRect {
    let pivot = Vec2::new(rect.x, rect.y);
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    let offsets = [
        Vec2::new(0.0, 0.0),
        Vec2::new(rect.width, 0.0),
        Vec2::new(rect.width, rect.height),
        Vec2::new(0.0, rect.height),
    ];

    OrientedRect {
        points: offsets.map(|d| {
            Vec2::new(
                pivot.x + (d.x * cos - d.y * sin),
                pivot.y + (d.x * sin + d.y * cos),
            )
        }),
    }
}

/// Perpendicular of the edge p1 -> p2. Not normalized: only the direction
/// matters when comparing projection intervals.
#[inline]
pub fn edge_normal(p1: Vec2, p2: Vec2) -> Vec2 {
    (p2 - p1).perp()
}

/// Scalar projection interval (min, max) of the corners onto `axis`
pub fn project_onto_axis(rect: &OrientedRect, axis: Vec2) -> (f32, f32) {
    let first = rect.points[0].dot(axis);
    rect.points[1..]
        .iter()
        .map(|p| p.dot(axis))
        .fold((first, first), |(min, max), d| (min.min(d), max.max(d)))
}

/// SAT overlap test between two oriented rectangles
///
/// Every edge of both shapes contributes its normal, so the test is exact for
/// any pair of convex quadrilaterals whichever of them is rotated, and the
/// result does not depend on argument order. Touching intervals count as
/// overlap.
pub fn sat_overlap(a: &OrientedRect, b: &OrientedRect) -> bool {
    a.axes().into_iter().chain(b.axes()).all(|axis| {
        let (min_a, max_a) = project_onto_axis(a, axis);
        let (min_b, max_b) = project_onto_axis(b, axis);
        !(max_a < min_b || max_b < min_a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_zero_rotation_keeps_corners() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let corners = rotated_corners(rect, 0.0);
        assert_eq!(
            corners.points,
            [
                Vec2::new(10.0, 20.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(40.0, 60.0),
                Vec2::new(10.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_rotation_pivots_on_top_left() {
        let rect = Rect::new(100.0, 100.0, 10.0, 20.0);
        let corners = rotated_corners(rect, 90.0);
        // Top-left stays put, width now points down, height points left
        assert!(close(corners.points[0], Vec2::new(100.0, 100.0)));
        assert!(close(corners.points[1], Vec2::new(100.0, 110.0)));
        assert!(close(corners.points[2], Vec2::new(80.0, 110.0)));
        assert!(close(corners.points[3], Vec2::new(80.0, 100.0)));
    }

    #[test]
    fn test_edge_normal_is_perpendicular() {
        let n = edge_normal(Vec2::new(1.0, 1.0), Vec2::new(4.0, 1.0));
        assert_eq!(n, Vec2::new(0.0, 3.0));
        assert_eq!(n.dot(Vec2::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_projection_interval() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0).corners();
        assert_eq!(project_onto_axis(&rect, Vec2::X), (2.0, 6.0));
        assert_eq!(project_onto_axis(&rect, Vec2::Y), (3.0, 8.0));
        assert_eq!(project_onto_axis(&rect, Vec2::new(2.0, 0.0)), (4.0, 12.0));
    }

    #[test]
    fn test_disjoint_x_ranges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0).corners();
        let b = Rect::new(20.0, 0.0, 10.0, 10.0).corners();
        assert!(!sat_overlap(&a, &b));
        assert!(!sat_overlap(&b, &a));
    }

    #[test]
    fn test_identical_rects_overlap() {
        let a = rotated_corners(Rect::new(5.0, 5.0, 10.0, 10.0), 30.0);
        assert!(sat_overlap(&a, &a));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0).corners();
        let b = Rect::new(10.0, 0.0, 10.0, 10.0).corners();
        assert!(sat_overlap(&a, &b));
    }

    #[test]
    fn test_rotated_separation_found_on_rotated_axis() {
        // A 45° diamond whose bounding box overlaps `b`, but whose slanted
        // edge separates it from `b`
        let diamond = rotated_corners(Rect::new(0.0, 0.0, 10.0, 10.0), 45.0);
        let b = Rect::new(4.0, 0.0, 10.0, 3.0).corners();
        assert!(!sat_overlap(&diamond, &b));
        assert!(!sat_overlap(&b, &diamond));

        // Nudge `b` into the diamond
        let b = Rect::new(1.0, 2.0, 10.0, 3.0).corners();
        assert!(sat_overlap(&diamond, &b));
    }

    #[test]
    fn test_axes_cover_all_four_edges() {
        let rect = rotated_corners(Rect::new(0.0, 0.0, 8.0, 4.0), 20.0);
        let axes = rect.axes();
        for ((a, b), axis) in rect.edges().into_iter().zip(axes) {
            assert!(axis.dot(b - a).abs() < 1e-3);
            assert!(axis.length() > 0.0);
        }
    }

    fn arb_rect() -> impl Strategy<Value = (Rect, f32)> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            1.0f32..300.0,
            1.0f32..300.0,
            -90.0f32..90.0,
        )
            .prop_map(|(x, y, w, h, angle)| (Rect::new(x, y, w, h), angle))
    }

    proptest! {
        #[test]
        fn prop_sat_is_symmetric((ra, angle_a) in arb_rect(), (rb, angle_b) in arb_rect()) {
            let a = rotated_corners(ra, angle_a);
            let b = rotated_corners(rb, angle_b);
            prop_assert_eq!(sat_overlap(&a, &b), sat_overlap(&b, &a));
        }

        #[test]
        fn prop_zero_rotation_is_identity(x in -1e4f32..1e4, y in -1e4f32..1e4, w in 0.0f32..1e3, h in 0.0f32..1e3) {
            let rect = Rect::new(x, y, w, h);
            let corners = rotated_corners(rect, 0.0);
            prop_assert_eq!(corners.points[0], Vec2::new(x, y));
            prop_assert_eq!(corners.points[1], Vec2::new(rect.right(), y));
            prop_assert_eq!(corners.points[2], Vec2::new(rect.right(), rect.bottom()));
            prop_assert_eq!(corners.points[3], Vec2::new(x, rect.bottom()));
        }

        #[test]
        fn prop_rect_overlaps_itself((rect, angle) in arb_rect()) {
            let a = rotated_corners(rect, angle);
            prop_assert!(sat_overlap(&a, &a));
        }

        #[test]
        fn prop_axis_aligned_disjoint_never_overlap(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            gap in 0.5f32..200.0,
        ) {
            let a = Rect::new(x, y, w, h).corners();
            let b = Rect::new(x + w + gap, y, w, h).corners();
            prop_assert!(!sat_overlap(&a, &b));
        }
    }
}
