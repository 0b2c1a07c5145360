//! Edge-aligned rectangles produced by the caliper sweep.
//!
//! Corners are stored CCW, starting at the corner with the smallest
//! projection on the generating edge's line; `corners[0] → corners[1]` lies on
//! that line. Side lengths of such rectangles are generally irrational, so the
//! exact surface is `width_squared`/`height_squared`/`area`; `width`/`height`
//! return the exact length only when it is rational.

use std::fmt;

use super::point::{orientation, Orientation, Point};
use crate::exact::Exact;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    corners: [Point; 4],
}

impl Rectangle {
    /// Caller guarantees a CCW, right-angled corner sequence.
    pub(crate) fn from_ccw_corners(corners: [Point; 4]) -> Self {
        debug_assert!(
            corners[1].sub(&corners[0]).dot(&corners[3].sub(&corners[0])).is_zero(),
            "rectangle corners must meet at right angles"
        );
        Self { corners }
    }

    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Squared length of the side lying on the generating edge.
    pub fn width_squared(&self) -> Exact {
        self.corners[0].squared_distance(&self.corners[1])
    }

    /// Squared length of the side perpendicular to the generating edge.
    pub fn height_squared(&self) -> Exact {
        self.corners[1].squared_distance(&self.corners[2])
    }

    pub fn width(&self) -> Option<Exact> {
        self.width_squared().sqrt_exact()
    }

    pub fn height(&self) -> Option<Exact> {
        self.height_squared().sqrt_exact()
    }

    /// Exact area: `|(c1 - c0) × (c3 - c0)|`.
    pub fn area(&self) -> Exact {
        let u = self.corners[1].sub(&self.corners[0]);
        let v = self.corners[3].sub(&self.corners[0]);
        u.perp_dot(&v).abs()
    }

    /// Boundary-inclusive membership.
    pub fn contains(&self, p: &Point) -> bool {
        (0..4).all(|i| {
            orientation(&self.corners[i], &self.corners[(i + 1) % 4], p) != Orientation::Right
        })
    }

    /// True if `a` and `b` both lie on the line through one of the sides.
    pub fn has_side_on_line(&self, a: &Point, b: &Point) -> bool {
        (0..4).any(|i| {
            let (p, q) = (&self.corners[i], &self.corners[(i + 1) % 4]);
            orientation(p, q, a) == Orientation::Collinear
                && orientation(p, q, b) == Orientation::Collinear
        })
    }

    /// Approximate label for list views, e.g. `area: ~12.00`.
    pub fn area_label(&self) -> String {
        format!("area: ~{:.2}", self.area().to_f64())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.corners;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tilted() -> Rectangle {
        // Sides along (3,4) and (-4,3): lengths 5 and 10.
        Rectangle::from_ccw_corners([
            Point::new(0, 0),
            Point::new(3, 4),
            Point::new(-5, 10),
            Point::new(-8, 6),
        ])
    }

    #[test]
    fn exact_measures_of_tilted_rectangle() {
        let r = tilted();
        assert_eq!(r.width_squared(), Exact::from(25));
        assert_eq!(r.height_squared(), Exact::from(100));
        assert_eq!(r.width(), Some(Exact::from(5)));
        assert_eq!(r.height(), Some(Exact::from(10)));
        assert_eq!(r.area(), Exact::from(50));
        assert_eq!(r.area_label(), "area: ~50.00");
    }

    #[test]
    fn irrational_side_has_no_exact_length() {
        let r = Rectangle::from_ccw_corners([
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(0, 2),
            Point::new(-1, 1),
        ]);
        assert_eq!(r.width_squared(), Exact::from(2));
        assert_eq!(r.width(), None);
        assert_eq!(r.area(), Exact::from(2));
    }

    #[test]
    fn containment_and_side_lines() {
        let r = tilted();
        assert!(r.contains(&Point::new(0, 0)));
        assert!(r.contains(&Point::new(-2, 5)));
        assert!(!r.contains(&Point::new(4, 4)));
        assert!(r.has_side_on_line(&Point::new(6, 8), &Point::new(9, 12)));
        assert!(!r.has_side_on_line(&Point::new(1, 0), &Point::new(2, 0)));
    }

    #[test]
    fn equality_is_by_ordered_corners() {
        let r = tilted();
        let mut rotated = r.corners().clone();
        rotated.rotate_left(1);
        assert_eq!(r, tilted());
        assert_ne!(r, Rectangle::from_ccw_corners(rotated));
        assert_eq!(r.to_string(), "[(0,0), (3,4), (-5,10), (-8,6)]");
    }
}
