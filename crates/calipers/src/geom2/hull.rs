//! Graham scan convex hull over exact points.
//!
//! Output convention
//! - Distinct vertices in strict CCW order starting at the lowest point
//!   (lowest y, then lowest x). No three consecutive vertices are collinear.
//! - 1 or 2 distinct inputs, or an all-collinear set, give a degenerate hull
//!   of 1 or 2 vertices (the extremes of the line).
//!
//! Complexity: O(N log N) for the angular sort + a linear scan.

use std::cmp::Ordering;

use super::point::{cross, orientation, Orientation, Point};
use crate::error::{GeomError, Result};
use crate::exact::Exact;

/// Convex hull produced by [`convex_hull`]; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexHull {
    vertices: Vec<Point>,
}

impl ConvexHull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Point or segment: no area, no rectangle enumeration.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// CCW edges `(v_i, v_{i+1})`, closing edge included. Empty for a 1-vertex hull.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Boundary-inclusive membership.
    pub fn contains(&self, p: &Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => a == p,
            [a, b] => on_segment(a, b, p),
            _ => self
                .edges()
                .all(|(a, b)| orientation(a, b, p) != Orientation::Right),
        }
    }

    /// Twice the enclosed area (shoelace); zero for degenerate hulls.
    pub fn twice_area(&self) -> Exact {
        self.edges()
            .fold(Exact::zero(), |acc, (a, b)| acc + a.perp_dot(b))
    }

    pub fn area(&self) -> Exact {
        self.twice_area().halve()
    }
}

fn on_segment(a: &Point, b: &Point, p: &Point) -> bool {
    orientation(a, b, p) == Orientation::Collinear
        && p.sub(a).dot(&p.sub(b)).signum() <= 0
}

/// Graham scan. Fails only on an empty input; duplicates are tolerated.
pub fn convex_hull(points: &[Point]) -> Result<ConvexHull> {
    if points.is_empty() {
        return Err(GeomError::InsufficientPoints);
    }
    // Point's Ord is (y, x): after sort+dedup the pivot sits at index 0.
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() <= 2 {
        return Ok(ConvexHull { vertices: pts });
    }

    let pivot = pts.swap_remove(0);
    let mut rest = pts;
    // Every remaining point has angle in [0, π) around the pivot, so the
    // cross-product comparison is a total order.
    rest.sort_by(|a, b| polar_cmp(&pivot, a, b));
    // Equal angles are adjacent and sorted near-to-far: keep the last of each run.
    let mut fan: Vec<Point> = Vec::with_capacity(rest.len());
    for p in rest {
        if let Some(last) = fan.last() {
            if orientation(&pivot, last, &p) == Orientation::Collinear {
                fan.pop();
            }
        }
        fan.push(p);
    }

    let mut stack: Vec<Point> = Vec::with_capacity(fan.len() + 1);
    stack.push(pivot);
    for p in fan {
        while let [.., a, b] = stack.as_slice() {
            if orientation(a, b, &p) == Orientation::Left {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    Ok(ConvexHull { vertices: stack })
}

/// Angle around `pivot` ascending; ties near-to-far by exact squared distance.
fn polar_cmp(pivot: &Point, a: &Point, b: &Point) -> Ordering {
    match cross(pivot, a, b).signum() {
        1 => Ordering::Less,
        -1 => Ordering::Greater,
        _ => pivot.squared_distance(a).cmp(&pivot.squared_distance(b)),
    }
}
