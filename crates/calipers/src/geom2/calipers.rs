//! Rotating calipers: one bounding rectangle per hull edge, and the minimum.
//!
//! For edge `e_i = v_{i+1} - v_i` of a CCW hull we use the unnormalised frame
//! `d = e_i`, `n = perp(e_i)` (inward). Every vertex projects to
//! `(p·d, p·n)`; the rectangle is `[a_min, a_max] × [b_min, b_max]` in that
//! frame with `b_min` attained on the edge itself. Mapping back divides by
//! `|d|² = |n|²`, so corners and area stay rational; no angles, no roots.
//!
//! Three support pointers (max along `d`, max along `n`, max along `-d`) only
//! move forward as the edge index advances, so the sweep is linear in the
//! hull size.
//!
//! Code cross-refs: `hull::ConvexHull`, `rect::Rectangle`

use super::hull::{convex_hull, ConvexHull};
use super::point::Point;
use super::rect::Rectangle;
use crate::error::{GeomError, Result};
use crate::exact::Exact;

/// Full pipeline result for one point set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaliperSweep {
    pub hull: ConvexHull,
    /// `rectangles[i]` is generated by hull edge `(v_i, v_{i+1})`.
    pub rectangles: Vec<Rectangle>,
    /// First rectangle of minimum area.
    pub min_index: usize,
}

impl CaliperSweep {
    #[inline]
    pub fn minimum(&self) -> &Rectangle {
        &self.rectangles[self.min_index]
    }
}

/// Hull the points, then sweep. Fails like [`convex_hull`] and [`bounding_rectangles`].
pub fn sweep(points: &[Point]) -> Result<CaliperSweep> {
    let hull = convex_hull(points)?;
    let rectangles = bounding_rectangles(&hull)?;
    let min_index = argmin_area(&rectangles);
    Ok(CaliperSweep {
        hull,
        rectangles,
        min_index,
    })
}

/// One rectangle per hull edge, in edge order.
pub fn bounding_rectangles(hull: &ConvexHull) -> Result<Vec<Rectangle>> {
    if hull.is_degenerate() {
        return Err(GeomError::DegenerateHull {
            vertices: hull.len(),
        });
    }
    sweep_edges(hull.vertices())
}

/// Minimum-area rectangle; ties go to the earliest edge.
pub fn minimum_bounding_rectangle(hull: &ConvexHull) -> Result<Rectangle> {
    let mut rects = bounding_rectangles(hull)?;
    let k = argmin_area(&rects);
    Ok(rects.swap_remove(k))
}

fn argmin_area(rects: &[Rectangle]) -> usize {
    let mut best = 0usize;
    let mut best_area: Option<Exact> = None;
    for (i, r) in rects.iter().enumerate() {
        let a = r.area();
        if best_area.as_ref().is_none_or(|b| a < *b) {
            best = i;
            best_area = Some(a);
        }
    }
    best
}

fn sweep_edges(v: &[Point]) -> Result<Vec<Rectangle>> {
    let n = v.len();
    let mut out = Vec::with_capacity(n);
    // Support pointers; seeded for edge 0 and then carried forward.
    let mut right = 1 % n;
    let mut top = 0usize;
    let mut left = 0usize;
    for i in 0..n {
        let base = &v[i];
        let d = v[(i + 1) % n].sub(base);
        let nrm = Point {
            x: -&d.y,
            y: d.x.clone(),
        };
        right = advance(v, right, |p| p.dot(&d));
        if i == 0 {
            top = right;
        }
        top = advance(v, top, |p| p.dot(&nrm));
        if i == 0 {
            left = top;
        }
        left = advance(v, left, |p| -p.dot(&d));

        let a_min = v[left].dot(&d);
        let a_max = v[right].dot(&d);
        let b_min = base.dot(&nrm);
        let b_max = v[top].dot(&nrm);
        let len2 = d.dot(&d);
        let corner = |a: &Exact, b: &Exact| -> Result<Point> {
            Ok(Point {
                x: (a * &d.x + b * &nrm.x).checked_div(&len2)?,
                y: (a * &d.y + b * &nrm.y).checked_div(&len2)?,
            })
        };
        out.push(Rectangle::from_ccw_corners([
            corner(&a_min, &b_min)?,
            corner(&a_max, &b_min)?,
            corner(&a_max, &b_max)?,
            corner(&a_min, &b_max)?,
        ]));
    }
    Ok(out)
}

/// Walk forward from `k` while `key` strictly increases. On a convex polygon
/// the walk from the previous support lands on the new support.
fn advance(v: &[Point], mut k: usize, key: impl Fn(&Point) -> Exact) -> usize {
    let n = v.len();
    let mut cur = key(&v[k]);
    loop {
        let j = (k + 1) % n;
        let next = key(&v[j]);
        if next > cur {
            k = j;
            cur = next;
        } else {
            return k;
        }
    }
}
