//! Request/response surface for adapters (CLI, GUI, test harnesses).
//!
//! Three pure operations; callers hold all state and pass it in. Each call
//! works on its own copies, so independent calls may run on separate threads.

use crate::error::Result;
use crate::geom2::{self, ConvexHull, Point, Rectangle};

/// Convex hull, CCW from the lowest point. `InsufficientPoints` on empty input.
pub fn compute_convex_hull(points: &[Point]) -> Result<ConvexHull> {
    geom2::convex_hull(points)
}

/// One rectangle per hull edge, in edge order. `DegenerateHull` below 3 vertices.
pub fn compute_bounding_rectangles(hull: &ConvexHull) -> Result<Vec<Rectangle>> {
    geom2::bounding_rectangles(hull)
}

/// Minimum-area element of [`compute_bounding_rectangles`] (first on ties).
pub fn compute_minimum_bounding_rectangle(hull: &ConvexHull) -> Result<Rectangle> {
    geom2::minimum_bounding_rectangle(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeomError;
    use crate::exact::Exact;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn square_scenario() {
        let hull = compute_convex_hull(&pts(&[(0, 0), (4, 0), (4, 3), (0, 3)])).unwrap();
        assert_eq!(hull.vertices(), pts(&[(0, 0), (4, 0), (4, 3), (0, 3)]).as_slice());
        let min = compute_minimum_bounding_rectangle(&hull).unwrap();
        assert_eq!(min.area(), Exact::from(12));
        assert_eq!(min.width(), Some(Exact::from(4)));
        assert_eq!(min.height(), Some(Exact::from(3)));
    }

    #[test]
    fn demo_scenario_with_duplicate() {
        let input = pts(&[(60, 10), (60, 20), (70, 10), (60, 20), (10, 70), (50, 30)]);
        let hull = compute_convex_hull(&input).unwrap();
        // (60,20) and (50,30) both sit on x + y = 80, the edge (70,10)-(10,70).
        assert_eq!(hull.len(), 3);
        assert_eq!(hull.vertices(), pts(&[(60, 10), (70, 10), (10, 70)]).as_slice());
        let rects = compute_bounding_rectangles(&hull).unwrap();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].area(), Exact::from(3600));
        assert_eq!(rects[1].area(), Exact::from(600));
        let min = compute_minimum_bounding_rectangle(&hull).unwrap();
        assert!(rects.iter().all(|r| min.area() <= r.area()));
        assert_eq!(min, rects[1]);
    }

    #[test]
    fn collinear_scenario() {
        let hull = compute_convex_hull(&pts(&[(0, 0), (1, 0), (2, 0)])).unwrap();
        assert_eq!(hull.vertices(), pts(&[(0, 0), (2, 0)]).as_slice());
        assert_eq!(
            compute_bounding_rectangles(&hull),
            Err(GeomError::DegenerateHull { vertices: 2 })
        );
    }

    #[test]
    fn single_point_scenario() {
        let hull = compute_convex_hull(&pts(&[(5, 5)])).unwrap();
        assert_eq!(hull.len(), 1);
        assert_eq!(
            compute_bounding_rectangles(&hull),
            Err(GeomError::DegenerateHull { vertices: 1 })
        );
        assert_eq!(
            compute_minimum_bounding_rectangle(&hull),
            Err(GeomError::DegenerateHull { vertices: 1 })
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(compute_convex_hull(&[]), Err(GeomError::InsufficientPoints));
    }

    #[test]
    fn independent_calls_on_threads() {
        let inputs: Vec<Vec<Point>> = (1..=4)
            .map(|k| pts(&[(0, 0), (k, 0), (k, k + 1), (0, k + 1), (1, 1)]))
            .collect();
        let areas: Vec<Exact> = std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|p| {
                    s.spawn(move || {
                        let hull = compute_convex_hull(p).unwrap();
                        compute_minimum_bounding_rectangle(&hull).unwrap().area()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let expected: Vec<Exact> = (1..=4).map(|k: i64| Exact::from(k * (k + 1))).collect();
        assert_eq!(areas, expected);
    }
}
