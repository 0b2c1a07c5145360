//! Exact 2D geometry: points, Graham scan hull, rotating calipers.
//!
//! Purpose
//! - Reduce a point set to its convex hull and enumerate the edge-aligned
//!   bounding rectangles of that hull, picking the minimum-area one.
//! - Every predicate (turn test, containment, area comparison) is evaluated
//!   on exact rationals; there is no tolerance anywhere in this module.
//!
//! Pipeline
//! - `&[Point]` → `convex_hull` → `ConvexHull` → `bounding_rectangles`
//!   → `Vec<Rectangle>` (+ `minimum_bounding_rectangle`).
//! - All functions are pure; inputs are borrowed and never mutated.
//!
//! Code cross-refs: `Point`, `ConvexHull`, `Rectangle`, `CaliperSweep`

pub mod calipers;
pub mod hull;
mod parse;
pub mod point;
pub mod rand;
pub mod rect;

pub use calipers::{bounding_rectangles, minimum_bounding_rectangle, sweep, CaliperSweep};
pub use hull::{convex_hull, ConvexHull};
pub use parse::parse_points;
pub use point::{cross, orientation, Orientation, Point};
pub use rect::Rectangle;
