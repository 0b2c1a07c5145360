//! Exact convex hulls and minimum bounding rectangles.
//!
//! Graham scan + rotating calipers over arbitrary-precision rationals. No
//! floating-point value ever decides a branch; floats appear only in the
//! explicit display conversions (`Exact::to_f64`, `Point::to_vec2`).
//!
//! Layout
//! - `exact`: the rational scalar.
//! - `geom2`: points, hull, calipers, rectangles, parsing, random clouds.
//! - `api`: the three request/response operations adapters call.
//! - `error`: `GeomError` and its `ErrorKind` taxonomy.

pub mod api;
pub mod error;
pub mod exact;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, GeomError};
pub use exact::Exact;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{
        compute_bounding_rectangles, compute_convex_hull, compute_minimum_bounding_rectangle,
    };
    pub use crate::error::{ErrorKind, GeomError};
    pub use crate::exact::Exact;
    pub use crate::geom2::rand::{draw_point_cloud, CloudCfg, Layout, PointCount, ReplayToken};
    pub use crate::geom2::{
        orientation, parse_points, sweep, CaliperSweep, ConvexHull, Orientation, Point, Rectangle,
    };
}
