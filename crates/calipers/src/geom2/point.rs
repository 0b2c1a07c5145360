//! Exact 2D points and the orientation predicate.
//!
//! - `Point`: immutable `(x, y)` pair of [`Exact`]; ordered bottom-to-top,
//!   then left-to-right, so `min()` over a set is the Graham pivot.
//! - `Orientation`: exact sign of the cross product of two edge vectors.
//!
//! Code cross-refs: `hull::convex_hull`, `calipers::sweep_edges`

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{GeomError, Result};
use crate::exact::Exact;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Exact,
    pub y: Exact,
}

/// Turn direction of `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise (strict left turn).
    Left,
    /// Clockwise (strict right turn).
    Right,
    Collinear,
}

impl Point {
    #[inline]
    pub fn new(x: impl Into<Exact>, y: impl Into<Exact>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Both coordinates as `numer / denom` pairs.
    pub fn from_ratios(x: (i64, i64), y: (i64, i64)) -> Result<Self> {
        Ok(Self {
            x: Exact::new(x.0, x.1)?,
            y: Exact::new(y.0, y.1)?,
        })
    }

    /// `self - other` as a free vector (still a `Point`).
    #[inline]
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
        }
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> Exact {
        &self.x * &other.x + &self.y * &other.y
    }

    /// z-component of `self × other`.
    #[inline]
    pub fn perp_dot(&self, other: &Point) -> Exact {
        &self.x * &other.y - &self.y * &other.x
    }

    /// Squared Euclidean distance; no square roots.
    pub fn squared_distance(&self, other: &Point) -> Exact {
        let d = self.sub(other);
        d.dot(&d)
    }

    /// Lossy conversion for drawing.
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }
}

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
#[inline]
pub fn cross(a: &Point, b: &Point, c: &Point) -> Exact {
    b.sub(a).perp_dot(&c.sub(a))
}

/// Exact turn classification of `a → b → c`.
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    match cross(a, b, c).signum() {
        1 => Orientation::Left,
        -1 => Orientation::Right,
        _ => Orientation::Collinear,
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<X: Into<Exact>, Y: Into<Exact>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Accepts `(x,y)` or bare `x,y`; coordinates use the [`Exact`] grammar.
impl FromStr for Point {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let inner = match (t.strip_prefix('('), t.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => t,
            _ => return Err(GeomError::parse(s, "unbalanced parenthesis")),
        };
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| GeomError::parse(s, "expected two comma-separated coordinates"))?;
        Ok(Point {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}
