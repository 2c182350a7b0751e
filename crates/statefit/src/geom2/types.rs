//! Basic 2D types used by the fit tester and the viewport mapper.
//!
//! - `GeomCfg`: boundary tolerance for point-in-polygon tests.
//! - `Polygon`: a single closed ring stored without the repeated closing vertex.
//! - `Bounds2`: axis-aligned bounding box.

use nalgebra::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Points within this distance of a ring edge count as inside.
    pub eps_boundary: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_boundary: 1e-9 }
    }
}

/// Closed ring of vertices. The closing vertex is implicit: a trailing copy of
/// the first vertex is dropped on construction, so `vertices()` lists every
/// corner exactly once.
///
/// Only exterior rings are modelled; holes are never constructed by the game.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Vector2<f64>>", into = "Vec<Vector2<f64>>")
)]
pub struct Polygon {
    ring: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(mut ring: Vec<Vector2<f64>>) -> Self {
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        Self { ring }
    }

    /// Build from `(x, y)` tuples; convenient for literals and tests.
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    /// Axis-aligned rectangle with lower-left corner `(x, y)`, CCW order.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::from_xy(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Ring edges `(v_i, v_{i+1})`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.ring.len();
        (0..n).map(move |i| (self.ring[i], self.ring[(i + 1) % n]))
    }

    /// Midpoint of every edge, in ring order.
    pub fn edge_midpoints(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.edges().map(|(a, b)| (a + b) * 0.5)
    }

    /// All coordinates finite.
    pub fn is_finite(&self) -> bool {
        self.ring.iter().all(|v| v.x.is_finite() && v.y.is_finite())
    }

    /// Apply `f` to every vertex, producing a new polygon.
    pub fn map_vertices<F>(&self, f: F) -> Polygon
    where
        F: Fn(Vector2<f64>) -> Vector2<f64>,
    {
        Polygon {
            ring: self.ring.iter().map(|&v| f(v)).collect(),
        }
    }

    /// SVG path data `M x y L x y … Z`; empty string for an empty ring.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::new();
        for (i, v) in self.ring.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{cmd} {:.3} {:.3}", v.x, v.y));
        }
        if !out.is_empty() {
            out.push_str(" Z");
        }
        out
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(ring: Vec<Vector2<f64>>) -> Self {
        Polygon::new(ring)
    }
}

impl From<Polygon> for Vec<Vector2<f64>> {
    fn from(poly: Polygon) -> Self {
        poly.ring
    }
}

/// Axis-aligned bounding box `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds2 {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    #[inline]
    pub fn min(&self) -> Vector2<f64> {
        Vector2::new(self.min_x, self.min_y)
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }
    /// Component-wise comparison with tolerance `eps`.
    pub fn approx_eq(&self, other: &Bounds2, eps: f64) -> bool {
        (self.min_x - other.min_x).abs() <= eps
            && (self.min_y - other.min_y).abs() <= eps
            && (self.max_x - other.max_x).abs() <= eps
            && (self.max_y - other.max_y).abs() <= eps
    }
}
