//! Pure polygon primitives: area, bounds, centroid, containment, rigid motions.
//!
//! None of these functions fail. Degenerate input (fewer than three vertices,
//! collinear rings, non-finite coordinates) yields the conservative answer:
//! area `0`, no bounds/centroid, "not inside".
//!
//! Collinearity is judged up to rounding: a shoelace sum below
//! `area_tolerance` counts as zero, so decimal coordinates that are collinear
//! on paper (`-71.8, -71.45, -71.1`) give area `0` as well.

use nalgebra::{Rotation2, Vector2};

use super::types::{Bounds2, GeomCfg, Polygon};

/// Shoelace signed area; positive for counterclockwise rings.
///
/// Summed relative to the first vertex to keep far-from-origin rings precise.
/// Results within `area_tolerance` of zero are reported as exactly `0`.
pub fn signed_area(poly: &Polygon) -> f64 {
    let Some(&o) = poly.vertices().first() else {
        return 0.0;
    };
    if poly.len() < 3 {
        return 0.0;
    }
    let twice: f64 = poly.edges().map(|(p, q)| (p - o).perp(&(q - o))).sum();
    let a = 0.5 * twice;
    if a.abs() <= area_tolerance(poly) {
        0.0
    } else {
        a
    }
}

/// Rounding budget for the shoelace sum of `poly`.
///
/// Each cross term carries an error of a few ulps of `extent · magnitude`,
/// where `extent` is the bounding-box size and `magnitude` the largest
/// absolute coordinate; the budget sums that over all edges with headroom.
pub fn area_tolerance(poly: &Polygon) -> f64 {
    let Some(b) = bounding_box(poly) else {
        return 0.0;
    };
    let extent = b.width().max(b.height());
    let magnitude = [b.min_x, b.min_y, b.max_x, b.max_y]
        .iter()
        .fold(extent, |m, c| m.max(c.abs()));
    16.0 * f64::EPSILON * poly.len() as f64 * extent * magnitude
}

/// Unsigned area. Collinear or non-finite rings give `0`.
pub fn area(poly: &Polygon) -> f64 {
    let a = signed_area(poly).abs();
    if a.is_finite() {
        a
    } else {
        0.0
    }
}

/// Min/max over all vertex coordinates; `None` for an empty ring.
pub fn bounding_box(poly: &Polygon) -> Option<Bounds2> {
    let first = poly.vertices().first()?;
    let init = Bounds2 {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    Some(poly.vertices().iter().fold(init, |b, v| Bounds2 {
        min_x: b.min_x.min(v.x),
        min_y: b.min_y.min(v.y),
        max_x: b.max_x.max(v.x),
        max_y: b.max_y.max(v.y),
    }))
}

/// Arithmetic mean of the vertices.
///
/// This is not the area centroid. It only serves as a rotation pivot, where
/// any interior-ish point works, and it is cheap and stable for thin rings.
pub fn centroid(poly: &Polygon) -> Option<Vector2<f64>> {
    if poly.is_empty() {
        return None;
    }
    let sum = poly
        .vertices()
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, v| acc + v);
    Some(sum / poly.len() as f64)
}

/// Even-odd ray casting with the default boundary tolerance.
#[inline]
pub fn point_in_polygon(p: Vector2<f64>, poly: &Polygon) -> bool {
    point_in_polygon_eps(p, poly, GeomCfg::default().eps_boundary)
}

/// Even-odd ray casting (horizontal ray towards +x).
///
/// Boundary policy: a point within `eps` of any edge is reported inside. With
/// `eps <= 0` the boundary result is whatever the crossing count gives.
/// Zero-area rings contain nothing, not even their own vertices.
pub fn point_in_polygon_eps(p: Vector2<f64>, poly: &Polygon, eps: f64) -> bool {
    area(poly) > 0.0 && ray_cast(p, poly, eps)
}

/// `point_in_polygon_eps` without the zero-area check, for callers that have
/// already checked `poly` once and query it many times.
pub(crate) fn ray_cast(p: Vector2<f64>, poly: &Polygon, eps: f64) -> bool {
    if !(p.x.is_finite() && p.y.is_finite()) {
        return false;
    }
    let mut inside = false;
    for (a, b) in poly.edges() {
        if eps > 0.0 && dist_to_segment(p, a, b) <= eps {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Rotate every vertex about `pivot` by `angle_deg` (counterclockwise positive).
pub fn rotate(poly: &Polygon, angle_deg: f64, pivot: Vector2<f64>) -> Polygon {
    let r = Rotation2::new(angle_deg.to_radians());
    poly.map_vertices(|v| pivot + r * (v - pivot))
}

/// Shift every vertex by `(dx, dy)`.
pub fn translate(poly: &Polygon, dx: f64, dy: f64) -> Polygon {
    let t = Vector2::new(dx, dy);
    poly.map_vertices(|v| v + t)
}

/// True when no two edges of the ring touch except neighbours at their shared
/// vertex. Repeated consecutive vertices are ignored; rings with fewer than
/// three distinct vertices are not simple.
///
/// Pairwise check, quadratic in the vertex count.
pub fn is_simple(poly: &Polygon) -> bool {
    let mut ring: Vec<Vector2<f64>> = Vec::with_capacity(poly.len());
    for &v in poly.vertices() {
        if ring.last() != Some(&v) {
            ring.push(v);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    let n = ring.len();
    if n < 3 || ring.iter().any(|v| !(v.x.is_finite() && v.y.is_finite())) {
        return false;
    }
    let edge = |i: usize| (ring[i], ring[(i + 1) % n]);
    for i in 0..n {
        // j = i + 1 is the next neighbour; the last edge neighbours edge 0
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if segments_touch(a, b, c, d) {
                return false;
            }
        }
    }
    // neighbours folding back onto each other
    (0..n).all(|i| {
        let (a, b) = edge(i);
        let c = ring[(i + 2) % n];
        (b - a).perp(&(c - b)) != 0.0 || (b - a).dot(&(c - b)) > 0.0
    })
}

fn segments_touch(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    let orient = |p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>| (q - p).perp(&(r - p));
    let on_segment = |p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>| {
        r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
    };
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}

fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
