//! Planar polygon primitives.
//!
//! Purpose
//! - Provide the small set of pure operations the fit tester and viewport
//!   mapper are built on: shoelace area, bounding box, vertex centroid,
//!   even-odd containment, rotation and translation.
//! - Every transform returns a new `Polygon`; inputs are never mutated, so the
//!   same source ring can be transformed many times per frame.
//!
//! Conventions
//! - Angles are in degrees, counterclockwise positive.
//! - Degenerate rings never panic; see `ops` for the conservative defaults.

mod ops;
mod types;

pub(crate) use ops::ray_cast;
pub use ops::{
    area, area_tolerance, bounding_box, centroid, is_simple, point_in_polygon,
    point_in_polygon_eps, rotate, signed_area, translate,
};
pub use types::{Bounds2, GeomCfg, Polygon};

#[cfg(test)]
mod tests;
