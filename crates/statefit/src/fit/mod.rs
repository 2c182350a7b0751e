//! Rotational fit testing: can shape A be turned so it lies inside shape B?
//!
//! Purpose
//! - Decide ground truth for a quiz question with a cheap sampled test instead
//!   of exact polygon containment.
//!
//! Model
//! - A shape fits at angle θ iff every sample point of the shape, rotated by θ
//!   about the shape's vertex centroid, tests inside the container.
//! - `ContainmentMode::Vertices` samples vertices only. It misses an edge
//!   that leaves the container between two inside vertices (a bar spanning a
//!   concave notch). `VerticesAndMidpoints` also samples edge midpoints and
//!   catches notches at least half an edge wide; it is opt-in.
//! - The search is a coarse ascending scan followed by a fine ascending scan
//!   around the first coarse hit; the first fine hit is returned. It is not a
//!   maximal-margin search.
//! - No translation is searched: the shape is rotated in place, in the
//!   container's coordinate frame.
//! - Invalid rings never fit: zero-area rings (collinear up to rounding) and
//!   self-intersecting rings, for either the shape or the container. The
//!   self-intersection check is quadratic in the vertex count, so
//!   `find_fitting_rotation` runs it once per pair rather than once per angle.
//!   Loaders should reject such outlines up front (`Region::validate`).

use crate::geom2::{area, centroid, is_simple, ray_cast, rotate, GeomCfg, Polygon};

/// Which points of the rotated shape must lie inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainmentMode {
    #[default]
    Vertices,
    VerticesAndMidpoints,
}

/// Rotation search configuration. Angles are whole degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitCfg {
    pub coarse_step_deg: u32,
    pub fine_step_deg: u32,
    /// Half-width of the fine window around the first coarse hit.
    pub refine_window_deg: u32,
    pub mode: ContainmentMode,
    pub geom: GeomCfg,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self {
            coarse_step_deg: 15,
            fine_step_deg: 1,
            refine_window_deg: 15,
            mode: ContainmentMode::Vertices,
            geom: GeomCfg::default(),
        }
    }
}

impl FitCfg {
    /// Default search with edge-midpoint sampling switched on.
    pub fn with_midpoints() -> Self {
        Self {
            mode: ContainmentMode::VerticesAndMidpoints,
            ..Self::default()
        }
    }

    /// Coarse sample angles `0, step, 2·step, …` below 360.
    pub fn coarse_angles(&self) -> impl Iterator<Item = i32> {
        let step = self.coarse_step_deg.clamp(1, 360) as usize;
        (0..360).step_by(step)
    }

    /// Fine angles `[c − w, c + w]` in ascending order.
    pub fn fine_angles(&self, coarse: i32) -> impl Iterator<Item = i32> {
        let w = self.refine_window_deg.min(360) as i32;
        let step = self.fine_step_deg.clamp(1, 360) as usize;
        (coarse - w..=coarse + w).step_by(step)
    }
}

/// Outcome of `find_fitting_rotation`. `rotation` is in degrees and may be
/// negative (the fine window around 0° starts at −15°). It is `0` when
/// nothing fits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    pub fits: bool,
    pub rotation: f64,
}

impl FitResult {
    pub const NO_FIT: FitResult = FitResult {
        fits: false,
        rotation: 0.0,
    };
}

/// Does `shape` fit inside `container` when rotated by `angle_deg` about its
/// own vertex centroid? Degenerate or self-intersecting shapes and containers
/// never fit.
pub fn can_fit_at_rotation(
    shape: &Polygon,
    container: &Polygon,
    angle_deg: f64,
    cfg: FitCfg,
) -> bool {
    valid_pair(shape, container) && fits_valid(shape, container, angle_deg, cfg)
}

fn valid_pair(shape: &Polygon, container: &Polygon) -> bool {
    area(shape) > 0.0 && area(container) > 0.0 && is_simple(shape) && is_simple(container)
}

/// Sampled containment for a pair that already passed `valid_pair`.
fn fits_valid(shape: &Polygon, container: &Polygon, angle_deg: f64, cfg: FitCfg) -> bool {
    if !angle_deg.is_finite() {
        return false;
    }
    let Some(pivot) = centroid(shape) else {
        return false;
    };
    let rotated = rotate(shape, angle_deg, pivot);
    let eps = cfg.geom.eps_boundary;
    let inside = |p| ray_cast(p, container, eps);
    let vertices_in = rotated.vertices().iter().all(|&v| inside(v));
    match cfg.mode {
        ContainmentMode::Vertices => vertices_in,
        ContainmentMode::VerticesAndMidpoints => {
            vertices_in && rotated.edge_midpoints().all(|m| inside(m))
        }
    }
}

/// Two-phase search: coarse scan, then a fine scan around the first coarse
/// angle that fits. Returns the first fine angle that fits.
pub fn find_fitting_rotation(shape: &Polygon, container: &Polygon, cfg: FitCfg) -> FitResult {
    if !valid_pair(shape, container) {
        return FitResult::NO_FIT;
    }
    let fits_at = |deg: i32| fits_valid(shape, container, deg as f64, cfg);
    let Some(coarse) = cfg.coarse_angles().find(|&deg| fits_at(deg)) else {
        return FitResult::NO_FIT;
    };
    // The coarse angle itself lies in the window unless the fine step skips it.
    let fine = cfg.fine_angles(coarse).find(|&deg| fits_at(deg)).unwrap_or(coarse);
    FitResult {
        fits: true,
        rotation: fine as f64,
    }
}

/// `area(a) / area(b)` from the ring geometry. Zero-area `a` gives `0`,
/// otherwise zero-area `b` gives `+∞`; never `NaN`.
pub fn area_ratio(a: &Polygon, b: &Polygon) -> f64 {
    let area_a = area(a);
    let area_b = area(b);
    if area_a == 0.0 {
        0.0
    } else if area_b == 0.0 {
        f64::INFINITY
    } else {
        area_a / area_b
    }
}
