//! Native coordinates → padded display coordinates.
//!
//! The mapping is a uniform scale plus offset: the polygon's bounding box is
//! scaled to fit `(width − 2·padding) × (height − 2·padding)` without changing
//! the aspect ratio, and its lower-left corner lands on `(padding, padding)`.
//! No axis is flipped; the renderer decides which way y points.

use nalgebra::Vector2;

use crate::geom2::{bounding_box, centroid, rotate, translate, Bounds2, Polygon};

/// Target display rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Drawable extent after padding, clamped at zero.
    #[inline]
    pub fn inner_size(&self) -> (f64, f64) {
        (
            (self.width - 2.0 * self.padding).max(0.0),
            (self.height - 2.0 * self.padding).max(0.0),
        )
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(0.5 * self.width, 0.5 * self.height)
    }
}

/// Uniform scale + offset taking native coordinates into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub origin: Vector2<f64>,
    pub padding: f64,
}

impl ViewportTransform {
    /// Transform fitting `bounds` into `viewport`. A zero (or non-finite)
    /// extent on an axis is treated as `1` so the scale stays finite.
    pub fn fit(bounds: &Bounds2, viewport: &Viewport) -> Self {
        let safe = |d: f64| if d.is_finite() && d > 0.0 { d } else { 1.0 };
        let (avail_w, avail_h) = viewport.inner_size();
        let scale = (avail_w / safe(bounds.width())).min(avail_h / safe(bounds.height()));
        Self {
            scale: if scale.is_finite() { scale } else { 0.0 },
            origin: bounds.min(),
            padding: viewport.padding,
        }
    }

    /// `None` for an empty polygon.
    pub fn for_polygon(poly: &Polygon, viewport: &Viewport) -> Option<Self> {
        bounding_box(poly).map(|b| Self::fit(&b, viewport))
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        (p - self.origin) * self.scale + Vector2::repeat(self.padding)
    }

    pub fn apply_polygon(&self, poly: &Polygon) -> Polygon {
        poly.map_vertices(|v| self.apply(v))
    }
}

/// Map `poly` into a `width × height` viewport with `padding` on every side.
/// Returns a new polygon; an empty input maps to an empty polygon.
pub fn map_to_viewport(poly: &Polygon, width: f64, height: f64, padding: f64) -> Polygon {
    let viewport = Viewport::new(width, height, padding);
    match ViewportTransform::for_polygon(poly, &viewport) {
        Some(t) => t.apply_polygon(poly),
        None => Polygon::default(),
    }
}

/// How the two shapes of a question share the game board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCfg {
    /// Fraction of the board used by the target (container) shape.
    pub target_ratio: f64,
    pub target_padding: f64,
    /// Fraction of the board used by the shape to fit when scaled on its own.
    pub shape_ratio: f64,
    pub shape_padding: f64,
    /// Draw both shapes with the target's scale so relative sizes are true.
    /// When false each shape is scaled into its own box.
    pub shared_scale: bool,
}

impl Default for BoardCfg {
    fn default() -> Self {
        Self {
            target_ratio: 0.8,
            target_padding: 20.0,
            shape_ratio: 0.4,
            shape_padding: 10.0,
            shared_scale: true,
        }
    }
}

/// Display-space polygons for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    pub shape: Polygon,
    pub target: Polygon,
}

/// Lay out a question on a `width × height` board: both shapes centred on the
/// board, `shape` turned by `rotation_deg` about its own centroid.
pub fn layout_board(
    shape: &Polygon,
    target: &Polygon,
    width: f64,
    height: f64,
    rotation_deg: f64,
    cfg: BoardCfg,
) -> BoardLayout {
    let target_vp = Viewport::new(
        width * cfg.target_ratio,
        height * cfg.target_ratio,
        cfg.target_padding,
    );
    let shape_vp = Viewport::new(
        width * cfg.shape_ratio,
        height * cfg.shape_ratio,
        cfg.shape_padding,
    );
    let target_t = ViewportTransform::for_polygon(target, &target_vp);
    let shape_t = match (cfg.shared_scale, target_t) {
        (true, Some(t)) => bounding_box(shape).map(|b| ViewportTransform {
            origin: b.min(),
            ..t
        }),
        _ => ViewportTransform::for_polygon(shape, &shape_vp),
    };
    let center = Vector2::new(0.5 * width, 0.5 * height);
    let place = |poly: &Polygon, t: Option<ViewportTransform>| -> Polygon {
        let Some(t) = t else {
            return Polygon::default();
        };
        let mapped = t.apply_polygon(poly);
        match centroid(&mapped) {
            Some(c) => translate(&mapped, center.x - c.x, center.y - c.y),
            None => mapped,
        }
    };
    let target_px = place(target, target_t);
    let shape_px = place(shape, shape_t);
    let shape_px = match centroid(&shape_px) {
        Some(c) => rotate(&shape_px, rotation_deg, c),
        None => shape_px,
    };
    BoardLayout {
        shape: shape_px,
        target: target_px,
    }
}
