//! Terminal and SVG renderings of a question board.
//!
//! Both go through `statefit::viewport::layout_board`; display y points up
//! here (latitude up), so rows and SVG coordinates are flipped on output.

use statefit::geom2::{point_in_polygon, Polygon};
use statefit::viewport::{layout_board, BoardCfg, BoardLayout};
use statefit::Vec2;

const SHAPE_FILL: &str = "rgba(250, 150, 100, 0.5)";
const SHAPE_STROKE: &str = "rgb(250, 150, 100)";
const TARGET_FILL: &str = "rgba(100, 150, 250, 0.3)";
const TARGET_STROKE: &str = "rgb(100, 150, 250)";

/// Character-grid preview. `#` overlap, `!` shape outside the target,
/// `.` target only.
pub fn ascii_board(
    shape: &Polygon,
    target: &Polygon,
    cols: usize,
    rows: usize,
    rotation: f64,
) -> String {
    // terminal cells are about twice as tall as wide
    let (w, h) = (cols as f64, 2.0 * rows as f64);
    let cfg = BoardCfg {
        target_padding: 1.0,
        shape_padding: 1.0,
        ..BoardCfg::default()
    };
    let BoardLayout { shape, target } = layout_board(shape, target, w, h, rotation, cfg);
    let mut out = String::with_capacity((cols + 1) * rows);
    for r in (0..rows).rev() {
        for c in 0..cols {
            let p = Vec2::new(c as f64 + 0.5, 2.0 * (r as f64 + 0.5));
            let ch = match (point_in_polygon(p, &shape), point_in_polygon(p, &target)) {
                (true, true) => '#',
                (true, false) => '!',
                (false, true) => '.',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Standalone SVG document of the board.
pub fn svg_board(
    shape: &Polygon,
    target: &Polygon,
    width: f64,
    height: f64,
    rotation: f64,
) -> String {
    let layout = layout_board(shape, target, width, height, rotation, BoardCfg::default());
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            "  <rect width=\"{w}\" height=\"{h}\" fill=\"#f0f0f0\"/>\n",
            "  <g transform=\"translate(0,{h}) scale(1,-1)\">\n",
            "    <path d=\"{target}\" fill=\"{tf}\" stroke=\"{ts}\" stroke-width=\"2\"/>\n",
            "    <path d=\"{shape}\" fill=\"{sf}\" stroke=\"{ss}\" stroke-width=\"2\"/>\n",
            "  </g>\n",
            "</svg>\n"
        ),
        w = width,
        h = height,
        target = layout.target.to_svg_path(),
        tf = TARGET_FILL,
        ts = TARGET_STROKE,
        shape = layout.shape.to_svg_path(),
        sf = SHAPE_FILL,
        ss = SHAPE_STROKE,
    )
}
