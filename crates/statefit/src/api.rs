//! Curated surface for front ends (terminal, web, mobile bridges).
//!
//! Front ends should import from here rather than reaching into submodules;
//! the module layout behind it may move.

// Geometry
pub use crate::geom2::{
    area, area_tolerance, bounding_box, centroid, is_simple, point_in_polygon,
    point_in_polygon_eps, rotate, signed_area, translate, Bounds2, GeomCfg, Polygon,
};
// Fit testing
pub use crate::fit::{
    area_ratio, can_fit_at_rotation, find_fitting_rotation, ContainmentMode, FitCfg, FitResult,
};
// Display mapping
pub use crate::viewport::{
    layout_board, map_to_viewport, BoardCfg, BoardLayout, Viewport, ViewportTransform,
};
// Game
pub use crate::dataset::{find_region, sample_regions, validate_regions, DatasetError, Region};
pub use crate::quiz::{
    calculate_score, fit_pair, hint, Difficulty, DifficultySettings, Placement, Question,
    QuestionGenerator, QuizConfig, QuizError, RatioBand, Selection,
};
