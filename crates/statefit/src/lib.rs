//! Geometric core of the "does it fit?" geography quiz.
//!
//! Layers, leaf first:
//! - `geom2`: polygon primitives (area, bounds, centroid, containment, motions).
//! - `fit`: rotational fit test and rotation search.
//! - `viewport`: native coordinates → padded display space.
//! - `quiz`: difficulty config, question generation, scoring, hints.
//! - `dataset`: region records and the built-in sample set.
//!
//! Everything here is synchronous and pure apart from the random source the
//! caller hands to `quiz::QuestionGenerator`.

pub mod api;
pub mod dataset;
pub mod fit;
pub mod geom2;
pub mod quiz;
pub mod viewport;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dataset::{find_region, sample_regions, Region};
    pub use crate::fit::{area_ratio, can_fit_at_rotation, find_fitting_rotation, FitCfg};
    pub use crate::geom2::{area, bounding_box, centroid, Polygon};
    pub use crate::quiz::{calculate_score, Difficulty, Question, QuestionGenerator, QuizConfig};
    pub use crate::viewport::map_to_viewport;
    pub use nalgebra::Vector2 as Vec2;
}
