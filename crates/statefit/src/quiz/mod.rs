//! Quiz layer: difficulty configuration, questions, scoring and hints.
//!
//! Purpose
//! - Turn the fit tester into a game: pick a region pair whose area ratio
//!   suits a difficulty tier, record the ground-truth answer, score replies.
//!
//! Why this design
//! - Difficulty bands are static configuration, so they are validated once
//!   when a `QuestionGenerator` is built, never per call.
//! - The random source is an explicit generic parameter; seeded `StdRng` gives
//!   reproducible question streams in tests.
//! - Session state (running score, history) belongs to the caller. The
//!   generator only reads the history it is handed.

mod generator;
mod hint;
mod scoring;

pub use generator::{fit_pair, QuestionGenerator};
pub use hint::hint;
pub use scoring::calculate_score;

use std::fmt;
use std::str::FromStr;

use crate::dataset::Region;
use crate::fit::FitCfg;

/// Error type for the quiz layer.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
    InvalidConfig { reason: String },
    NotEnoughRegions { count: usize },
    UnknownDifficulty { input: String },
}

impl QuizError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid quiz config: {reason}"),
            Self::NotEnoughRegions { count } => {
                write!(f, "need at least two regions to ask a question, got {count}")
            }
            Self::UnknownDifficulty { input } => {
                write!(f, "unknown difficulty {input:?} (expected easy, medium or hard)")
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Easy => "Very obvious size differences",
            Self::Medium => "Moderate size differences",
            Self::Hard => "Similar sizes, harder to judge",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(QuizError::UnknownDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

/// Closed interval `[min, max]` of accepted `area(A) / area(B)` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioBand {
    pub min: f64,
    pub max: f64,
}

impl RatioBand {
    pub fn new(min: f64, max: f64) -> Result<Self, QuizError> {
        let band = Self { min, max };
        band.validate()?;
        Ok(band)
    }

    fn validate(&self) -> Result<(), QuizError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(QuizError::invalid("ratio band bounds must be finite"));
        }
        if self.min < 0.0 {
            return Err(QuizError::invalid("ratio band min must be >= 0"));
        }
        if self.min > self.max {
            return Err(QuizError::invalid("ratio band min <= max required"));
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && ratio <= self.max
    }

    /// Band grown by `delta` on both sides (min floored at 0).
    pub fn widened(&self, delta: f64) -> Self {
        Self {
            min: (self.min - delta).max(0.0),
            max: self.max + delta,
        }
    }

    /// Distance from `ratio` to the band; `0` inside, `+∞` for non-finite ratios.
    pub fn distance(&self, ratio: f64) -> f64 {
        if !ratio.is_finite() {
            f64::INFINITY
        } else if ratio < self.min {
            self.min - ratio
        } else if ratio > self.max {
            ratio - self.max
        } else {
            0.0
        }
    }
}

/// Per-tier settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySettings {
    pub band: RatioBand,
    pub base_score: u32,
}

/// How a pair is positioned before the fit test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Test in the regions' native coordinates, as stored.
    #[default]
    InPlace,
    /// Move the shape so its vertex centroid sits on the container's first.
    CentroidAligned,
}

/// Static game configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizConfig {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
    /// Random draws per band before the band is widened.
    pub max_attempts: u32,
    /// Band growth per widening round.
    pub widen_step: f64,
    /// Widening rounds before falling back to the closest ratio.
    pub widen_rounds: u32,
    pub max_time_bonus: u32,
    /// Bonus points lost per elapsed second.
    pub bonus_per_second: f64,
    pub placement: Placement,
    pub fit: FitCfg,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            easy: DifficultySettings {
                band: RatioBand {
                    min: 0.10,
                    max: 0.30,
                },
                base_score: 100,
            },
            medium: DifficultySettings {
                band: RatioBand {
                    min: 0.30,
                    max: 0.70,
                },
                base_score: 200,
            },
            hard: DifficultySettings {
                band: RatioBand {
                    min: 0.60,
                    max: 0.95,
                },
                base_score: 300,
            },
            max_attempts: 200,
            widen_step: 0.05,
            widen_rounds: 4,
            max_time_bonus: 100,
            bonus_per_second: 10.0,
            placement: Placement::InPlace,
            fit: FitCfg::default(),
        }
    }
}

impl QuizConfig {
    pub fn settings(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        for d in Difficulty::ALL {
            if let Err(QuizError::InvalidConfig { reason }) = self.settings(d).band.validate() {
                return Err(QuizError::invalid(format!("{d}: {reason}")));
            }
        }
        if self.max_attempts == 0 {
            return Err(QuizError::invalid("max_attempts must be > 0"));
        }
        if !self.widen_step.is_finite() || self.widen_step < 0.0 {
            return Err(QuizError::invalid("widen_step must be finite and >= 0"));
        }
        if !self.bonus_per_second.is_finite() || self.bonus_per_second < 0.0 {
            return Err(QuizError::invalid(
                "bonus_per_second must be finite and >= 0",
            ));
        }
        if self.fit.coarse_step_deg == 0 || self.fit.fine_step_deg == 0 {
            return Err(QuizError::invalid("rotation steps must be > 0"));
        }
        Ok(())
    }
}

/// Which tier of the pair search produced a question.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    InBand,
    Widened { band: RatioBand },
    /// Attempt cap exhausted; closest unused ratio (or, if every pair was
    /// used, closest overall).
    Closest,
}

/// One round: can `state_a` be turned to fit inside `state_b`?
#[derive(Clone, Debug, PartialEq)]
pub struct Question<'a> {
    pub state_a: &'a Region,
    pub state_b: &'a Region,
    pub correct_answer: bool,
    /// `area_ratio(state_a, state_b)` for the final ordering.
    pub area_ratio: f64,
    /// First fitting rotation in degrees, `0` when it does not fit.
    pub rotation: f64,
    pub selection: Selection,
}

impl Question<'_> {
    /// Ordered name pair used for repeat avoidance.
    pub fn pair_key(&self) -> (&str, &str) {
        (self.state_a.name.as_str(), self.state_b.name.as_str())
    }

    /// Whether a yes/no reply is right.
    #[inline]
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct_answer
    }
}
