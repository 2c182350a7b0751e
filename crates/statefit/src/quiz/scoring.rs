//! Points for a reply: base score per tier plus a decaying speed bonus.

use super::{Difficulty, QuizConfig};

impl QuizConfig {
    /// Speed bonus in whole points: `max_time_bonus − bonus_per_second·t`,
    /// clamped to `[0, max_time_bonus]` and floored. `NaN` earns nothing.
    pub fn time_bonus(&self, elapsed_seconds: f64) -> u32 {
        if elapsed_seconds.is_nan() {
            return 0;
        }
        let max = self.max_time_bonus as f64;
        let raw = max - self.bonus_per_second * elapsed_seconds;
        // NaN only for 0·∞ (no decay, infinite wait): full bonus
        let raw = if raw.is_nan() { max } else { raw };
        raw.clamp(0.0, max).floor() as u32
    }

    /// `0` for a wrong reply, else base score plus speed bonus.
    pub fn score(&self, is_correct: bool, elapsed_seconds: f64, difficulty: Difficulty) -> u32 {
        if !is_correct {
            return 0;
        }
        self.settings(difficulty).base_score + self.time_bonus(elapsed_seconds)
    }
}

/// Score with the default tier table (100 / 200 / 300, bonus 100 − 10·t).
pub fn calculate_score(is_correct: bool, elapsed_seconds: f64, difficulty: Difficulty) -> u32 {
    QuizConfig::default().score(is_correct, elapsed_seconds, difficulty)
}
