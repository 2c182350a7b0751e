//! Game session state owned by the terminal front end.

use statefit::dataset::Region;
use statefit::quiz::{Difficulty, Question, QuestionGenerator, QuizConfig, QuizError};

/// Questions per game.
pub const TOTAL_QUESTIONS: usize = 10;

/// One answered round.
#[derive(Clone, Debug)]
pub struct Round<'a> {
    pub question: Question<'a>,
    pub answer: bool,
    pub elapsed_seconds: f64,
    pub points: u32,
}

impl Round<'_> {
    pub fn is_correct(&self) -> bool {
        self.question.is_correct(self.answer)
    }
}

/// Running score and question history for one game.
pub struct GameSession<'a> {
    regions: &'a [Region],
    difficulty: Difficulty,
    generator: QuestionGenerator,
    total: usize,
    history: Vec<Question<'a>>,
    rounds: Vec<Round<'a>>,
    score: u32,
}

impl<'a> GameSession<'a> {
    pub fn new(
        regions: &'a [Region],
        difficulty: Difficulty,
        generator: QuestionGenerator,
        total: usize,
    ) -> Self {
        Self {
            regions,
            difficulty,
            generator,
            total,
            history: Vec::new(),
            rounds: Vec::new(),
            score: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.rounds.len() >= self.total
    }

    /// 1-based number of the next question.
    pub fn question_number(&self) -> usize {
        self.rounds.len() + 1
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds(&self) -> &[Round<'a>] {
        &self.rounds
    }

    fn config(&self) -> &QuizConfig {
        self.generator.config()
    }

    pub fn next_question(&mut self) -> Result<Question<'a>, QuizError> {
        self.generator
            .generate(self.regions, self.difficulty, &self.history)
    }

    /// Score a reply, remember the pair, return the round.
    pub fn submit(
        &mut self,
        question: Question<'a>,
        answer: bool,
        elapsed_seconds: f64,
    ) -> &Round<'a> {
        let points = self.config().score(
            question.is_correct(answer),
            elapsed_seconds,
            self.difficulty,
        );
        self.score += points;
        self.history.push(question.clone());
        self.rounds.push(Round {
            question,
            answer,
            elapsed_seconds,
            points,
        });
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn correct_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_correct()).count()
    }

    /// Mean answer time; `0` before the first round.
    pub fn average_seconds(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let total: f64 = self.rounds.iter().map(|r| r.elapsed_seconds).sum();
        total / self.rounds.len() as f64
    }
}

/// Verdict shown at the end of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rating {
    pub title: &'static str,
    pub message: &'static str,
}

pub fn rating(score: u32) -> Rating {
    let (title, message) = match score {
        s if s >= 2000 => ("Excellent!", "You're a geography master!"),
        s if s >= 1500 => ("Great!", "Impressive knowledge of US states!"),
        s if s >= 1000 => ("Good", "Not bad! Keep practicing."),
        s if s >= 500 => ("Okay", "Room for improvement!"),
        _ => ("Try Again", "Practice makes perfect!"),
    };
    Rating { title, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefit::dataset::sample_regions;
    use statefit::quiz::Placement;

    #[test]
    fn ratings_follow_thresholds() {
        assert_eq!(rating(2400).title, "Excellent!");
        assert_eq!(rating(1500).title, "Great!");
        assert_eq!(rating(1499).title, "Good");
        assert_eq!(rating(500).title, "Okay");
        assert_eq!(rating(0).title, "Try Again");
    }

    #[test]
    fn session_accumulates_score_and_avoids_repeats() {
        let regions = sample_regions();
        let cfg = QuizConfig {
            placement: Placement::CentroidAligned,
            ..QuizConfig::default()
        };
        let gen = QuestionGenerator::with_seed(cfg, 99).unwrap();
        let mut session = GameSession::new(&regions, Difficulty::Medium, gen, 4);
        let mut keys = Vec::new();
        while !session.is_over() {
            let q = session.next_question().unwrap();
            keys.push((q.state_a.name.clone(), q.state_b.name.clone()));
            let truth = q.correct_answer;
            session.submit(q, truth, 1.0);
        }
        assert_eq!(session.rounds().len(), 4);
        assert_eq!(session.correct_count(), 4);
        assert_eq!(session.score(), 4 * (200 + 90));
        assert!((session.average_seconds() - 1.0).abs() < 1e-12);
        for (i, k) in keys.iter().enumerate() {
            assert!(!keys[..i].contains(k), "repeat pair {k:?}");
        }
    }

    #[test]
    fn wrong_reply_scores_zero() {
        let regions = sample_regions();
        let gen = QuestionGenerator::with_seed(QuizConfig::default(), 1).unwrap();
        let mut session = GameSession::new(&regions, Difficulty::Easy, gen, 1);
        let q = session.next_question().unwrap();
        let wrong = !q.correct_answer;
        let round = session.submit(q, wrong, 0.0);
        assert_eq!(round.points, 0);
        assert!(session.is_over());
        assert_eq!(session.score(), 0);
    }
}
