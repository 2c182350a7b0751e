//! Question generation by bounded rejection sampling.
//!
//! Search order
//! 1. Up to `max_attempts` random ordered pairs against the difficulty band.
//! 2. `widen_rounds` more rounds, the band grown by `widen_step` each round.
//! 3. Deterministic scan for the unused pair whose ratio is closest to the
//!    band; if every ordered pair was already asked, the closest overall.
//!
//! Pairs already in the caller's history are never drawn in steps 1–2 and only
//! repeat in the last resort of step 3.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{Difficulty, Placement, Question, QuizConfig, QuizError, RatioBand, Selection};
use crate::dataset::Region;
use crate::fit::{area_ratio, find_fitting_rotation, FitCfg, FitResult};
use crate::geom2::{centroid, translate, Polygon};

type PairKey<'k> = (&'k str, &'k str);

/// Fit `shape` into `container` after positioning it per `placement`.
pub fn fit_pair(
    shape: &Polygon,
    container: &Polygon,
    placement: Placement,
    cfg: FitCfg,
) -> FitResult {
    match placement {
        Placement::InPlace => find_fitting_rotation(shape, container, cfg),
        Placement::CentroidAligned => match (centroid(shape), centroid(container)) {
            (Some(a), Some(b)) => {
                let moved = translate(shape, b.x - a.x, b.y - a.y);
                find_fitting_rotation(&moved, container, cfg)
            }
            _ => FitResult::NO_FIT,
        },
    }
}

/// Draws questions from a region list with an injected random source.
pub struct QuestionGenerator<R = StdRng> {
    config: QuizConfig,
    rng: R,
}

impl QuestionGenerator<StdRng> {
    pub fn with_seed(config: QuizConfig, seed: u64) -> Result<Self, QuizError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Validates `config` up front; generation itself never sees bad bands.
    pub fn new(config: QuizConfig, rng: R) -> Result<Self, QuizError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Pick a pair for `difficulty` that is not in `previous`, then record
    /// whether it fits. If it does not, a coin flip may swap the pair (unless
    /// the swapped order was already asked); the answer is recomputed for
    /// the swapped order since fitting is not symmetric.
    pub fn generate<'a>(
        &mut self,
        regions: &'a [Region],
        difficulty: Difficulty,
        previous: &[Question<'_>],
    ) -> Result<Question<'a>, QuizError> {
        if regions.len() < 2 {
            return Err(QuizError::NotEnoughRegions {
                count: regions.len(),
            });
        }
        let used: HashSet<PairKey<'_>> = previous.iter().map(|q| q.pair_key()).collect();
        let band = self.config.settings(difficulty).band;
        let (i, j, selection) = self.pick_pair(regions, band, &used);

        let (mut a, mut b) = (&regions[i], &regions[j]);
        let mut fit = self.fit(a, b);
        let flip = self.rng.gen_bool(0.5);
        let swapped = flip && !fit.fits && !used.contains(&(b.name.as_str(), a.name.as_str()));
        if swapped {
            std::mem::swap(&mut a, &mut b);
            fit = self.fit(a, b);
        }

        let question = Question {
            state_a: a,
            state_b: b,
            correct_answer: fit.fits,
            area_ratio: area_ratio(&a.geometry, &b.geometry),
            rotation: fit.rotation,
            selection,
        };
        debug!(
            a = %a.name,
            b = %b.name,
            %difficulty,
            ratio = question.area_ratio,
            fits = fit.fits,
            swapped,
            "question"
        );
        Ok(question)
    }

    fn fit(&self, a: &Region, b: &Region) -> FitResult {
        fit_pair(&a.geometry, &b.geometry, self.config.placement, self.config.fit)
    }

    fn pick_pair(
        &mut self,
        regions: &[Region],
        base: RatioBand,
        used: &HashSet<PairKey<'_>>,
    ) -> (usize, usize, Selection) {
        for round in 0..=self.config.widen_rounds {
            let band = base.widened(round as f64 * self.config.widen_step);
            for _ in 0..self.config.max_attempts {
                let (i, j) = two_distinct(&mut self.rng, regions.len());
                let (a, b) = (&regions[i], &regions[j]);
                if used.contains(&(a.name.as_str(), b.name.as_str())) {
                    continue;
                }
                if band.contains(area_ratio(&a.geometry, &b.geometry)) {
                    let selection = if round == 0 {
                        Selection::InBand
                    } else {
                        Selection::Widened { band }
                    };
                    return (i, j, selection);
                }
            }
            warn!(
                round,
                min = band.min,
                max = band.max,
                attempts = self.config.max_attempts,
                "no unused region pair in ratio band"
            );
            if self.config.widen_step == 0.0 {
                break;
            }
        }
        let (i, j) = closest_pair(regions, base, used)
            .or_else(|| {
                warn!("every region pair already asked; allowing a repeat");
                closest_pair(regions, base, &HashSet::new())
            })
            .unwrap_or((0, 1));
        warn!(
            a = %regions[i].name,
            b = %regions[j].name,
            "falling back to closest area ratio"
        );
        (i, j, Selection::Closest)
    }
}

/// Two distinct indices below `n` (requires `n >= 2`), one draw each.
fn two_distinct<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (usize, usize) {
    let i = rng.gen_range(0..n);
    let mut j = rng.gen_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Unused ordered pair with the smallest distance to `band`; first in scan
/// order on ties.
fn closest_pair(
    regions: &[Region],
    band: RatioBand,
    used: &HashSet<PairKey<'_>>,
) -> Option<(usize, usize)> {
    let mut best: Option<(f64, usize, usize)> = None;
    for (i, a) in regions.iter().enumerate() {
        for (j, b) in regions.iter().enumerate() {
            if i == j || used.contains(&(a.name.as_str(), b.name.as_str())) {
                continue;
            }
            let d = band.distance(area_ratio(&a.geometry, &b.geometry));
            if best.map_or(true, |(bd, _, _)| d < bd) {
                best = Some((d, i, j));
            }
        }
    }
    best.map(|(_, i, j)| (i, j))
}
