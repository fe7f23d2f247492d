//! Weighted skill-point allocation.
//!
//! Each redeemed point goes to one skill, drawn with probability proportional
//! to its configured weight.

use arena_state::Skill;
use rand::Rng;

use crate::config::{ConfigError, SkillWeights};

/// Draws skills from a fixed weight table.
#[derive(Debug, Clone)]
pub struct SkillSelector {
    /// Running weight totals, in `Skill::all()` order
    cumulative: Vec<(Skill, f64)>,
    total: f64,
}

impl SkillSelector {
    /// Builds the cumulative table, rejecting non-positive or non-finite weights.
    pub fn new(weights: &SkillWeights) -> Result<Self, ConfigError> {
        let mut cumulative = Vec::with_capacity(3);
        let mut total = 0.0;

        for (skill, weight) in weights.entries() {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ConfigError::InvalidSkillWeight { skill, weight });
            }
            total += weight;
            cumulative.push((skill, total));
        }

        Ok(Self { cumulative, total })
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Probability of drawing `skill`.
    pub fn probability(&self, skill: Skill) -> f64 {
        let mut previous = 0.0;
        for &(entry, running) in &self.cumulative {
            if entry == skill {
                return (running - previous) / self.total;
            }
            previous = running;
        }
        0.0
    }

    /// Draws one skill using a single uniform sample in `[0, total)`.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Skill {
        let roll = rng.gen::<f64>() * self.total;
        self.pick(roll)
    }

    fn pick(&self, roll: f64) -> Skill {
        for &(skill, running) in &self.cumulative {
            if roll < running {
                return skill;
            }
        }
        // Float rounding can leave roll == total
        self.cumulative
            .last()
            .map(|&(skill, _)| skill)
            .unwrap_or(Skill::Attack)
    }
}
