//! Upper-confidence-bound selection (UCB1 with a tunable coefficient).
//!
//! Policy:
//! - Explore: return the first action (stable order) with zero selections.
//! - Otherwise: `score[a] = q[a] + c * sqrt(ln(t) / n[a])`, pick the max
//!   (lowest index on ties).
//!
//! The explore-first branch is what keeps `ln(t)` and `1 / n[a]` well defined:
//! scoring only runs once every `n[a] >= 1`, hence `t >= num_actions >= 1`.

use rand::RngCore;

use crate::error::{AgentError, Result};
use crate::estimate::{argmax, ValueEstimates};
use crate::policy::{Policy, Pulls};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ucb {
    c: f64,
    q: ValueEstimates,
}

impl Ucb {
    /// `c` is the exploration coefficient (finite, > 0).
    pub fn new(num_actions: usize, c: f64) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        if !(c.is_finite() && c > 0.0) {
            return Err(AgentError::InvalidConfig(format!(
                "UCB exploration coefficient must be > 0, got {c}"
            )));
        }
        Ok(Self {
            c,
            q: ValueEstimates::new(num_actions, 0.0),
        })
    }

    pub fn exploration(&self) -> f64 {
        self.c
    }

    pub fn estimates(&self) -> &[f64] {
        self.q.values()
    }

    /// Confidence scores for every action, or `None` while some action is
    /// still untried.
    pub fn scores(&self, pulls: Pulls<'_>) -> Option<Vec<f64>> {
        if pulls.first_untried().is_some() || pulls.per_action.len() != self.q.len() {
            return None;
        }
        let ln_t = (pulls.total.max(1) as f64).ln();
        Some(
            self.q
                .values()
                .iter()
                .zip(pulls.per_action)
                .map(|(&q, &n)| q + self.c * (ln_t / n as f64).sqrt())
                .collect(),
        )
    }
}

impl Policy for Ucb {
    fn num_actions(&self) -> usize {
        self.q.len()
    }

    fn choose_action(&mut self, pulls: Pulls<'_>, _rng: &mut dyn RngCore) -> usize {
        if let Some(a) = pulls.first_untried() {
            return a;
        }
        match self.scores(pulls) {
            Some(scores) => argmax(&scores),
            None => self.q.best(),
        }
    }

    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        self.q.observe(action, reward, pulls.of(action));
    }

    fn name(&self) -> &'static str {
        "ucb"
    }
}
