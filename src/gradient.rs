//! Gradient bandit: softmax policy over learned preferences.
//!
//! Selection samples from `softmax(preferences)`. After observing reward `r`
//! with running baseline `r̄` (mean of every reward seen so far, this one
//! included):
//!
//! ```text
//! H[chosen] += alpha * (r - r̄) * (1 - pi[chosen])
//! H[other]  -= alpha * (r - r̄) * pi[other]
//! ```
//!
//! `pi` is the distribution the action was *sampled from*, cached at
//! selection time; preferences have moved since any earlier step.

use rand::RngCore;

use crate::alloc::{sample_index, softmax};
use crate::error::{AgentError, Result};
use crate::policy::{Policy, Pulls};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientBandit {
    alpha: f64,
    preferences: Vec<f64>,
    avg_reward: f64,
    // Distribution used by the most recent `choose_action`.
    last_probs: Option<Vec<f64>>,
}

impl GradientBandit {
    /// `alpha` is the learning rate (finite, > 0).
    pub fn new(num_actions: usize, alpha: f64) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(AgentError::InvalidConfig(format!(
                "gradient learning rate must be > 0, got {alpha}"
            )));
        }
        Ok(Self {
            alpha,
            preferences: vec![0.0; num_actions],
            avg_reward: 0.0,
            last_probs: None,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.alpha
    }

    pub fn preferences(&self) -> &[f64] {
        &self.preferences
    }

    /// Reinforcement baseline: mean of all rewards observed so far.
    pub fn avg_reward(&self) -> f64 {
        self.avg_reward
    }

    /// Current action distribution, `softmax(preferences)`.
    pub fn probabilities(&self) -> Vec<f64> {
        softmax(&self.preferences)
    }

    /// Overwrite preferences (e.g. to warm-start from a previous run).
    pub fn set_preferences(&mut self, preferences: &[f64]) -> Result<()> {
        if preferences.len() != self.preferences.len() {
            return Err(AgentError::ActionCountMismatch {
                offered: preferences.len(),
                expected: self.preferences.len(),
            });
        }
        self.preferences.copy_from_slice(preferences);
        self.last_probs = None;
        Ok(())
    }
}

impl Policy for GradientBandit {
    fn num_actions(&self) -> usize {
        self.preferences.len()
    }

    fn choose_action(&mut self, _pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        let probs = self.probabilities();
        let a = sample_index(rng, &probs);
        self.last_probs = Some(probs);
        a
    }

    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        let n = pulls.total.max(1) as f64;
        self.avg_reward += (reward - self.avg_reward) / n;

        let probs = self
            .last_probs
            .take()
            .unwrap_or_else(|| self.probabilities());
        let advantage = self.alpha * (reward - self.avg_reward);
        for (i, (h, &p)) in self.preferences.iter_mut().zip(&probs).enumerate() {
            if i == action {
                *h += advantage * (1.0 - p);
            } else {
                *h -= advantage * p;
            }
        }
    }

    fn name(&self) -> &'static str {
        "gradient"
    }
}
