//! Thompson sampling over Beta-Bernoulli posteriors.
//!
//! Each action carries `Beta(successes, failures)` pseudo-counts starting at
//! the uniform prior `Beta(1, 1)`. Selection draws one sample per action and
//! takes the max (lowest index on ties).
//!
//! Notes:
//! - Only defined for binary reward sources. The agent refuses to bind this
//!   strategy to a source that does not declare
//!   [`RewardKind::Binary`](crate::RewardKind::Binary).
//! - A reward counts as a success when `reward > 0`, a failure otherwise.

use rand::RngCore;
use rand_distr::{Beta, Distribution};

use crate::error::{AgentError, Result};
use crate::estimate::argmax;
use crate::policy::{Policy, Pulls};

/// Beta posterior state for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaCounts {
    pub successes: u64,
    pub failures: u64,
}

impl BetaCounts {
    pub const UNIFORM: BetaCounts = BetaCounts {
        successes: 1,
        failures: 1,
    };

    pub fn expected_value(&self) -> f64 {
        let denom = (self.successes + self.failures) as f64;
        if denom <= 0.0 {
            0.5
        } else {
            self.successes as f64 / denom
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThompsonSampling {
    posteriors: Vec<BetaCounts>,
}

impl ThompsonSampling {
    pub fn new(num_actions: usize) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        Ok(Self {
            posteriors: vec![BetaCounts::UNIFORM; num_actions],
        })
    }

    pub fn posteriors(&self) -> &[BetaCounts] {
        &self.posteriors
    }

    pub fn successes(&self) -> Vec<u64> {
        self.posteriors.iter().map(|p| p.successes).collect()
    }

    pub fn failures(&self) -> Vec<u64> {
        self.posteriors.iter().map(|p| p.failures).collect()
    }

    /// Posterior mean success probability per action.
    pub fn posterior_means(&self) -> Vec<f64> {
        self.posteriors.iter().map(BetaCounts::expected_value).collect()
    }

    fn sample_beta(counts: BetaCounts, rng: &mut dyn RngCore) -> f64 {
        match Beta::new(counts.successes as f64, counts.failures as f64) {
            Ok(dist) => dist.sample(rng),
            Err(_) => 0.5,
        }
    }
}

impl Policy for ThompsonSampling {
    fn num_actions(&self) -> usize {
        self.posteriors.len()
    }

    fn choose_action(&mut self, _pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        let draws: Vec<f64> = self
            .posteriors
            .iter()
            .map(|&c| Self::sample_beta(c, rng))
            .collect();
        argmax(&draws)
    }

    fn update_policy(&mut self, action: usize, reward: f64, _pulls: Pulls<'_>) {
        let p = &mut self.posteriors[action];
        if reward > 0.0 {
            p.successes = p.successes.saturating_add(1);
        } else {
            p.failures = p.failures.saturating_add(1);
        }
    }

    fn requires_binary_rewards(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "thompson"
    }
}
