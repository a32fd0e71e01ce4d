//! Greedy selection with optimistic initialization.
//!
//! Always exploits the current best estimate. With a large initial value the
//! first picks are driven by optimism: every untried action looks better than
//! any tried one, so the agent sweeps the arms before settling.

use rand::RngCore;

use crate::error::{AgentError, Result};
use crate::estimate::ValueEstimates;
use crate::policy::{Policy, Pulls};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greedy {
    initial_value: f64,
    q: ValueEstimates,
}

impl Greedy {
    /// All estimates start at `initial_value` (must be finite).
    pub fn new(num_actions: usize, initial_value: f64) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        if !initial_value.is_finite() {
            return Err(AgentError::InvalidConfig(format!(
                "greedy initial value must be finite, got {initial_value}"
            )));
        }
        Ok(Self {
            initial_value,
            q: ValueEstimates::new(num_actions, initial_value),
        })
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn estimates(&self) -> &[f64] {
        self.q.values()
    }
}

impl Policy for Greedy {
    fn num_actions(&self) -> usize {
        self.q.len()
    }

    fn choose_action(&mut self, _pulls: Pulls<'_>, _rng: &mut dyn RngCore) -> usize {
        self.q.best()
    }

    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        self.q.observe(action, reward, pulls.of(action));
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
