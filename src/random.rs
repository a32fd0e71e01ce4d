//! Uniform-random baseline. Learns nothing; useful as the floor every other
//! strategy should beat.

use rand::{Rng, RngCore};

use crate::error::{AgentError, Result};
use crate::policy::{Policy, Pulls};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRandom {
    num_actions: usize,
}

impl UniformRandom {
    pub fn new(num_actions: usize) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        Ok(Self { num_actions })
    }
}

impl Policy for UniformRandom {
    fn num_actions(&self) -> usize {
        self.num_actions
    }

    fn choose_action(&mut self, _pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        rng.random_range(0..self.num_actions)
    }

    fn update_policy(&mut self, _action: usize, _reward: f64, _pulls: Pulls<'_>) {}

    fn name(&self) -> &'static str {
        "random"
    }
}
