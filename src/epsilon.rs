//! Epsilon-greedy selection.
//!
//! With probability `epsilon` pick uniformly at random, otherwise exploit the
//! best sample-mean estimate. Estimates start at zero, so `epsilon = 0` is
//! plain greedy without optimism.

use rand::{Rng, RngCore};

use crate::error::{AgentError, Result};
use crate::estimate::ValueEstimates;
use crate::policy::{Policy, Pulls};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsilonGreedy {
    epsilon: f64,
    q: ValueEstimates,
}

impl EpsilonGreedy {
    /// `epsilon` must lie in `[0, 1]`.
    pub fn new(num_actions: usize, epsilon: f64) -> Result<Self> {
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(AgentError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {epsilon}"
            )));
        }
        Ok(Self {
            epsilon,
            q: ValueEstimates::new(num_actions, 0.0),
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn estimates(&self) -> &[f64] {
        self.q.values()
    }
}

impl Policy for EpsilonGreedy {
    fn num_actions(&self) -> usize {
        self.q.len()
    }

    fn choose_action(&mut self, _pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        // Skip the coin flip entirely at epsilon = 0 so the pure-greedy case
        // consumes no randomness.
        if self.epsilon > 0.0 && rng.random::<f64>() < self.epsilon {
            return rng.random_range(0..self.q.len());
        }
        self.q.best()
    }

    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        self.q.observe(action, reward, pulls.of(action));
    }

    fn name(&self) -> &'static str {
        "epsilon_greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn epsilon_must_be_a_probability() {
        assert!(EpsilonGreedy::new(2, 0.0).is_ok());
        assert!(EpsilonGreedy::new(2, 1.0).is_ok());
        for bad in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                EpsilonGreedy::new(2, bad),
                Err(AgentError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn full_exploration_reaches_every_arm() {
        let mut p = EpsilonGreedy::new(4, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let counts = [0u64; 4];
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[p.choose_action(Pulls::new(0, &counts), &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen={seen:?}");
    }

    #[test]
    fn zero_epsilon_exploits() {
        let mut p = EpsilonGreedy::new(3, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let counts = [0, 0, 1];
        p.update_policy(2, 0.5, Pulls::new(1, &counts));
        for _ in 0..50 {
            assert_eq!(p.choose_action(Pulls::new(1, &counts), &mut rng), 2);
        }
    }
}
