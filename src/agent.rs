//! The agent: one policy bound to one reward source, plus the fixed trial loop.
//!
//! [`Agent::act`] is the only way trials happen, and its order never varies:
//!
//! 1. `policy.choose_action(pulls)` with counts of *completed* trials
//! 2. `reward = source.sample(action)`
//! 3. `total_reward += reward`, `trial_count += 1`, `action_count[action] += 1`
//! 4. `policy.update_policy(action, reward, pulls)` with counts that include
//!    this trial
//! 5. return `reward`
//!
//! Hence `sum(action_counts()) == trial_count()` after every completed call.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::{AgentError, Result};
use crate::policy::{Policy, Pulls};
use crate::source::{RewardKind, RewardSource};
use crate::strategy::Strategy;

/// A bandit agent. Built once per run; start a fresh instance to re-run from
/// a clean state.
///
/// `R` is the action-selection RNG. The default [`StdRng`] is fine for
/// experiments; pin a portable generator through [`Agent::with_rng`] when runs
/// must reproduce across `rand` releases.
#[derive(Debug)]
pub struct Agent<S, P = Strategy, R = StdRng> {
    label: String,
    source: S,
    policy: P,
    rng: R,
    reward_kind: RewardKind,
    action_count: Vec<u64>,
    total_reward: f64,
    trial_count: u64,
}

impl<S: RewardSource, P: Policy> Agent<S, P> {
    /// Bind `policy` to `source` with the deterministic default seed (0).
    pub fn new(source: S, policy: P) -> Result<Self> {
        Self::with_seed(source, policy, 0)
    }

    /// Bind with a fixed seed for action-selection randomness.
    pub fn with_seed(source: S, policy: P, seed: u64) -> Result<Self> {
        Self::with_rng(source, policy, StdRng::seed_from_u64(seed))
    }
}

impl<S: RewardSource, P: Policy, R: RngCore> Agent<S, P, R> {
    /// Bind with an explicit RNG.
    ///
    /// Fails when the source offers no actions, when source and policy
    /// disagree on the action count, or when a binary-only policy meets a
    /// source that does not declare [`RewardKind::Binary`].
    pub fn with_rng(source: S, policy: P, rng: R) -> Result<Self> {
        let num_actions = source.num_actions();
        if num_actions == 0 {
            return Err(AgentError::NoActions);
        }
        if policy.num_actions() != num_actions {
            return Err(AgentError::ActionCountMismatch {
                offered: num_actions,
                expected: policy.num_actions(),
            });
        }
        let reward_kind = source.reward_kind();
        if policy.requires_binary_rewards() && reward_kind != RewardKind::Binary {
            return Err(AgentError::NonBinarySource {
                strategy: policy.name(),
            });
        }
        tracing::debug!(
            strategy = policy.name(),
            num_actions,
            ?reward_kind,
            "agent bound to reward source"
        );
        Ok(Self {
            label: policy.name().to_string(),
            source,
            policy,
            rng,
            reward_kind,
            action_count: vec![0; num_actions],
            total_reward: 0.0,
            trial_count: 0,
        })
    }

    /// Override the label used to identify this agent in evaluations.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Run one trial. See the module docs for the exact sequence.
    ///
    /// Errors leave the agent's counters untouched:
    /// - [`AgentError::ActionOutOfRange`]: the policy chose an invalid index
    ///   (the source is never sampled).
    /// - [`AgentError::MalformedReward`]: the source returned a reward outside
    ///   its declared domain (the policy is never updated).
    pub fn act(&mut self) -> Result<f64> {
        let num_actions = self.action_count.len();
        let action = self.policy.choose_action(
            Pulls::new(self.trial_count, &self.action_count),
            &mut self.rng,
        );
        if action >= num_actions {
            return Err(AgentError::ActionOutOfRange {
                action,
                num_actions,
            });
        }

        let reward = self.source.sample(action);
        if !self.reward_kind.admits(reward) {
            return Err(AgentError::MalformedReward { action, reward });
        }

        self.total_reward += reward;
        self.trial_count += 1;
        self.action_count[action] += 1;

        self.policy.update_policy(
            action,
            reward,
            Pulls::new(self.trial_count, &self.action_count),
        );
        tracing::trace!(
            agent = %self.label,
            trial = self.trial_count,
            action,
            reward,
            "trial"
        );
        Ok(reward)
    }

    pub fn num_actions(&self) -> usize {
        self.action_count.len()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    pub fn trial_count(&self) -> u64 {
        self.trial_count
    }

    /// Mean reward per trial (0 before the first trial).
    pub fn mean_reward(&self) -> f64 {
        if self.trial_count == 0 {
            0.0
        } else {
            self.total_reward / self.trial_count as f64
        }
    }

    pub fn action_counts(&self) -> &[u64] {
        &self.action_count
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // Regret resets belong to the evaluator, never to the agent itself.
    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
