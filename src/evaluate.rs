//! Side-by-side evaluation of agents over a fixed trial budget.
//!
//! Agents run strictly one after another. Before each agent starts, the
//! evaluator zeroes that agent's source regret, so agents that share a
//! [`SharedSource`](crate::SharedSource) still get independent regret
//! trajectories. The agents are consumed; only their traces survive.

use std::collections::{BTreeMap, BTreeSet};

use rand::RngCore;

use crate::agent::Agent;
use crate::error::{AgentError, Result};
use crate::policy::Policy;
use crate::source::RewardSource;
use crate::strategy::StrategyConfig;

/// Per-step reward and running-regret series for one agent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunTrace {
    pub label: String,
    /// Reward returned by step `t`.
    pub rewards: Vec<f64>,
    /// Source's cumulative regret right after step `t`.
    pub regrets: Vec<f64>,
}

impl RunTrace {
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn mean_reward(&self) -> f64 {
        if self.rewards.is_empty() {
            0.0
        } else {
            self.total_reward() / self.rewards.len() as f64
        }
    }

    /// Regret at the end of the run (0 for an empty trace).
    pub fn final_regret(&self) -> f64 {
        self.regrets.last().copied().unwrap_or(0.0)
    }

    /// Running sum of rewards, one entry per step.
    pub fn cumulative_rewards(&self) -> Vec<f64> {
        self.rewards
            .iter()
            .scan(0.0, |acc, &r| {
                *acc += r;
                Some(*acc)
            })
            .collect()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            label: self.label.clone(),
            trials: self.len(),
            total_reward: self.total_reward(),
            mean_reward: self.mean_reward(),
            final_regret: self.final_regret(),
        }
    }
}

/// Compact, log-ready row for one agent's run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub label: String,
    pub trials: usize,
    pub total_reward: f64,
    pub mean_reward: f64,
    pub final_regret: f64,
}

/// Traces for every agent in an evaluation, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    traces: Vec<RunTrace>,
}

impl Evaluation {
    pub fn get(&self, label: &str) -> Option<&RunTrace> {
        self.traces.iter().find(|t| t.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.traces.iter().map(|t| t.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunTrace> {
        self.traces.iter()
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn summaries(&self) -> Vec<RunSummary> {
        self.traces.iter().map(RunTrace::summary).collect()
    }

    /// Label with the highest total reward (first in run order on ties).
    pub fn best(&self) -> Option<&RunTrace> {
        self.traces.iter().fold(None, |best: Option<&RunTrace>, t| match best {
            Some(b) if b.total_reward() >= t.total_reward() => Some(b),
            _ => Some(t),
        })
    }

    /// Keyed view, label → trace.
    pub fn into_map(self) -> BTreeMap<String, RunTrace> {
        self.traces
            .into_iter()
            .map(|t| (t.label.clone(), t))
            .collect()
    }
}

impl IntoIterator for Evaluation {
    type Item = RunTrace;
    type IntoIter = std::vec::IntoIter<RunTrace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.into_iter()
    }
}

/// Runs agents for a fixed number of trials each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    trials: usize,
}

impl Evaluator {
    /// `trials` must be at least 1.
    pub fn new(trials: usize) -> Result<Self> {
        if trials == 0 {
            return Err(AgentError::InvalidConfig(
                "evaluation needs at least one trial".to_string(),
            ));
        }
        Ok(Self { trials })
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run a single agent to completion and return its trace.
    ///
    /// The agent's source regret is reset first.
    pub fn run_agent<S: RewardSource, P: Policy, R: RngCore>(
        &self,
        mut agent: Agent<S, P, R>,
    ) -> Result<RunTrace> {
        agent.source_mut().reset_regret();

        let mut rewards = Vec::with_capacity(self.trials);
        let mut regrets = Vec::with_capacity(self.trials);
        for _ in 0..self.trials {
            rewards.push(agent.act()?);
            regrets.push(agent.source().cumulative_regret());
        }

        let trace = RunTrace {
            label: agent.label().to_string(),
            rewards,
            regrets,
        };
        tracing::info!(
            agent = %trace.label,
            trials = self.trials,
            total_reward = trace.total_reward(),
            final_regret = trace.final_regret(),
            "agent run complete"
        );
        Ok(trace)
    }

    /// Run every agent in order. Labels must be unique.
    pub fn run<S: RewardSource, P: Policy, R: RngCore>(
        &self,
        agents: Vec<Agent<S, P, R>>,
    ) -> Result<Evaluation> {
        let mut seen = BTreeSet::new();
        for a in &agents {
            if !seen.insert(a.label()) {
                return Err(AgentError::DuplicateLabel(a.label().to_string()));
            }
        }

        let mut traces = Vec::with_capacity(agents.len());
        for agent in agents {
            traces.push(self.run_agent(agent)?);
        }
        Ok(Evaluation { traces })
    }
}

/// Parameters of a whole comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperimentConfig {
    /// Trials per agent.
    pub trials: usize,
    /// Seed shared by every agent's action-selection RNG.
    pub seed: u64,
    pub strategies: Vec<StrategyConfig>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 1_000,
            seed: 0,
            strategies: StrategyConfig::standard_set(),
        }
    }
}

impl ExperimentConfig {
    /// One agent per configured strategy, each bound to a source from
    /// `make_source` and labelled by [`StrategyConfig::label`].
    pub fn build_agents<S, F>(&self, mut make_source: F) -> Result<Vec<Agent<S>>>
    where
        S: RewardSource,
        F: FnMut() -> S,
    {
        self.strategies
            .iter()
            .map(|cfg| {
                let source = make_source();
                let strategy = cfg.build(source.num_actions())?;
                Ok(Agent::with_seed(source, strategy, self.seed)?.with_label(cfg.label()))
            })
            .collect()
    }

    /// Build the agents and evaluate them.
    pub fn run<S, F>(&self, make_source: F) -> Result<Evaluation>
    where
        S: RewardSource,
        F: FnMut() -> S,
    {
        let evaluator = Evaluator::new(self.trials)?;
        evaluator.run(self.build_agents(make_source)?)
    }
}
