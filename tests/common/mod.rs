#![allow(dead_code)]

use armsim::{RewardKind, RewardSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Bernoulli arms with known success probabilities.
///
/// Regret is pseudo-regret: `max(p) - p[action]` per pull.
#[derive(Debug, Clone)]
pub struct Bernoulli {
    probs: Vec<f64>,
    best: f64,
    rng: StdRng,
    regret: f64,
}

impl Bernoulli {
    pub fn new(probs: &[f64], seed: u64) -> Self {
        Self {
            probs: probs.to_vec(),
            best: probs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            rng: StdRng::seed_from_u64(seed),
            regret: 0.0,
        }
    }
}

impl RewardSource for Bernoulli {
    fn num_actions(&self) -> usize {
        self.probs.len()
    }
    fn sample(&mut self, action: usize) -> f64 {
        let p = self.probs[action];
        self.regret += self.best - p;
        if self.rng.random::<f64>() < p {
            1.0
        } else {
            0.0
        }
    }
    fn cumulative_regret(&self) -> f64 {
        self.regret
    }
    fn reset_regret(&mut self) {
        self.regret = 0.0;
    }
    fn reward_kind(&self) -> RewardKind {
        RewardKind::Binary
    }
}

/// Unit-variance Gaussian arms around known means.
#[derive(Debug, Clone)]
pub struct Gaussian {
    means: Vec<f64>,
    best: f64,
    rng: StdRng,
    regret: f64,
}

impl Gaussian {
    pub fn new(means: &[f64], seed: u64) -> Self {
        Self {
            means: means.to_vec(),
            best: means.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            rng: StdRng::seed_from_u64(seed),
            regret: 0.0,
        }
    }
}

impl RewardSource for Gaussian {
    fn num_actions(&self) -> usize {
        self.means.len()
    }
    fn sample(&mut self, action: usize) -> f64 {
        let mu = self.means[action];
        self.regret += self.best - mu;
        match Normal::new(mu, 1.0) {
            Ok(n) => n.sample(&mut self.rng),
            Err(_) => mu,
        }
    }
    fn cumulative_regret(&self) -> f64 {
        self.regret
    }
    fn reset_regret(&mut self) {
        self.regret = 0.0;
    }
}

/// Fixed reward per action; binary when every reward is 0 or 1.
#[derive(Debug, Clone)]
pub struct Scripted {
    rewards: Vec<f64>,
    best: f64,
    regret: f64,
    pub history: Vec<usize>,
}

impl Scripted {
    pub fn new(rewards: &[f64]) -> Self {
        Self {
            rewards: rewards.to_vec(),
            best: rewards.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            regret: 0.0,
            history: Vec::new(),
        }
    }
}

impl RewardSource for Scripted {
    fn num_actions(&self) -> usize {
        self.rewards.len()
    }
    fn sample(&mut self, action: usize) -> f64 {
        self.history.push(action);
        self.regret += self.best - self.rewards[action];
        self.rewards[action]
    }
    fn cumulative_regret(&self) -> f64 {
        self.regret
    }
    fn reset_regret(&mut self) {
        self.regret = 0.0;
    }
    fn reward_kind(&self) -> RewardKind {
        if self.rewards.iter().all(|&r| r == 0.0 || r == 1.0) {
            RewardKind::Binary
        } else {
            RewardKind::Real
        }
    }
}

/// Wraps a source and logs every `(action, reward)` it hands out.
#[derive(Debug, Clone)]
pub struct Recording<S> {
    inner: S,
    pub log: Vec<(usize, f64)>,
}

impl<S: RewardSource> Recording<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Rewards observed for `action`, in order.
    pub fn rewards_for(&self, action: usize) -> Vec<f64> {
        self.log
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|&(_, r)| r)
            .collect()
    }
}

impl<S: RewardSource> RewardSource for Recording<S> {
    fn num_actions(&self) -> usize {
        self.inner.num_actions()
    }
    fn sample(&mut self, action: usize) -> f64 {
        let r = self.inner.sample(action);
        self.log.push((action, r));
        r
    }
    fn cumulative_regret(&self) -> f64 {
        self.inner.cumulative_regret()
    }
    fn reset_regret(&mut self) {
        self.inner.reset_regret()
    }
    fn reward_kind(&self) -> RewardKind {
        self.inner.reward_kind()
    }
}
