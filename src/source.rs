//! The reward-source contract consumed by agents.
//!
//! A source is the environment side of a bandit: a fixed set of actions, each
//! yielding stochastic rewards, plus a running regret accumulator. This crate
//! never implements a reward distribution; it only consumes this trait.
//!
//! Sources own their own randomness. An agent's RNG drives *action selection*
//! only, so swapping strategies never perturbs the reward stream a seeded
//! source produces.

use std::cell::RefCell;
use std::rc::Rc;

/// The reward domain a source promises for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardKind {
    /// Every sample is exactly `0.0` (failure) or `1.0` (success).
    Binary,
    /// Any finite real value.
    #[default]
    Real,
}

impl RewardKind {
    /// Whether `reward` is a legal sample under this domain.
    pub fn admits(self, reward: f64) -> bool {
        match self {
            RewardKind::Binary => reward == 0.0 || reward == 1.0,
            RewardKind::Real => reward.is_finite(),
        }
    }
}

/// A stochastic multi-armed environment.
///
/// Implementations must keep `num_actions` fixed and must not reset their
/// reward distributions in `reset_regret`.
pub trait RewardSource {
    /// Number of available actions (at least 1).
    fn num_actions(&self) -> usize;

    /// Draw one reward for `action`, which is always in `[0, num_actions)`.
    fn sample(&mut self, action: usize) -> f64;

    /// Total regret accumulated since the last reset.
    fn cumulative_regret(&self) -> f64;

    /// Zero the regret accumulator.
    fn reset_regret(&mut self);

    /// The reward domain `sample` draws from.
    fn reward_kind(&self) -> RewardKind {
        RewardKind::Real
    }
}

impl<S: RewardSource + ?Sized> RewardSource for &mut S {
    fn num_actions(&self) -> usize {
        (**self).num_actions()
    }
    fn sample(&mut self, action: usize) -> f64 {
        (**self).sample(action)
    }
    fn cumulative_regret(&self) -> f64 {
        (**self).cumulative_regret()
    }
    fn reset_regret(&mut self) {
        (**self).reset_regret()
    }
    fn reward_kind(&self) -> RewardKind {
        (**self).reward_kind()
    }
}

impl<S: RewardSource + ?Sized> RewardSource for Box<S> {
    fn num_actions(&self) -> usize {
        (**self).num_actions()
    }
    fn sample(&mut self, action: usize) -> f64 {
        (**self).sample(action)
    }
    fn cumulative_regret(&self) -> f64 {
        (**self).cumulative_regret()
    }
    fn reset_regret(&mut self) {
        (**self).reset_regret()
    }
    fn reward_kind(&self) -> RewardKind {
        (**self).reward_kind()
    }
}

/// A single-threaded handle that lets several agents bind to one source.
///
/// Clones share the same underlying source, including its regret
/// accumulator. [`Evaluator`](crate::Evaluator) resets that accumulator
/// before each agent's run, so agents sharing a handle still get independent
/// regret trajectories.
#[derive(Debug, Default)]
pub struct SharedSource<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Clone for SharedSource<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: RewardSource> SharedSource<S> {
    pub fn new(source: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(source)),
        }
    }

    /// Inspect the underlying source.
    pub fn with<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.inner.borrow())
    }

    /// Number of live handles to this source.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<S: RewardSource> RewardSource for SharedSource<S> {
    fn num_actions(&self) -> usize {
        self.inner.borrow().num_actions()
    }
    fn sample(&mut self, action: usize) -> f64 {
        self.inner.borrow_mut().sample(action)
    }
    fn cumulative_regret(&self) -> f64 {
        self.inner.borrow().cumulative_regret()
    }
    fn reset_regret(&mut self) {
        self.inner.borrow_mut().reset_regret()
    }
    fn reward_kind(&self) -> RewardKind {
        self.inner.borrow().reward_kind()
    }
}
