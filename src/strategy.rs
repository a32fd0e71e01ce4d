//! Tagged union over the built-in strategies.
//!
//! [`Strategy`] lets heterogeneous agents share one concrete type, so an
//! evaluation over "one of each" is a plain `Vec<Agent<S>>`. Custom policies
//! can still be used directly through [`Agent<S, P>`](crate::Agent).

use rand::RngCore;

use crate::epsilon::EpsilonGreedy;
use crate::error::Result;
use crate::gradient::GradientBandit;
use crate::greedy::Greedy;
use crate::policy::{Policy, Pulls};
use crate::random::UniformRandom;
use crate::thompson::ThompsonSampling;
use crate::ucb::Ucb;

pub const DEFAULT_GREEDY_INITIAL: f64 = 1.0;
pub const DEFAULT_EPSILON: f64 = 0.1;
pub const DEFAULT_UCB_C: f64 = 2.0;
pub const DEFAULT_GRADIENT_ALPHA: f64 = 0.1;

/// Construction parameters for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrategyConfig {
    Greedy { initial_value: f64 },
    EpsilonGreedy { epsilon: f64 },
    Ucb { c: f64 },
    Gradient { alpha: f64 },
    Thompson,
    Random,
}

impl StrategyConfig {
    /// The five learning strategies with their default parameters.
    pub fn standard_set() -> Vec<StrategyConfig> {
        vec![
            StrategyConfig::Greedy {
                initial_value: DEFAULT_GREEDY_INITIAL,
            },
            StrategyConfig::EpsilonGreedy {
                epsilon: DEFAULT_EPSILON,
            },
            StrategyConfig::Ucb { c: DEFAULT_UCB_C },
            StrategyConfig::Gradient {
                alpha: DEFAULT_GRADIENT_ALPHA,
            },
            StrategyConfig::Thompson,
        ]
    }

    /// Display label including parameters, e.g. `"ucb(c=2)"`.
    pub fn label(&self) -> String {
        match *self {
            StrategyConfig::Greedy { initial_value } => format!("greedy(q0={initial_value})"),
            StrategyConfig::EpsilonGreedy { epsilon } => format!("epsilon_greedy(eps={epsilon})"),
            StrategyConfig::Ucb { c } => format!("ucb(c={c})"),
            StrategyConfig::Gradient { alpha } => format!("gradient(alpha={alpha})"),
            StrategyConfig::Thompson => "thompson".to_string(),
            StrategyConfig::Random => "random".to_string(),
        }
    }

    /// Validate the parameters and size a strategy for `num_actions`.
    pub fn build(&self, num_actions: usize) -> Result<Strategy> {
        Ok(match *self {
            StrategyConfig::Greedy { initial_value } => {
                Strategy::Greedy(Greedy::new(num_actions, initial_value)?)
            }
            StrategyConfig::EpsilonGreedy { epsilon } => {
                Strategy::EpsilonGreedy(EpsilonGreedy::new(num_actions, epsilon)?)
            }
            StrategyConfig::Ucb { c } => Strategy::Ucb(Ucb::new(num_actions, c)?),
            StrategyConfig::Gradient { alpha } => {
                Strategy::Gradient(GradientBandit::new(num_actions, alpha)?)
            }
            StrategyConfig::Thompson => Strategy::Thompson(ThompsonSampling::new(num_actions)?),
            StrategyConfig::Random => Strategy::Random(UniformRandom::new(num_actions)?),
        })
    }
}

/// One of the built-in strategies.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Greedy(Greedy),
    EpsilonGreedy(EpsilonGreedy),
    Ucb(Ucb),
    Gradient(GradientBandit),
    Thompson(ThompsonSampling),
    Random(UniformRandom),
}

impl Strategy {
    fn inner(&self) -> &dyn Policy {
        match self {
            Strategy::Greedy(p) => p,
            Strategy::EpsilonGreedy(p) => p,
            Strategy::Ucb(p) => p,
            Strategy::Gradient(p) => p,
            Strategy::Thompson(p) => p,
            Strategy::Random(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Policy {
        match self {
            Strategy::Greedy(p) => p,
            Strategy::EpsilonGreedy(p) => p,
            Strategy::Ucb(p) => p,
            Strategy::Gradient(p) => p,
            Strategy::Thompson(p) => p,
            Strategy::Random(p) => p,
        }
    }

    /// Sample-mean estimates, for the value-based strategies.
    pub fn estimates(&self) -> Option<&[f64]> {
        match self {
            Strategy::Greedy(p) => Some(p.estimates()),
            Strategy::EpsilonGreedy(p) => Some(p.estimates()),
            Strategy::Ucb(p) => Some(p.estimates()),
            _ => None,
        }
    }
}

impl Policy for Strategy {
    fn num_actions(&self) -> usize {
        self.inner().num_actions()
    }

    fn choose_action(&mut self, pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        self.inner_mut().choose_action(pulls, rng)
    }

    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        self.inner_mut().update_policy(action, reward, pulls)
    }

    fn requires_binary_rewards(&self) -> bool {
        self.inner().requires_binary_rewards()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}

macro_rules! impl_from_policy {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Strategy {
                fn from(p: $ty) -> Self {
                    Strategy::$variant(p)
                }
            }
        )*
    };
}

impl_from_policy! {
    Greedy => Greedy,
    EpsilonGreedy => EpsilonGreedy,
    Ucb => Ucb,
    Gradient => GradientBandit,
    Thompson => ThompsonSampling,
    Random => UniformRandom,
}
