//! `armsim`: seedable multi-armed bandit agents and a side-by-side evaluator.
//!
//! Designed for comparing exploration strategies on the classic single-state
//! bandit problem: a fixed set of actions, each paying a stochastic reward,
//! and an agent that must trade off trying actions (exploration) against
//! repeating the best-known one (exploitation).
//!
//! The environment is *yours*: implement [`RewardSource`] for whatever reward
//! process you want to study. `armsim` supplies the agents and the bookkeeping.
//!
//! **Goals:**
//! - **Deterministic by default**: every agent owns a seeded RNG; same seed +
//!   same source stream → same run. `StdRng` may change between `rand`
//!   releases, so pass a portable generator to [`Agent::with_rng`] when runs
//!   must reproduce across upgrades.
//! - **One contract for every strategy**: all variants implement [`Policy`] and
//!   run through the same [`Agent::act`] loop, so they benchmark
//!   interchangeably.
//! - **Structural numeric safety**: UCB never scores an untried action, softmax
//!   is max-shifted, so `ln(0)`, `x / 0`, and `exp` overflow cannot happen.
//!
//! **Strategies:**
//! - [`Greedy`]: argmax of sample means, optionally optimistic initial values.
//! - [`EpsilonGreedy`]: uniform exploration with probability ε.
//! - [`Ucb`]: explore every action once, then `q + c·sqrt(ln t / n)`.
//! - [`GradientBandit`]: softmax policy over preferences, reward baseline.
//! - [`ThompsonSampling`]: Beta-Bernoulli posterior sampling (binary sources only).
//! - [`UniformRandom`]: learn-nothing baseline.
//! - [`Strategy`] / [`StrategyConfig`]: tagged union + validated configuration.
//!
//! **Evaluation:**
//! - [`Evaluator`]: runs agents sequentially for `N` trials each, recording
//!   per-step reward and cumulative regret into [`RunTrace`]s.
//! - [`ExperimentConfig`]: one-call "build one agent per strategy and compare".
//! - [`SharedSource`]: lets several agents bind to one source; regret is reset
//!   between agents by the evaluator.
//!
//! **Non-goals:**
//! - No reward distributions: sources are external.
//! - No state beyond the single-state bandit (no TD learning, no function
//!   approximation, no contextual features).
//! - No persistence or plotting; enable feature `serde` to hand traces to
//!   tools that do.
//!
//! # Example
//!
//! ```rust
//! use armsim::{Agent, Evaluator, RewardKind, RewardSource, Strategy, StrategyConfig};
//!
//! // Deterministic two-armed source: arm 0 always pays, arm 1 never does.
//! #[derive(Default)]
//! struct Coin {
//!     regret: f64,
//! }
//!
//! impl RewardSource for Coin {
//!     fn num_actions(&self) -> usize {
//!         2
//!     }
//!     fn sample(&mut self, action: usize) -> f64 {
//!         if action == 0 {
//!             1.0
//!         } else {
//!             self.regret += 1.0;
//!             0.0
//!         }
//!     }
//!     fn cumulative_regret(&self) -> f64 {
//!         self.regret
//!     }
//!     fn reset_regret(&mut self) {
//!         self.regret = 0.0;
//!     }
//!     fn reward_kind(&self) -> RewardKind {
//!         RewardKind::Binary
//!     }
//! }
//!
//! let mut agents: Vec<Agent<Coin, Strategy>> = Vec::new();
//! for cfg in StrategyConfig::standard_set() {
//!     let agent = Agent::with_seed(Coin::default(), cfg.build(2)?, 7)?;
//!     agents.push(agent.with_label(cfg.label()));
//! }
//!
//! let out = Evaluator::new(200)?.run(agents)?;
//! for row in out.summaries() {
//!     assert_eq!(row.trials, 200);
//!     assert!(row.final_regret <= row.trials as f64);
//! }
//! # Ok::<(), armsim::AgentError>(())
//! ```

mod error;
pub use error::*;

mod source;
pub use source::*;

mod policy;
pub use policy::*;

mod alloc;
pub use alloc::*;

mod estimate;
pub use estimate::*;

mod greedy;
pub use greedy::*;

mod epsilon;
pub use epsilon::*;

mod ucb;
pub use ucb::*;

mod gradient;
pub use gradient::*;

mod thompson;
pub use thompson::*;

mod random;
pub use random::*;

mod strategy;
pub use strategy::*;

mod agent;
pub use agent::*;

mod evaluate;
pub use evaluate::*;

pub const ARMSIM_VERSION: &str = env!("CARGO_PKG_VERSION");
