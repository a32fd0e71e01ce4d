//! Error taxonomy for agents and evaluation runs.
//!
//! Every variant is fatal: configuration errors surface at construction, before
//! any trial runs, and contract violations surface from the trial that caused
//! them. Nothing here is retried.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    /// A strategy or evaluator parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A source or policy was built with zero actions.
    #[error("a bandit needs at least one action")]
    NoActions,

    /// The policy was sized for a different number of actions than its source offers.
    #[error("source offers {offered} actions but policy was built for {expected}")]
    ActionCountMismatch { offered: usize, expected: usize },

    /// A policy chose an index outside `[0, num_actions)`.
    #[error("action {action} out of range for {num_actions} actions")]
    ActionOutOfRange { action: usize, num_actions: usize },

    /// The source returned a reward that violates its declared reward domain.
    #[error("source returned malformed reward {reward} for action {action}")]
    MalformedReward { action: usize, reward: f64 },

    /// A binary-reward strategy was bound to a real-valued source.
    #[error("strategy `{strategy}` requires a binary reward source")]
    NonBinarySource { strategy: &'static str },

    /// Two agents in one evaluation share a label.
    #[error("duplicate agent label `{0}`")]
    DuplicateLabel(String),
}
