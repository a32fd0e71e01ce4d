//! The `Policy` capability shared by every strategy.
//!
//! A policy owns its estimate state (sample means, preferences, posterior
//! pseudo-counts) and nothing else. Trial bookkeeping lives in the
//! [`Agent`](crate::Agent), which hands each policy a [`Pulls`] view so that
//! "how many trials so far" means the same thing in selection and in update.
//!
//! Both methods are required: a strategy that forgets either one does not
//! compile.

use rand::RngCore;

/// Read-only view of an agent's trial record.
///
/// - In [`Policy::choose_action`], counts reflect completed trials only.
/// - In [`Policy::update_policy`], counts already include the current trial,
///   so `per_action[action] >= 1` and `total >= 1`.
#[derive(Debug, Clone, Copy)]
pub struct Pulls<'a> {
    /// Trials completed (including the current one during an update).
    pub total: u64,
    /// Selections per action; always sums to `total`.
    pub per_action: &'a [u64],
}

impl<'a> Pulls<'a> {
    pub fn new(total: u64, per_action: &'a [u64]) -> Self {
        Self { total, per_action }
    }

    /// Selections of `action` (0 for an unknown index).
    pub fn of(&self, action: usize) -> u64 {
        self.per_action.get(action).copied().unwrap_or(0)
    }

    /// First action (stable order) that has never been selected.
    pub fn first_untried(&self) -> Option<usize> {
        self.per_action.iter().position(|&n| n == 0)
    }
}

/// Common interface for single-state bandit strategies.
///
/// # Example
///
/// ```rust
/// use armsim::{EpsilonGreedy, Policy, Pulls};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut policy = EpsilonGreedy::new(2, 0.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let counts = [0, 0];
/// let a = policy.choose_action(Pulls::new(0, &counts), &mut rng);
/// assert_eq!(a, 0); // ties break toward the lowest index
///
/// let counts = [1, 0];
/// policy.update_policy(a, 1.0, Pulls::new(1, &counts));
/// assert_eq!(policy.estimates()[0], 1.0);
/// ```
pub trait Policy {
    /// Number of actions this policy was sized for.
    fn num_actions(&self) -> usize;

    /// Pick the next action; must return an index in `[0, num_actions)`.
    fn choose_action(&mut self, pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize;

    /// Fold the reward observed for `action` into the estimate state.
    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>);

    /// Whether this policy is only defined for `{0, 1}` rewards.
    fn requires_binary_rewards(&self) -> bool {
        false
    }

    /// Stable, log-friendly strategy name.
    fn name(&self) -> &'static str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn num_actions(&self) -> usize {
        (**self).num_actions()
    }
    fn choose_action(&mut self, pulls: Pulls<'_>, rng: &mut dyn RngCore) -> usize {
        (**self).choose_action(pulls, rng)
    }
    fn update_policy(&mut self, action: usize, reward: f64, pulls: Pulls<'_>) {
        (**self).update_policy(action, reward, pulls)
    }
    fn requires_binary_rewards(&self) -> bool {
        (**self).requires_binary_rewards()
    }
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
