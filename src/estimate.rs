//! Sample-mean value estimates shared by the value-based strategies.

/// Index of the largest value; ties go to the lowest index.
///
/// NaN entries never win. Returns 0 for an empty or all-NaN slice so callers
/// that were sized with at least one action always get a valid index.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0usize;
    let mut best_v = f64::NEG_INFINITY;
    let mut seen = false;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if !seen || v > best_v {
            best = i;
            best_v = v;
            seen = true;
        }
    }
    best
}

/// Per-action running means, updated with the incremental rule
/// `q += (reward - q) / n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueEstimates {
    q: Vec<f64>,
}

impl ValueEstimates {
    /// `num_actions` estimates, all starting at `initial`.
    pub fn new(num_actions: usize, initial: f64) -> Self {
        Self {
            q: vec![initial; num_actions],
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.q
    }

    pub fn get(&self, action: usize) -> f64 {
        self.q[action]
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Greedy choice over the current estimates.
    pub fn best(&self) -> usize {
        argmax(&self.q)
    }

    /// Fold one observation into `action`'s mean. `count` is the number of
    /// selections of `action` *including* this one; the first observation
    /// replaces the initial value outright.
    pub fn observe(&mut self, action: usize, reward: f64, count: u64) {
        let n = count.max(1) as f64;
        let q = &mut self.q[action];
        *q += (reward - *q) / n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn argmax_breaks_ties_low() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0]), 0);
        assert_eq!(argmax(&[f64::NAN, -1.0, f64::NAN]), 1);
        assert_eq!(argmax(&[]), 0);
        assert_eq!(argmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]), 0);
    }

    #[test]
    fn first_observation_discards_optimistic_start() {
        let mut q = ValueEstimates::new(2, 5.0);
        q.observe(1, 0.25, 1);
        assert_eq!(q.get(1), 0.25);
        assert_eq!(q.get(0), 5.0);
        assert_eq!(q.best(), 0);
    }

    proptest! {
        #[test]
        fn incremental_mean_matches_arithmetic_mean(
            initial in -10.0f64..10.0,
            rewards in proptest::collection::vec(-100.0f64..100.0, 1..200),
        ) {
            let mut q = ValueEstimates::new(1, initial);
            for (i, &r) in rewards.iter().enumerate() {
                q.observe(0, r, (i + 1) as u64);
            }
            let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
            prop_assert!((q.get(0) - mean).abs() < 1e-9, "q={} mean={}", q.get(0), mean);
        }
    }
}
