#![allow(dead_code)]

use armsim::{RewardKind, RewardSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Install a `RUST_LOG`-driven subscriber (default `armsim=info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armsim=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// K-armed testbed with hidden per-arm means drawn at construction.
///
/// - `Bernoulli`: means uniform in `[0, 1]`, rewards in `{0, 1}`.
/// - `Gaussian`: means `~ N(0, 1)`, rewards `~ N(mean, 1)`.
pub struct Testbed {
    means: Vec<f64>,
    best: f64,
    bernoulli: bool,
    rng: StdRng,
    regret: f64,
}

impl Testbed {
    pub fn bernoulli(k: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let means: Vec<f64> = (0..k).map(|_| rng.random::<f64>()).collect();
        Self::with_means(means, true, rng)
    }

    pub fn gaussian(k: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let means: Vec<f64> = (0..k)
            .map(|_| Normal::new(0.0, 1.0).map(|n| n.sample(&mut rng)).unwrap_or(0.0))
            .collect();
        Self::with_means(means, false, rng)
    }

    fn with_means(means: Vec<f64>, bernoulli: bool, rng: StdRng) -> Self {
        let best = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            means,
            best,
            bernoulli,
            rng,
            regret: 0.0,
        }
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }
}

impl RewardSource for Testbed {
    fn num_actions(&self) -> usize {
        self.means.len()
    }

    fn sample(&mut self, action: usize) -> f64 {
        let mu = self.means[action];
        self.regret += self.best - mu;
        if self.bernoulli {
            if self.rng.random::<f64>() < mu {
                1.0
            } else {
                0.0
            }
        } else {
            Normal::new(mu, 1.0)
                .map(|n| n.sample(&mut self.rng))
                .unwrap_or(mu)
        }
    }

    fn cumulative_regret(&self) -> f64 {
        self.regret
    }

    fn reset_regret(&mut self) {
        self.regret = 0.0;
    }

    fn reward_kind(&self) -> RewardKind {
        if self.bernoulli {
            RewardKind::Binary
        } else {
            RewardKind::Real
        }
    }
}
