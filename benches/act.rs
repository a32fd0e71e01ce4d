use armsim::{softmax, Agent, RewardKind, RewardSource, StrategyConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Cheap deterministic binary source so the bench measures the agent, not the environment.
struct Cycle {
    n: usize,
    t: u64,
    regret: f64,
}

impl RewardSource for Cycle {
    fn num_actions(&self) -> usize {
        self.n
    }
    fn sample(&mut self, action: usize) -> f64 {
        self.t = self.t.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let hit = (self.t >> 33) % (self.n as u64 + 1) <= action as u64;
        if hit {
            1.0
        } else {
            self.regret += 1.0;
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

fn bench_act(c: &mut Criterion) {
    let trials = 1_000usize;
    let mut group = c.benchmark_group("act_1000");
    for &n_arms in &[2usize, 10, 100] {
        let mut configs = StrategyConfig::standard_set();
        configs.push(StrategyConfig::Random);
        for cfg in configs {
            group.bench_with_input(BenchmarkId::new(cfg.label(), n_arms), &n_arms, |b, &n| {
                b.iter(|| {
                    let source = Cycle {
                        n,
                        t: 7,
                        regret: 0.0,
                    };
                    let strategy = cfg.build(n).expect("bench strategy config");
                    let mut agent =
                        Agent::with_seed(source, strategy, 0).expect("bench agent binding");
                    for _ in 0..trials {
                        black_box(agent.act().expect("bench trial"));
                    }
                    black_box(agent.total_reward());
                })
            });
        }
    }
    group.finish();
}

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");
    for &n in &[10usize, 100, 1000] {
        let prefs: Vec<f64> = (0..n).map(|i| ((i * 37) % 101) as f64 * 0.1).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| black_box(softmax(black_box(&prefs))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_act, bench_softmax);
criterion_main!(benches);
