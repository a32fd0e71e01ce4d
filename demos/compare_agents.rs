//! Ten-armed Bernoulli comparison of every built-in strategy.
//!
//! All agents share one testbed; the evaluator resets its regret between
//! agents. Run with `RUST_LOG=armsim=debug` to see per-agent setup.

mod common;

use armsim::{ExperimentConfig, SharedSource, StrategyConfig};
use common::{init_tracing, Testbed};

fn main() -> Result<(), armsim::AgentError> {
    init_tracing();

    let testbed = SharedSource::new(Testbed::bernoulli(10, 2024));
    let means = testbed.with(|t| t.means().to_vec());
    eprintln!("arm means: {:.3?}", means);

    let mut cfg = ExperimentConfig::default();
    cfg.strategies.push(StrategyConfig::Random);

    let out = cfg.run(|| testbed.clone())?;

    println!(
        "{:<26} {:>8} {:>12} {:>10} {:>12}",
        "agent", "trials", "total", "mean", "regret"
    );
    for row in out.summaries() {
        println!(
            "{:<26} {:>8} {:>12.1} {:>10.4} {:>12.2}",
            row.label, row.trials, row.total_reward, row.mean_reward, row.final_regret
        );
    }
    if let Some(best) = out.best() {
        println!("\nbest: {}", best.label);
    }
    Ok(())
}
