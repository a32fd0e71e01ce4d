//! Optimistic initial values as exploration: greedy with q0 = 0 vs q0 = 5 on a
//! Gaussian ten-armed testbed, reporting how often each picked the best arm.

mod common;

use armsim::{argmax, Agent, Greedy, RewardSource, Strategy};
use common::{init_tracing, Testbed};

fn main() -> Result<(), armsim::AgentError> {
    init_tracing();

    let trials = 1_000;
    let runs = 50u64;
    for q0 in [0.0, 5.0] {
        let mut optimal = 0u64;
        let mut regret = 0.0;
        for run in 0..runs {
            let testbed = Testbed::gaussian(10, run);
            let best = argmax(testbed.means());
            let greedy = Greedy::new(10, q0)?;
            let mut agent = Agent::with_seed(testbed, Strategy::from(greedy), run)?;
            for _ in 0..trials {
                agent.act()?;
            }
            optimal += agent.action_counts()[best];
            regret += agent.source().cumulative_regret();
        }
        println!(
            "q0={q0:<4} optimal-action rate={:.3} mean regret={:.1}",
            optimal as f64 / (runs * trials) as f64,
            regret / runs as f64
        );
    }
    Ok(())
}
