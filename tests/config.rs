#![cfg(feature = "serde")]

mod common;

use armsim::{AgentError, ExperimentConfig, StrategyConfig};
use common::Bernoulli;

#[test]
fn experiment_config_reads_tagged_strategies() {
    let json = r#"{
        "trials": 50,
        "seed": 9,
        "strategies": [
            { "kind": "greedy", "initial_value": 5.0 },
            { "kind": "epsilon_greedy", "epsilon": 0.2 },
            { "kind": "ucb", "c": 1.5 },
            { "kind": "gradient", "alpha": 0.05 },
            { "kind": "thompson" },
            { "kind": "random" }
        ]
    }"#;
    let cfg: ExperimentConfig = serde_json::from_str(json).unwrap();
    assert_eq!(cfg.trials, 50);
    assert_eq!(cfg.strategies[2], StrategyConfig::Ucb { c: 1.5 });

    let out = cfg.run(|| Bernoulli::new(&[0.3, 0.7], 1)).unwrap();
    let labels: Vec<&str> = out.labels().collect();
    assert_eq!(
        labels,
        vec![
            "greedy(q0=5)",
            "epsilon_greedy(eps=0.2)",
            "ucb(c=1.5)",
            "gradient(alpha=0.05)",
            "thompson",
            "random"
        ]
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg: ExperimentConfig = serde_json::from_str(r#"{ "seed": 3 }"#).unwrap();
    assert_eq!(cfg.trials, 1_000);
    assert_eq!(cfg.strategies, StrategyConfig::standard_set());
}

#[test]
fn out_of_range_parameters_fail_before_any_trial() {
    let cfg: ExperimentConfig = serde_json::from_str(
        r#"{ "trials": 10, "strategies": [{ "kind": "epsilon_greedy", "epsilon": 1.5 }] }"#,
    )
    .unwrap();
    let err = cfg.run(|| Bernoulli::new(&[0.5], 0)).unwrap_err();
    assert!(matches!(err, AgentError::InvalidConfig(_)));
}

#[test]
fn traces_serialize_for_external_plotting() {
    let cfg = ExperimentConfig {
        trials: 3,
        seed: 0,
        strategies: vec![StrategyConfig::Random],
    };
    let out = cfg.run(|| Bernoulli::new(&[0.5, 0.5], 0)).unwrap();
    let v = serde_json::to_value(out.summaries()).unwrap();
    assert_eq!(v[0]["label"], "random");
    assert_eq!(v[0]["trials"], 3);
}
