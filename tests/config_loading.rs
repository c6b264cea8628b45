use std::path::Path;

use foothold::{FootPlacementEvaluator, FootholdConfig};

#[test]
fn loads_config_fixture() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = FootholdConfig::load(manifest_dir.join("tests/fixtures/config.yaml"))
        .expect("config should load");

    assert_eq!(config.robot.feet.reach.x, 0.6);
    assert_eq!(config.robot.feet.offset.y, 0.3);
    assert!(config.planner.unknown_space_untraversable);
    assert!(config.objectives.clearance.enable);

    let evaluator = FootPlacementEvaluator::new(&config);
    assert_eq!(evaluator.weights().max_cost(), 96.0);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = FootholdConfig::load("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, foothold::FootholdError::Io(_)));
}
