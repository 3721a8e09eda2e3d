use checker_demo::utils::validation::Validate;
use checker_demo::{BaseChecker, Checker, CliConfig, DemoEngine, MemorySink};
use clap::Parser;

#[test]
fn test_end_to_end_demo_sequence() {
    let config = CliConfig::parse_from(["checker-demo"]);
    assert!(config.validate().is_ok());

    let engine = DemoEngine::new(config);
    let sink = engine.run(MemorySink::new()).unwrap();

    assert_eq!(
        sink.lines(),
        [
            "MESSAGE: Create the object",
            "Number 1: 4, Number 2:5, sum: 9",
        ]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = DemoEngine::new(CliConfig::parse_from(["checker-demo"]))
        .run(MemorySink::new())
        .unwrap();
    let second = DemoEngine::new(CliConfig::parse_from(["checker-demo"]))
        .run(MemorySink::new())
        .unwrap();

    assert_eq!(first.lines(), second.lines());
}

#[test]
fn test_custom_message_flows_through() {
    let config = CliConfig::parse_from(["checker-demo", "--message", "hello"]);
    let sink = DemoEngine::new(config).run(MemorySink::new()).unwrap();

    assert_eq!(sink.lines()[0], "MESSAGE: hello");
}

#[test]
fn test_add_override_beats_base_default() {
    struct Plain;
    impl BaseChecker for Plain {}

    assert_eq!(Plain.add(), 0);
    assert_eq!(Plain.base_add(5, 4), 9);

    let checker = Checker::new(MemorySink::new(), "hi").unwrap();
    assert_eq!(checker.add(), 11);
    assert_eq!(checker.base_add(5, 4), 9);
}
