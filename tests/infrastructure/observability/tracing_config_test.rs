use parlance::infrastructure::observability::{TracingConfig, init_tracing};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_level_when_creating_config_then_filter_starts_with_level() {
    let config = TracingConfig::new("Test", true, "warn");

    assert!(config.json_format);
    assert_eq!(config.environment, "Test");
    assert!(config.default_filter.starts_with("warn,"));
    assert!(config.default_filter.contains("parlance=debug"));
}

#[test]
fn given_subscriber_installed_when_initializing_again_then_does_not_panic() {
    let config = TracingConfig::new("Test", false, "info");

    init_tracing(&config);
    init_tracing(&config);
}
