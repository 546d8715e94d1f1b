use sqlchat::infrastructure::observability::TracingConfig;
use sqlchat::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_level_when_building_config_then_directives_cover_crate_and_http() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::new(Environment::Prod, &logging);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
    assert_eq!(
        config.default_directives,
        "debug,sqlchat=debug,tower_http=debug"
    );
}
