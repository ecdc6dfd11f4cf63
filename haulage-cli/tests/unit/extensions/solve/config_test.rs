use super::*;
use crate::helpers::*;
use std::fs::File;

#[test]
fn can_read_full_config() {
    let file = File::open(FULL_CONFIG_PATH).expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let logging = config.telemetry.expect("no telemetry config").logging.expect("no logging config");
    assert!(logging.enabled);
    assert_eq!(logging.prefix.as_deref(), Some("[haulage] "));
    let limits = config.limits.expect("no limits config");
    assert_eq!(limits.max_capacity, Some(1000.));
    assert_eq!(limits.max_table_size, Some(100_000));
}

#[test]
fn can_read_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert!(config.telemetry.is_none());
    assert_eq!(create_limits(&config), ValidationLimits::default());
}

#[test]
fn can_return_error_on_malformed_config() {
    let result = read_config(BufReader::new(r#"{ "limits": { "maxCapacity": "big" } }"#.as_bytes()));

    assert!(result.expect_err("should fail").to_string().starts_with("cannot deserialize config"));
}

#[test]
fn can_create_limits_with_partial_values() {
    let config =
        Config { limits: Some(LimitsConfig { max_capacity: Some(10.), max_table_size: None }), ..Config::default() };

    let limits = create_limits(&config);

    assert_eq!(limits, ValidationLimits { max_capacity: 10., ..ValidationLimits::default() });
}

#[test]
fn can_enable_logging_keeping_prefix() {
    let config = Config {
        telemetry: Some(TelemetryConfig {
            logging: Some(LoggingConfig { enabled: false, prefix: Some("> ".to_string()) }),
        }),
        ..Config::default()
    };

    let logging = config.with_logging().telemetry.and_then(|telemetry| telemetry.logging).expect("no logging");

    assert!(logging.enabled);
    assert_eq!(logging.prefix.as_deref(), Some("> "));
}
