use hogsmeade::error::ConfigError;
use hogsmeade::logging;
use std::fs;

#[test]
fn test_logging_integration_config_fallback_reaches_log_file() {
    let path = std::env::temp_dir().join("hogsmeade_fallback_integration.log");
    fs::remove_file(&path).ok();

    logging::init(Some(&path)).expect("Failed to open log file");
    logging::config_fallback(&ConfigError::InvalidTickInterval(0));
    log::logger().flush();

    let contents = fs::read_to_string(&path).expect("Log file should exist");
    assert!(contents.contains("WARN"), "no warning in: {contents}");
    assert!(contents.contains("using defaults"));

    fs::remove_file(path).ok();
}
