use listkeeper::config::LoggingConfig;
use listkeeper::logger::{self, Logger};

#[test]
fn test_log_entries_are_timestamped() {
    let logger = Logger::new();
    logger.log("Test message".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
    // "[HH:MM:SS.mmm] message"
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].contains("third"));
    assert!(logs[2].contains("first"));
}

#[test]
fn test_clear_removes_all_entries() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_logger_clones_share_entries() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("shared".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("shared"));
}

#[test]
fn test_file_logging_disabled_is_noop() {
    let config = LoggingConfig { enabled: false };
    assert!(logger::init_file_logging(&config).is_ok());
}

#[test]
fn test_log_file_path_is_under_cache_dir() {
    let path = logger::log_file_path().unwrap();
    assert!(path.ends_with("listkeeper/listkeeper.log"));
}
