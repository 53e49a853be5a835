use news_progress::config::{Config, ConfigError, LogFormat};

#[test]
fn test_test_config_uses_memory_database() {
    let config = Config::for_test();
    assert_eq!(config.database_url, "sqlite::memory:");
    assert!(!config.enable_request_logging);
}

#[test]
fn test_environment_overrides() {
    // The only test in this binary that touches the process environment.
    std::env::set_var("NEWS_PROGRESS_PORT", "9123");
    std::env::set_var("NEWS_PROGRESS_LOG_FORMAT", "json");
    std::env::set_var("NEWS_PROGRESS_CORS_ORIGINS", "http://a.test,http://b.test");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 9123);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.cors_origins.len(), 2);

    std::env::set_var("NEWS_PROGRESS_PORT", "not-a-port");
    assert!(matches!(Config::from_env(), Err(ConfigError::InvalidPort(_))));

    std::env::remove_var("NEWS_PROGRESS_PORT");
    std::env::remove_var("NEWS_PROGRESS_LOG_FORMAT");
    std::env::remove_var("NEWS_PROGRESS_CORS_ORIGINS");
}
