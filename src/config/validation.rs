use crate::config::types::Config;
use crate::ConfigError;

/// Validates a configuration after parsing
///
/// Rules:
/// - The fetch timeout must be non-zero.
/// - The output root directory must be non-empty.
/// - The crawler name must be non-empty (it goes into the User-Agent header).
///
/// A rate interval of 0 is deliberately allowed: it disables pacing, which
/// tests rely on.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch-timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.output.root_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output root-dir must not be empty".to_string(),
        ));
    }

    if config.user_agent.crawler_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name must not be empty".to_string(),
        ));
    }

    Ok(())
}
