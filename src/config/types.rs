use serde::Deserialize;

/// Main configuration structure for Kumo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Minimum time between consecutive fetches (milliseconds)
    #[serde(rename = "rate-interval-millis", default = "default_rate_interval")]
    pub rate_interval_millis: u64,

    /// Per-fetch timeout (seconds)
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Optional overall crawl deadline (seconds); unset means no deadline
    #[serde(rename = "crawl-deadline-secs", default)]
    pub crawl_deadline_secs: Option<u64>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory for stored content
    #[serde(rename = "root-dir", default = "default_root_dir")]
    pub root_dir: String,
}

fn default_rate_interval() -> u64 {
    1000
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_crawler_name() -> String {
    "Kumo".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "http://example.com/bot".to_string()
}

fn default_root_dir() -> String {
    "web_content".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            rate_interval_millis: default_rate_interval(),
            fetch_timeout_secs: default_fetch_timeout(),
            crawl_deadline_secs: None,
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the identifying user-agent string sent with every request
    ///
    /// Format: `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.crawler.rate_interval_millis, 1000);
        assert_eq!(config.crawler.fetch_timeout_secs, 30);
        assert!(config.crawler.crawl_deadline_secs.is_none());
        assert_eq!(config.output.root_dir, "web_content");
    }

    #[test]
    fn test_user_agent_header_value() {
        let ua = UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/bot".to_string(),
        };
        assert_eq!(ua.header_value(), "TestBot/1.0 (+https://example.com/bot)");
    }
}
