use std::time::Duration;

/// Input file with one url per line.
pub const URLS_FILE: &str = "urls.txt";

/// Words excluded from keyword extraction, one per line.
pub const COMMON_WORDS_FILE: &str = "common_words.txt";

/// The table of urls and their keywords.
pub const KEYWORDS_FILE: &str = "keywords.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of keywords extracted per page.
    pub max_keywords: usize,
    /// A word is common if it occurs more often than this in the keyword
    /// table.
    pub common_word_threshold: usize,
    /// The user-agent used for requests.
    pub browser_user_agent: String,
    /// Timeout for requests, `None` waits as long as the transport does.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Default number of keywords per page.
    pub const DEFAULT_MAX_KEYWORDS: usize = 60;

    /// Default threshold for common words.
    pub const DEFAULT_COMMON_WORD_THRESHOLD: usize = 10;

    /// Default user agent for `pagewords`.
    #[inline]
    pub fn user_agent() -> String {
        format!("pagewords/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Convenience method to create a [`ConfigBuilder`]
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    /// Number of keywords extracted per page.
    max_keywords: Option<usize>,
    /// Threshold for common words.
    common_word_threshold: Option<usize>,
    /// The user-agent used for requests.
    browser_user_agent: Option<String>,
    /// Timeout for requests.
    request_timeout: Option<Duration>,
}

impl ConfigBuilder {
    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = Some(max_keywords);
        self
    }

    pub fn common_word_threshold(mut self, common_word_threshold: usize) -> Self {
        self.common_word_threshold = Some(common_word_threshold);
        self
    }

    pub fn browser_user_agent<T: ToString>(mut self, browser_user_agent: T) -> Self {
        self.browser_user_agent = Some(browser_user_agent.to_string());
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn build(self) -> Config {
        Config {
            max_keywords: self
                .max_keywords
                .unwrap_or(Config::DEFAULT_MAX_KEYWORDS),
            common_word_threshold: self
                .common_word_threshold
                .unwrap_or(Config::DEFAULT_COMMON_WORD_THRESHOLD),
            browser_user_agent: self
                .browser_user_agent
                .unwrap_or_else(Config::user_agent),
            request_timeout: self.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_keywords, 60);
        assert_eq!(config.common_word_threshold, 10);
        assert!(config.request_timeout.is_none());
        assert!(config.browser_user_agent.starts_with("pagewords/"));
    }

    #[test]
    fn builder_overrides() {
        let config = Config::builder()
            .max_keywords(5)
            .common_word_threshold(2)
            .browser_user_agent("test-agent")
            .request_timeout(Duration::from_secs(3))
            .build();
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.common_word_threshold, 2);
        assert_eq!(config.browser_user_agent, "test-agent");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }
}
