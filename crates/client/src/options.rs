// ABOUTME: Configuration options for the docpage client.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Configuration options for the docpage client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
    /// How long a cached export body stays fresh.
    pub cache_ttl: Duration,
    /// How many export bodies a cache may hold.
    pub cache_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "docpage/0.1".to_string(),
            headers: HashMap::new(),
            http_client: None,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 32,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Set the freshness window for caches built from these options.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.opts.cache_ttl = ttl;
        self
    }

    /// Set the entry cap for caches built from these options.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.opts.cache_capacity = capacity;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}
