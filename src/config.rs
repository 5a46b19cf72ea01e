use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration applied to every request issued by a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// per-call timeout covering connect, send and receive
    pub timeout: Duration,
    /// user agent presented to the server
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}
