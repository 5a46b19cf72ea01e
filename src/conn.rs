use crate::config::ClientConfig;
use crate::error::KmIndexError;
use serde::Serialize;
use serde_json::Value;
use url::Url;

pub(crate) const INFOS_ENDPOINT: &str = "kmindex/infos";
pub(crate) const QUERY_ENDPOINT: &str = "kmindex/query";

/// HTTP connection to a kmindex server.
///
/// The underlying `reqwest::Client` multiplexes concurrently outstanding
/// requests, so a single `Conn` serves both one-off calls and concurrent
/// batch submission.
#[derive(Debug, Clone)]
pub(crate) struct Conn {
    base: Url,
    client: reqwest::Client,
}

impl Conn {
    pub(crate) fn new(url: &str, port: u16, config: &ClientConfig) -> Result<Self, KmIndexError> {
        let addr = if !(url.starts_with("https://") || url.starts_with("http://")) {
            format!("http://{url}:{port}/")
        } else {
            format!("{url}:{port}/")
        };
        let base = Url::parse(&addr)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { base, client })
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) async fn get_json(&self, endpoint: &str) -> Result<Value, KmIndexError> {
        let url = self.base.join(endpoint)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json(
        &self,
        endpoint: &str,
        body: &impl Serialize,
    ) -> Result<Value, KmIndexError> {
        let url = self.base.join(endpoint)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
