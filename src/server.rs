use crate::config::ClientConfig;
use crate::conn::{Conn, INFOS_ENDPOINT, QUERY_ENDPOINT};
use crate::error::KmIndexError;
use crate::query::{Query, QueryBatch};
use crate::response::QueryResponse;
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info};

/// connect to a kmindex server at `url:port`
pub async fn connect(url: &str, port: u16) -> Result<KmIndexServer, KmIndexError> {
    KmIndexServer::connect(url, port).await
}

/// Client handle to a remote kmindex server.
///
/// Connecting eagerly fetches and caches the server's index metadata, so a
/// successfully constructed handle is known to be able to reach the server.
/// The handle is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct KmIndexServer {
    conn: Conn,
    infos: Value,
}

impl KmIndexServer {
    /// connect with the default transport configuration
    pub async fn connect(url: &str, port: u16) -> Result<Self, KmIndexError> {
        Self::connect_with_config(url, port, ClientConfig::default()).await
    }

    /// Connects to `url:port` and caches the decoded body of
    /// `GET kmindex/infos`. A bare host is assumed to speak plain http.
    ///
    /// Fails with [`KmIndexError::Connection`] when the metadata call cannot
    /// complete, whether from a transport failure, a non-2xx status or a
    /// non-JSON body.
    pub async fn connect_with_config(
        url: &str,
        port: u16,
        config: ClientConfig,
    ) -> Result<Self, KmIndexError> {
        let conn = Conn::new(url, port, &config)?;
        let infos = conn
            .get_json(INFOS_ENDPOINT)
            .await
            .map_err(|err| KmIndexError::Connection(err.to_string()))?;
        info!(server = %conn.base(), "connected to kmindex server");
        Ok(Self { conn, infos })
    }

    /// server metadata fetched once at connect time, exposed verbatim
    pub fn infos(&self) -> &Value {
        &self.infos
    }

    /// Submits a single query and parses its response.
    pub async fn submit(&self, query: &Query) -> Result<QueryResponse, KmIndexError> {
        debug!(id = query.id(), "submitting query");
        let raw = self.conn.post_json(QUERY_ENDPOINT, &query.payload()).await?;
        QueryResponse::from_raw(raw)
    }

    /// Submits every query in the batch concurrently and returns their
    /// responses in batch iteration order, regardless of the order in which
    /// the underlying calls complete.
    ///
    /// Failure is all-or-nothing: the first failing query aborts the whole
    /// batch, the remaining in-flight calls are dropped and no partial
    /// results are returned.
    pub async fn submit_batch(
        &self,
        batch: &QueryBatch,
    ) -> Result<Vec<QueryResponse>, KmIndexError> {
        debug!(queries = batch.len(), "submitting batch");
        try_join_all(batch.iter().map(|query| self.submit(query))).await
    }
}
