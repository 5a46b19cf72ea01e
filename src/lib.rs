//! A rust client for talking to a kmindex server over HTTP
//!
//! Ships the query, response, server and error submodules
//!
//! ## Connecting
//!
//! [`connect`] builds a client and eagerly fetches the server's index
//! metadata, so a handle you hold is known to have reached the server at
//! least once:
//!
//! ```rust,no_run
//! use kmindex_client_rs::connect;
//!
//! # async fn run() -> Result<(), kmindex_client_rs::KmIndexError> {
//! let client = connect("127.0.0.1", 8080).await?;
//! println!("available indexes: {}", client.infos());
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying
//!
//! A [`Query`] carries one or more sequences to search against one or more
//! indexes; a bare string is treated as a one element list:
//!
//! ```rust,no_run
//! use kmindex_client_rs::{connect, Query};
//!
//! # async fn run() -> Result<(), kmindex_client_rs::KmIndexError> {
//! let client = connect("127.0.0.1", 8080).await?;
//! let query = Query::new("Q1", "ACGTACGT", "myindex")?;
//! let response = client.submit(&query).await?;
//! println!("{}: {:?}", response.query_id(), response.results());
//! # Ok(())
//! # }
//! ```
//!
//! ## Batching
//!
//! A [`QueryBatch`] couples independent queries for concurrent submission.
//! All calls are launched together and the responses come back in batch
//! order; one failing query fails the whole batch:
//!
//! ```rust,no_run
//! use kmindex_client_rs::{connect, QueryBatch};
//!
//! # async fn run() -> Result<(), kmindex_client_rs::KmIndexError> {
//! let client = connect("127.0.0.1", 8080).await?;
//! let mut batch = QueryBatch::new();
//! batch.push("Q1", "ACGTACGT", "myindex")?;
//! batch.push("Q2", vec!["TTTTACGT", "GGGGACGT"], "myindex")?;
//! let responses = client.submit_batch(&batch).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod conn;
pub mod error;
pub mod query;
pub mod response;
pub mod server;

pub use config::ClientConfig;
pub use error::KmIndexError;
pub use query::{IntoList, Query, QueryBatch, QueryPayload, DEFAULT_RATIO, DEFAULT_Z};
pub use response::QueryResponse;
pub use server::{connect, KmIndexServer};
