use thiserror::Error;

#[derive(Error, Debug)]
pub enum KmIndexError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Invalid server address {0}")]
    InvalidAddress(#[from] url::ParseError),
    #[error("Could not connect to kmindex server: {0}")]
    Connection(String),
    #[error("Transport failure {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server returned an empty response")]
    EmptyResponse,
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
}
