//! Error types for the OCS client

use thiserror::Error;

/// Errors that can occur when querying the inventory service
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL did not parse
    #[error("invalid server URL: {0}")]
    Configuration(#[from] url::ParseError),

    /// Base URL cannot carry embedded credentials
    #[error("URL cannot carry credentials: {0}")]
    Credentials(String),

    /// Transport-level failure
    #[error("transport error: {0}")]
    Transport(#[from] ocsquery_soap::TransportError),

    /// SOAP fault returned by the server; the message is entity-decoded
    #[error("server fault: {0}")]
    Remote(String),

    /// Response payload did not parse as XML
    #[error("invalid response payload: {0}")]
    Response(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
