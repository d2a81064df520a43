//! Error types for ocsquery-soap

use thiserror::Error;

/// Errors that can occur in the SOAP transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status and no fault envelope
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    /// Response did not parse as a SOAP envelope
    #[error("malformed SOAP envelope: {0}")]
    Envelope(String),

    /// Envelope parsed but carried no body or response element
    #[error("missing response element: {0}")]
    MissingResponse(String),
}
