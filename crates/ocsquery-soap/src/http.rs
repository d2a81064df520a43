//! HTTP SOAP transport using reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use url::Url;

use crate::envelope;
use crate::error::TransportError;
use crate::response::SoapResponse;
use crate::traits::SoapTransport;

/// Options for the HTTP transport
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Overall request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// SOAP transport over HTTP
///
/// Posts SOAP 1.1 envelopes to a fixed endpoint, with operations namespaced
/// by the service identifier URI.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    namespace: String,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport bound to a namespace URI and an endpoint URL
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        namespace: impl Into<String>,
        endpoint: Url,
        options: &TransportOptions,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            namespace: namespace.into(),
            endpoint,
        })
    }
}

#[async_trait]
impl SoapTransport for HttpTransport {
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    async fn call(&self, operation: &str, body: &str) -> Result<SoapResponse, TransportError> {
        let request = envelope::build_request(&self.namespace, operation, body);
        let action = format!("\"{}#{}\"", self.namespace, operation);

        debug!("sending SOAP request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", action)
            .body(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // SOAP 1.1 faults ride on HTTP 500, so the envelope is tried first.
        match envelope::parse_response(&text) {
            Ok(parsed) => {
                if let SoapResponse::Fault(fault) = &parsed {
                    error!(code = %fault.code, "SOAP fault");
                }
                Ok(parsed)
            }
            Err(_) if !status.is_success() => Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            }),
            Err(e) => Err(e),
        }
    }

    fn transport_type(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let endpoint = Url::parse("http://localhost:8080/ocsinterface").unwrap();
        let transport =
            HttpTransport::new("http://localhost:8080/Interface", endpoint, &TransportOptions::default());

        assert!(transport.is_ok());
        assert_eq!(transport.unwrap().transport_type(), "http");
    }

    #[test]
    fn test_default_options() {
        let options = TransportOptions::default();

        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
    }
}
