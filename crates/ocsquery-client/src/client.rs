//! OCS Inventory SOAP client

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use ocsquery_soap::{HttpTransport, SoapResponse, SoapTransport, decode_entities};

use crate::cursor::ComputerCursor;
use crate::error::{ClientError, Result};
use crate::record::{self, FORCE_LIST};
use crate::request::ComputerQuery;
use crate::server::ServerConfig;

/// SOAP operation fetching computer records
const GET_COMPUTERS: &str = "get_computers_V1";

/// Client for the OCS Inventory SOAP interface
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct OcsClient {
    transport: Arc<dyn SoapTransport>,
}

impl OcsClient {
    /// Create a client for a server config
    ///
    /// Binds an HTTP transport to the URLs derived from the config: the
    /// interface URL becomes the SOAP namespace, the endpoint URL (with any
    /// credentials embedded) receives the envelopes.
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` if the base URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use ocsquery_client::{OcsClient, ServerConfig};
    ///
    /// let client = OcsClient::new(ServerConfig::new("http://ocs.example.com/ocsinventory"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config: ServerConfig) -> Result<Self> {
        let namespace = config.interface_url()?;
        let endpoint = config.endpoint_url()?;
        let transport = HttpTransport::new(namespace.as_str(), endpoint, config.options())?;

        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client over an injected transport
    #[must_use]
    pub fn with_transport(transport: Arc<dyn SoapTransport>) -> Self {
        Self { transport }
    }

    /// Fetch one page of computers
    ///
    /// Builds the request body from the effective query parameters, performs
    /// one `get_computers_V1` round trip, and converts every returned
    /// fragment into a generic record. Record order is the service's; zero
    /// computers is an empty vector, not an error.
    ///
    /// # Errors
    /// `ClientError::Remote` for a SOAP fault (message entity-decoded),
    /// `ClientError::Transport` for network or envelope failures,
    /// `ClientError::Response` for payload that does not parse as XML.
    #[instrument(skip(self, query))]
    pub async fn get_computers(&self, query: &ComputerQuery) -> Result<Vec<Value>> {
        let body = query.to_request_xml();

        debug!(operation = GET_COMPUTERS, "querying inventory");

        let parts = match self.transport.call(GET_COMPUTERS, &body).await? {
            SoapResponse::Fault(fault) => {
                return Err(ClientError::Remote(decode_entities(&fault.string)));
            }
            SoapResponse::Payload(parts) => parts,
        };

        let mut computers = Vec::new();
        for part in &parts {
            collect_computers(part, &mut computers)?;
        }

        info!(count = computers.len(), "received computers");

        Ok(computers)
    }

    /// Iterate over all computers, fetching pages on demand
    #[must_use]
    pub fn computers(&self, query: ComputerQuery) -> ComputerCursor {
        ComputerCursor::new(self.clone(), query)
    }
}

/// Parse one payload part: the wrapping root is discarded and each inner
/// element becomes a record, with the section force-list applied.
fn collect_computers(part: &str, out: &mut Vec<Value>) -> Result<()> {
    let doc = roxmltree::Document::parse(part).map_err(|e| ClientError::Response(e.to_string()))?;

    for child in doc.root_element().children().filter(roxmltree::Node::is_element) {
        out.push(record::element_to_value(child, &FORCE_LIST));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = OcsClient::new(ServerConfig::new("http://localhost:8080/ocsinventory"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = OcsClient::new(ServerConfig::new("not a url"));
        assert!(matches!(client, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_collect_computers_discards_wrapper() {
        let mut out = Vec::new();
        collect_computers(
            "<COMPUTERS>\
             <COMPUTER><HARDWARE><NAME>alpha</NAME></HARDWARE></COMPUTER>\
             <COMPUTER><HARDWARE><NAME>beta</NAME></HARDWARE></COMPUTER>\
             </COMPUTERS>",
            &mut out,
        )
        .unwrap();

        assert_eq!(
            out,
            vec![
                json!({"HARDWARE": {"NAME": "alpha"}}),
                json!({"HARDWARE": {"NAME": "beta"}}),
            ]
        );
    }

    #[test]
    fn test_collect_computers_empty_wrapper() {
        let mut out = Vec::new();
        collect_computers("<COMPUTERS></COMPUTERS>", &mut out).unwrap();
        assert!(out.is_empty());
    }
}
