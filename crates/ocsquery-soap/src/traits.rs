//! SOAP transport trait

use async_trait::async_trait;

use crate::error::TransportError;
use crate::response::SoapResponse;

#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Invoke a remote operation with a single string argument.
    async fn call(&self, operation: &str, body: &str) -> Result<SoapResponse, TransportError>;

    fn transport_type(&self) -> &'static str;
}
