//! Response types for SOAP calls

/// Fault reported by the remote service
#[derive(Debug, Clone)]
pub struct SoapFault {
    /// Fault code, e.g. `SOAP-ENV:Server`
    pub code: String,
    /// Human-readable fault string, as it appeared in the envelope
    pub string: String,
}

/// Outcome of a completed SOAP round trip
///
/// A round trip that reaches the service ends in either the operation's
/// payload or a fault; transport failures are errors, not responses.
#[derive(Debug, Clone)]
pub enum SoapResponse {
    /// Ordered XML fragments returned by the operation
    Payload(Vec<String>),
    /// Server-side fault
    Fault(SoapFault),
}

impl SoapResponse {
    /// Check if the response is a fault
    #[must_use]
    pub fn is_fault(&self) -> bool {
        matches!(self, SoapResponse::Fault(_))
    }
}
