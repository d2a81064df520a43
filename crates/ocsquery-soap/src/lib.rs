//! ocsquery-soap: SOAP transport for the OCS Inventory interface
//!
//! Provides the [`SoapTransport`] trait the inventory client talks through,
//! plus the default HTTP implementation posting SOAP 1.1 envelopes with
//! reqwest.
//!
//! # Examples
//!
//! ```no_run
//! use ocsquery_soap::{HttpTransport, SoapResponse, SoapTransport, TransportOptions};
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = Url::parse("http://ocs.example.com/ocsinventory/ocsinterface")?;
//! let transport = HttpTransport::new(
//!     "http://ocs.example.com/ocsinventory/Apache/Ocsinventory/Interface",
//!     endpoint,
//!     &TransportOptions::default(),
//! )?;
//!
//! match transport.call("get_computers_V1", "<REQUEST></REQUEST>").await? {
//!     SoapResponse::Payload(parts) => println!("{} parts", parts.len()),
//!     SoapResponse::Fault(fault) => eprintln!("fault: {}", fault.string),
//! }
//! # Ok(())
//! # }
//! ```

pub mod entities;
pub mod envelope;
pub mod error;
pub mod http;
pub mod response;
pub mod traits;

pub use entities::decode_entities;
pub use error::TransportError;
pub use http::{HttpTransport, TransportOptions};
pub use response::{SoapFault, SoapResponse};
pub use traits::SoapTransport;
