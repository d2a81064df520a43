//! ocsquery-client: OCS Inventory query client
//!
//! Queries computers from an OCS Inventory server over its SOAP interface
//! and normalizes the per-computer XML into generic [`serde_json::Value`]
//! records.
//!
//! # Examples
//!
//! ```no_run
//! use ocsquery_client::{ComputerQuery, OcsClient, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::new("http://ocs.example.com/ocsinventory")
//!     .with_credentials("soap", "secret");
//! let client = OcsClient::new(config)?;
//!
//! // One page
//! let computers = client.get_computers(&ComputerQuery::new()).await?;
//! println!("{} computers", computers.len());
//!
//! // Page through everything
//! let mut cursor = client.computers(ComputerQuery::new());
//! while let Some(computer) = cursor.next().await? {
//!     println!("{}", computer["HARDWARE"]["NAME"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod cursor;
pub mod error;
pub mod record;
pub mod request;
pub mod server;

pub use client::OcsClient;
pub use cursor::ComputerCursor;
pub use error::{ClientError, Result};
pub use request::ComputerQuery;
pub use server::ServerConfig;
