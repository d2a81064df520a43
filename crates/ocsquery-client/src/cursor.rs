//! Paging cursor over computer records

use std::collections::VecDeque;

use serde_json::Value;
use tracing::debug;

use crate::client::OcsClient;
use crate::error::Result;
use crate::request::ComputerQuery;

/// Cursor yielding one computer per call, fetching pages on demand
///
/// Holds a buffer of not-yet-yielded records and a page-offset counter. The
/// counter advances by one per fetch, whatever the page size; that is the
/// server's paging contract. Consumption is sequential through `&mut self`.
pub struct ComputerCursor {
    client: OcsClient,
    query: ComputerQuery,
    buffer: VecDeque<Value>,
    offset: u64,
    exhausted: bool,
}

impl ComputerCursor {
    pub(crate) fn new(client: OcsClient, query: ComputerQuery) -> Self {
        Self {
            client,
            query,
            buffer: VecDeque::new(),
            offset: 0,
            exhausted: false,
        }
    }

    /// Yield the next computer record
    ///
    /// Returns `Ok(None)` once the server has no more records. A failed page
    /// fetch surfaces as the error it is, never as end of data, and leaves
    /// the cursor where it was.
    ///
    /// # Errors
    /// Propagates any `get_computers` error from the underlying page fetch.
    pub async fn next(&mut self) -> Result<Option<Value>> {
        if self.exhausted {
            return Ok(None);
        }

        if self.buffer.is_empty() {
            let query = self.query.clone().offset(self.offset);
            let page = self.client.get_computers(&query).await?;

            debug!(offset = self.offset, count = page.len(), "fetched page");
            self.offset += 1;

            if page.is_empty() {
                self.exhausted = true;
                return Ok(None);
            }
            self.buffer.extend(page);
        }

        Ok(self.buffer.pop_front())
    }
}
