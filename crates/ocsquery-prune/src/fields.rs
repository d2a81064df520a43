//! Custom-field name table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps custom-field IDs to human-readable names
///
/// Account sections name custom fields `fields_<N>`; the table supplies the
/// key those entries are stored under after pruning. Passed explicitly into
/// [`prune`](crate::prune) so callers can scope it per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldTable {
    names: HashMap<u32, String>,
}

impl FieldTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field name
    pub fn insert(&mut self, id: u32, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Look up a field name
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}

impl From<HashMap<u32, String>> for FieldTable {
    fn from(names: HashMap<u32, String>) -> Self {
        Self { names }
    }
}

impl FromIterator<(u32, String)> for FieldTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
