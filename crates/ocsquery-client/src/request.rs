//! Query parameters and request-body construction

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;

/// Default inventory engine selector
const DEFAULT_ENGINE: &str = "FIRST";
/// Default request subject
const DEFAULT_ASKING_FOR: &str = "INVENTORY";
/// Bitmask selecting every hardware and software category
const DEFAULT_CHECKSUM: u32 = 131_071;
/// Bitmask of wanted record parts
const DEFAULT_WANTED: u32 = 3;

/// Query parameters for `get_computers`
///
/// Starts from the service defaults; caller values win on key collision.
/// Unknown keys pass through verbatim and become uppercased tag names in the
/// request body.
///
/// # Example
/// ```
/// use ocsquery_client::ComputerQuery;
///
/// let query = ComputerQuery::new().checksum(0x1).param("tag", "production");
/// let body = query.to_request_xml();
/// assert!(body.contains("<CHECKSUM>1</CHECKSUM>"));
/// assert!(body.contains("<TAG>production</TAG>"));
/// ```
#[derive(Debug, Clone)]
pub struct ComputerQuery {
    params: BTreeMap<String, String>,
}

impl ComputerQuery {
    /// Create a query carrying only the defaults
    #[must_use]
    pub fn new() -> Self {
        let mut params = BTreeMap::new();
        params.insert("engine".to_string(), DEFAULT_ENGINE.to_string());
        params.insert("asking_for".to_string(), DEFAULT_ASKING_FOR.to_string());
        params.insert("checksum".to_string(), DEFAULT_CHECKSUM.to_string());
        params.insert("wanted".to_string(), DEFAULT_WANTED.to_string());
        params.insert("offset".to_string(), 0.to_string());
        Self { params }
    }

    /// Select the inventory engine
    #[must_use]
    pub fn engine(self, engine: impl Into<String>) -> Self {
        self.param("engine", engine.into())
    }

    /// Select what the server is asked for
    #[must_use]
    pub fn asking_for(self, asking_for: impl Into<String>) -> Self {
        self.param("asking_for", asking_for.into())
    }

    /// Set the category checksum bitmask
    #[must_use]
    pub fn checksum(self, checksum: u32) -> Self {
        self.param("checksum", checksum.to_string())
    }

    /// Set the wanted-parts bitmask
    #[must_use]
    pub fn wanted(self, wanted: u32) -> Self {
        self.param("wanted", wanted.to_string())
    }

    /// Set the page offset
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        self.param("offset", offset.to_string())
    }

    /// Set an arbitrary parameter, overriding any default of the same name
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Build the request body
    ///
    /// One element per effective parameter, tag name uppercased, in
    /// sorted-key order. Values are emitted as-is; the service expects
    /// unescaped text.
    #[must_use]
    pub fn to_request_xml(&self) -> String {
        let mut xml = String::from("<REQUEST>");
        for (key, value) in &self.params {
            let tag = key.to_uppercase();
            let _ = write!(xml, "<{tag}>{value}</{tag}>");
        }
        xml.push_str("</REQUEST>");
        xml
    }
}

impl Default for ComputerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComputerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_request_xml())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let body = ComputerQuery::new().to_request_xml();

        assert_eq!(
            body,
            "<REQUEST>\
             <ASKING_FOR>INVENTORY</ASKING_FOR>\
             <CHECKSUM>131071</CHECKSUM>\
             <ENGINE>FIRST</ENGINE>\
             <OFFSET>0</OFFSET>\
             <WANTED>3</WANTED>\
             </REQUEST>"
        );
    }

    #[test]
    fn test_override_wins_without_duplicating() {
        let body = ComputerQuery::new().checksum(1).to_request_xml();

        assert!(body.contains("<CHECKSUM>1</CHECKSUM>"));
        assert!(!body.contains("131071"));
        assert_eq!(body.matches("<CHECKSUM>").count(), 1);
    }

    #[test]
    fn test_extra_param_is_uppercased() {
        let body = ComputerQuery::new().param("tag", "production").to_request_xml();

        assert!(body.contains("<TAG>production</TAG>"));
    }

    #[test]
    fn test_exactly_one_element_per_effective_key() {
        let query = ComputerQuery::new().offset(7).param("tag", "x");
        let body = query.to_request_xml();

        // Six parameter elements plus the REQUEST root, offset overridden
        // in place rather than duplicated.
        assert_eq!(body.matches("</").count(), 7);
        assert!(body.contains("<OFFSET>7</OFFSET>"));
    }

    #[test]
    fn test_builder_methods_map_to_params() {
        let body = ComputerQuery::new()
            .engine("MULTI")
            .asking_for("META")
            .wanted(1)
            .to_request_xml();

        assert!(body.contains("<ENGINE>MULTI</ENGINE>"));
        assert!(body.contains("<ASKING_FOR>META</ASKING_FOR>"));
        assert!(body.contains("<WANTED>1</WANTED>"));
    }

    #[test]
    fn test_display_matches_body() {
        let query = ComputerQuery::new();
        assert_eq!(query.to_string(), query.to_request_xml());
    }
}
