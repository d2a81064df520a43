//! SOAP 1.1 envelope construction and parsing

use roxmltree::{Document, Node};

use crate::error::TransportError;
use crate::response::{SoapFault, SoapResponse};

/// Escape text for embedding in an XML element
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build a request envelope for `operation` under `namespace`
///
/// The operation takes a single `xsd:string` argument carrying `body`.
#[must_use]
pub fn build_request(namespace: &str, operation: &str, body: &str) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<SOAP-ENV:Envelope",
            " xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\"",
            " xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\"",
            " xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"",
            " SOAP-ENV:encodingStyle=\"http://schemas.xmlsoap.org/soap/encoding/\">",
            "<SOAP-ENV:Body>",
            "<ns1:{operation} xmlns:ns1=\"{namespace}\">",
            "<request xsi:type=\"xsd:string\">{body}</request>",
            "</ns1:{operation}>",
            "</SOAP-ENV:Body>",
            "</SOAP-ENV:Envelope>"
        ),
        operation = operation,
        namespace = escape_text(namespace),
        body = escape_text(body),
    )
}

/// Parse a response envelope into a fault or its payload parts
///
/// A `Fault` element anywhere in the body wins. Otherwise the string parts
/// under the response element are collected in document order; a response
/// element carrying bare text yields that text as the single part.
///
/// # Errors
/// Returns an error if the document does not parse or has no `Body`.
pub fn parse_response(xml: &str) -> Result<SoapResponse, TransportError> {
    let doc = Document::parse(xml).map_err(|e| TransportError::Envelope(e.to_string()))?;

    let body = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "Body")
        .ok_or_else(|| TransportError::MissingResponse("no Body element".to_string()))?;

    if let Some(fault) = body
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "Fault")
    {
        return Ok(SoapResponse::Fault(SoapFault {
            code: child_text(fault, "faultcode").unwrap_or_default(),
            string: child_text(fault, "faultstring").unwrap_or_default(),
        }));
    }

    let response = body
        .children()
        .find(Node::is_element)
        .ok_or_else(|| TransportError::MissingResponse("empty Body".to_string()))?;

    let mut parts: Vec<String> = response
        .children()
        .filter(Node::is_element)
        .filter_map(element_text)
        .collect();

    if parts.is_empty()
        && let Some(text) = element_text(response)
    {
        parts.push(text);
    }

    Ok(SoapResponse::Payload(parts))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(element_text)
}

fn element_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_wraps_operation() {
        let envelope = build_request("http://ocs/Interface", "get_computers_V1", "<REQUEST></REQUEST>");

        assert!(envelope.contains("<ns1:get_computers_V1 xmlns:ns1=\"http://ocs/Interface\">"));
        assert!(envelope.contains("</ns1:get_computers_V1>"));
        assert!(envelope.contains("SOAP-ENV:Body"));
    }

    #[test]
    fn test_build_request_escapes_body() {
        let envelope = build_request("http://ocs/Interface", "op", "<A>x &amp; y</A>");

        assert!(envelope.contains("&lt;A&gt;x &amp;amp; y&lt;/A&gt;"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&apos;");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_parse_fault() {
        let xml = r#"<?xml version="1.0"?>
            <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
              <SOAP-ENV:Body>
                <SOAP-ENV:Fault>
                  <faultcode>SOAP-ENV:Server</faultcode>
                  <faultstring>Bad&amp;amp;Request</faultstring>
                </SOAP-ENV:Fault>
              </SOAP-ENV:Body>
            </SOAP-ENV:Envelope>"#;

        let response = parse_response(xml).unwrap();
        let SoapResponse::Fault(fault) = response else {
            panic!("expected fault");
        };
        assert_eq!(fault.code, "SOAP-ENV:Server");
        // The parser resolves one level; the server's own encoding remains.
        assert_eq!(fault.string, "Bad&amp;Request");
    }

    #[test]
    fn test_parse_payload_parts_in_order() {
        let xml = r#"<?xml version="1.0"?>
            <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"
                               xmlns:ns1="http://ocs/Interface">
              <SOAP-ENV:Body>
                <ns1:get_computers_V1Response>
                  <item>&lt;COMPUTERS&gt;&lt;/COMPUTERS&gt;</item>
                  <item>second</item>
                </ns1:get_computers_V1Response>
              </SOAP-ENV:Body>
            </SOAP-ENV:Envelope>"#;

        let response = parse_response(xml).unwrap();
        let SoapResponse::Payload(parts) = response else {
            panic!("expected payload");
        };
        assert_eq!(parts, vec!["<COMPUTERS></COMPUTERS>".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_parse_bare_text_response() {
        let xml = r#"<?xml version="1.0"?>
            <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
              <SOAP-ENV:Body>
                <response>only part</response>
              </SOAP-ENV:Body>
            </SOAP-ENV:Envelope>"#;

        let response = parse_response(xml).unwrap();
        let SoapResponse::Payload(parts) = response else {
            panic!("expected payload");
        };
        assert_eq!(parts, vec!["only part".to_string()]);
    }

    #[test]
    fn test_parse_empty_response_element() {
        let xml = r#"<?xml version="1.0"?>
            <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
              <SOAP-ENV:Body>
                <response></response>
              </SOAP-ENV:Body>
            </SOAP-ENV:Envelope>"#;

        let response = parse_response(xml).unwrap();
        let SoapResponse::Payload(parts) = response else {
            panic!("expected payload");
        };
        assert!(parts.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_body() {
        let xml = "<root></root>";
        assert!(matches!(
            parse_response(xml),
            Err(TransportError::MissingResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_xml() {
        assert!(matches!(
            parse_response("not xml"),
            Err(TransportError::Envelope(_))
        ));
    }
}
