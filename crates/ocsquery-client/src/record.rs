//! XML fragment to generic record conversion

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Child elements always parsed as sequences, at any depth
///
/// The inventory XML repeats these section elements once per item, so a
/// single-item section would otherwise collapse into a bare mapping.
pub const FORCE_LIST: [&str; 5] = ["DRIVES", "NETWORKS", "PRINTERS", "SOFTWARES", "VIDEOS"];

/// Key under which element text is stored when attributes are present
const CONTENT_KEY: &str = "content";

/// Parse one XML fragment into a generic record
///
/// # Errors
/// Returns `ClientError::Response` if the fragment is not well-formed XML.
pub fn fragment_to_record(fragment: &str, force_list: &[&str]) -> Result<Value> {
    let doc = Document::parse(fragment).map_err(|e| ClientError::Response(e.to_string()))?;
    Ok(element_to_value(doc.root_element(), force_list))
}

/// Convert an element into a generic value
///
/// An element without attributes or element children becomes its text.
/// Anything else becomes a mapping: attributes as string keys, text under
/// `content` when attributes are present, and child elements grouped by tag
/// name. A group of one stays scalar unless the tag is in `force_list`.
#[must_use]
pub fn element_to_value(node: Node<'_, '_>, force_list: &[&str]) -> Value {
    let children: Vec<Node> = node.children().filter(Node::is_element).collect();
    let has_attributes = node.attributes().next().is_some();

    if children.is_empty() && !has_attributes {
        return Value::String(element_text(node));
    }

    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(attr.name().to_string(), Value::String(attr.value().to_string()));
    }

    if children.is_empty() {
        let text = element_text(node);
        if !text.is_empty() {
            map.insert(CONTENT_KEY.to_string(), Value::String(text));
        }
        return Value::Object(map);
    }

    for child in children {
        let name = child.tag_name().name().to_string();
        let value = element_to_value(child, force_list);

        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if force_list.contains(&name.as_str()) => {
                map.insert(name, Value::Array(vec![value]));
            }
            None => {
                map.insert(name, value);
            }
        }
    }

    Value::Object(map)
}

fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}
