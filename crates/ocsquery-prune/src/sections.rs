//! Per-section pruning policy

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::fields::FieldTable;

/// Custom account fields are named `fields_<id>`
static CUSTOM_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^fields_(\d+)$").unwrap());

/// Windows descriptions carry a build path and timestamp after the first `/`
static DESCRIPTION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/.*\d{2}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap());

/// Account keys dropped after the rebuild
const DROPPED_ACCOUNT_KEYS: [&str; 1] = ["UA Username"];

/// Volatile drive attributes
const DROPPED_DRIVE_KEYS: [&str; 5] = ["CREATEDATE", "FREE", "LETTER", "NUMFILES", "VOLUMN"];

/// Volatile hardware attributes
const DROPPED_HARDWARE_KEYS: [&str; 9] = [
    "FIDELITY",
    "LASTCOME",
    "IPADDR",
    "IPSRC",
    "LASTDATE",
    "PROCESSORS",
    "QUALITY",
    "USERID",
    "SWAP",
];

/// Rebuild each account entry as a flat name-to-content mapping
///
/// Wire-form entries are sequences of `{Name, content}` pairs (a lone pair
/// the XML conversion collapsed counts as a one-pair sequence). `fields_<N>`
/// names translate through the field table; pairs without content are
/// skipped. Entries already flattened by an earlier pass only lose the
/// dropped keys.
pub(crate) fn account_info(section: &mut Value, fields: &FieldTable) {
    let Some(entries) = section.as_object_mut() else {
        return;
    };

    for entry in entries.values_mut() {
        if let Some(pairs) = name_content_pairs(entry) {
            let mut flat = Map::new();
            for pair in pairs {
                let Some(name) = pair.get("Name").and_then(Value::as_str) else {
                    continue;
                };
                let Some(content) = pair.get("content") else {
                    continue;
                };
                flat.insert(field_name(name, fields), content.clone());
            }
            *entry = Value::Object(flat);
        }

        if let Some(map) = entry.as_object_mut() {
            for key in DROPPED_ACCOUNT_KEYS {
                map.remove(key);
            }
        }
    }
}

/// An entry still in wire form
fn name_content_pairs(entry: &Value) -> Option<Vec<&Map<String, Value>>> {
    match entry {
        Value::Array(items) => Some(items.iter().filter_map(Value::as_object).collect()),
        Value::Object(map) if map.contains_key("Name") => Some(vec![map]),
        _ => None,
    }
}

fn field_name(name: &str, fields: &FieldTable) -> String {
    let Some(captures) = CUSTOM_FIELD.captures(name) else {
        return name.to_string();
    };

    let mapped = captures[1].parse::<u32>().ok().and_then(|id| fields.get(id));
    match mapped {
        Some(mapped) => mapped.to_string(),
        None => {
            warn!(field = name, "custom field has no table entry");
            name.to_string()
        }
    }
}

/// Order, strip, filter, and sort the drive list
///
/// `ORDER` = volume label + drive letter (scalar components only), with a
/// trailing `:/` reduced to `:`. Not recomputed once present; its inputs are
/// removed below.
pub(crate) fn drives(section: &mut Value) {
    let Some(items) = section.as_array_mut() else {
        return;
    };

    for item in items.iter_mut() {
        let Some(drive) = item.as_object_mut() else {
            continue;
        };

        if !drive.contains_key("ORDER") {
            let mut order = String::new();
            if let Some(label) = drive.get("VOLUMN").and_then(Value::as_str) {
                order.push_str(label);
            }
            if let Some(letter) = drive.get("LETTER").and_then(Value::as_str) {
                order.push_str(letter);
            }
            if let Some(stripped) = order.strip_suffix(":/") {
                order = format!("{stripped}:");
            }
            drive.insert("ORDER".to_string(), Value::String(order));
        }

        for key in DROPPED_DRIVE_KEYS {
            drive.remove(key);
        }
    }

    items.retain(|item| !is_removable(item));
    sort_by_key(items, "ORDER");
}

/// Drop volatile hardware attributes and the description's build suffix
pub(crate) fn hardware(section: &mut Value) {
    let Some(map) = section.as_object_mut() else {
        return;
    };

    for key in DROPPED_HARDWARE_KEYS {
        map.remove(key);
    }

    if let Some(Value::String(description)) = map.get_mut("DESCRIPTION")
        && let Some(found) = DESCRIPTION_SUFFIX.find(description)
    {
        let start = found.start();
        description.truncate(start);
    }
}

pub(crate) fn networks(section: &mut Value) {
    strip_from_items(section, &["SPEED", "STATUS"]);
}

pub(crate) fn printers(section: &mut Value) {
    let Some(items) = section.as_array_mut() else {
        return;
    };
    sort_by_key(items, "NAME");
}

/// Collapse the software list into a name-to-version mapping
///
/// Duplicate names keep the last version seen. An already-collapsed mapping
/// is left alone.
pub(crate) fn softwares(section: &mut Value) {
    let Some(items) = section.as_array() else {
        return;
    };

    let mut versions = Map::new();
    for item in items {
        let Some(name) = item.get("NAME").and_then(Value::as_str) else {
            continue;
        };
        let version = item.get("VERSION").cloned().unwrap_or(Value::Null);
        versions.insert(name.to_string(), version);
    }

    *section = Value::Object(versions);
}

pub(crate) fn storages(section: &mut Value) {
    let Some(items) = section.as_array_mut() else {
        return;
    };
    items.retain(|item| !is_removable(item));
}

pub(crate) fn videos(section: &mut Value) {
    strip_from_items(section, &["RESOLUTION"]);
}

/// `TYPE` matching "removable" in any case marks media to drop
fn is_removable(item: &Value) -> bool {
    item.get("TYPE")
        .and_then(Value::as_str)
        .is_some_and(|t| t.to_ascii_lowercase().contains("removable"))
}

fn strip_from_items(section: &mut Value, keys: &[&str]) {
    let Some(items) = section.as_array_mut() else {
        return;
    };

    for item in items {
        let Some(map) = item.as_object_mut() else {
            continue;
        };
        for key in keys {
            map.remove(*key);
        }
    }
}

fn sort_by_key(items: &mut [Value], key: &str) {
    items.sort_by(|a, b| {
        let ka = a.get(key).and_then(Value::as_str).unwrap_or_default();
        let kb = b.get(key).and_then(Value::as_str).unwrap_or_default();
        ka.cmp(kb)
    });
}
