//! ocsquery-prune: reduce inventory records to a diff-friendly subset
//!
//! [`prune`] deletes volatile attributes, renames custom account fields,
//! collapses the software list, and orders the sections that have no stable
//! service-side order, so consecutive snapshots of the same machine diff
//! cleanly under version control.
//!
//! # Examples
//!
//! ```
//! use ocsquery_prune::{FieldTable, prune};
//! use serde_json::json;
//!
//! let mut fields = FieldTable::new();
//! fields.insert(3, "Location");
//!
//! let mut computer = json!({
//!     "SOFTWARES": [
//!         {"NAME": "bash", "VERSION": "5.2", "PUBLISHER": "GNU"},
//!     ],
//! });
//! prune(&mut computer, &fields);
//! assert_eq!(computer["SOFTWARES"]["bash"], "5.2");
//! ```

pub mod fields;
mod sections;

pub use fields::FieldTable;

use serde_json::Value;

/// Prune a computer record in place
///
/// Applies the per-section policy to every section present; an absent
/// section is a no-op. Top-level keys outside the policy are untouched, and
/// running `prune` on an already-pruned record changes nothing.
pub fn prune(computer: &mut Value, fields: &FieldTable) {
    let Some(map) = computer.as_object_mut() else {
        return;
    };

    if let Some(section) = map.get_mut("ACCOUNTINFO") {
        sections::account_info(section, fields);
    }
    if let Some(section) = map.get_mut("DRIVES") {
        sections::drives(section);
    }
    if let Some(section) = map.get_mut("HARDWARE") {
        sections::hardware(section);
    }
    if let Some(section) = map.get_mut("NETWORKS") {
        sections::networks(section);
    }
    if let Some(section) = map.get_mut("PRINTERS") {
        sections::printers(section);
    }
    if let Some(section) = map.get_mut("SOFTWARES") {
        sections::softwares(section);
    }
    if let Some(section) = map.get_mut("STORAGES") {
        sections::storages(section);
    }
    if let Some(section) = map.get_mut("VIDEOS") {
        sections::videos(section);
    }
}
