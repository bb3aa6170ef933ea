//! Shared behavior of the ordered property lists carried by items,
//! templates, and queries.
//!
//! The owners are a small closed set of concrete types, so the shared shape
//! is expressed as plain functions over a property slice rather than a
//! trait object.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::property::Property;

/// Project an ordered property list into a name-keyed mapping.
///
/// When two properties share a name, the later one in list order wins. Last
/// write wins is the pinned merge policy for duplicate names, not an
/// accident of the map implementation.
pub fn by_name(properties: &[Property]) -> BTreeMap<String, Property> {
    let mut map = BTreeMap::new();
    for property in properties {
        map.insert(property.name().to_string(), property.clone());
    }
    map
}

/// First property satisfying the predicate, in list order.
pub fn find_property<P>(properties: &[Property], predicate: P) -> Option<&Property>
where
    P: Fn(&Property) -> bool,
{
    properties.iter().find(|property| predicate(property))
}

/// Reject properties whose name is empty. Payload-shape exclusivity needs no
/// check here: the `Property` factories make mixed shapes unrepresentable.
pub(crate) fn validate(properties: &[Property], owner: &str) -> Result<()> {
    for property in properties {
        if property.name().is_empty() {
            return Err(Error::Validation(format!(
                "{owner} carries a property with an empty name"
            )));
        }
    }
    Ok(())
}
