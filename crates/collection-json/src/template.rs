//! Write-forms: the shape of a document a client submits to create or
//! update a resource.

use std::collections::BTreeMap;

use serde_json::Map;

use crate::data;
use crate::encoder;
use crate::error::Result;
use crate::property::Property;

/// An ordered property list with no address and no links.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub(crate) data: Option<Vec<Property>>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl Template {
    pub fn new(data: Vec<Property>) -> Template {
        Template {
            data: if data.is_empty() { None } else { Some(data) },
            extensions: Map::new(),
        }
    }

    pub fn data(&self) -> &[Property] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// Name-keyed projection of the property list; duplicate names resolve
    /// last-write-wins (see [`data::by_name`]).
    pub fn data_as_map(&self) -> BTreeMap<String, Property> {
        data::by_name(self.data())
    }

    pub fn find_property<P>(&self, predicate: P) -> Option<&Property>
    where
        P: Fn(&Property) -> bool,
    {
        data::find_property(self.data(), predicate)
    }

    pub fn validate(&self) -> Result<()> {
        data::validate(self.data(), "template")
    }

    /// The `{"template": …}` document tree this write-form serializes to.
    pub fn to_document(&self) -> serde_json::Value {
        encoder::template_document(self)
    }

    /// The serialized document text, the payload a create operation would send.
    pub fn to_document_string(&self) -> String {
        self.to_document().to_string()
    }

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }

    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Template {
        self.extensions.insert(name.into(), value);
        self
    }
}
