//! Named data fields and their payload shapes.

use std::collections::BTreeMap;

use serde_json::Map;

use crate::value::Value;

static EMPTY_OBJECT: BTreeMap<String, Value> = BTreeMap::new();

/// One named field of an item, template, or query.
///
/// The payload is structurally exactly one of: an optional scalar, an
/// ordered value sequence, or a string-keyed value mapping. The three
/// factories are the only way to build a `Property` and nothing mutates the
/// payload afterwards, so a property can never carry two shapes at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub(crate) name: String,
    pub(crate) prompt: Option<String>,
    pub(crate) payload: Payload,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
    Value(Option<Value>),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Property {
    /// A property holding an optional scalar value.
    pub fn with_value(
        name: impl Into<String>,
        prompt: Option<String>,
        value: Option<Value>,
    ) -> Property {
        Property::build(name, prompt, Payload::Value(value))
    }

    /// A property holding an ordered sequence of values.
    pub fn with_array(
        name: impl Into<String>,
        prompt: Option<String>,
        values: Vec<Value>,
    ) -> Property {
        Property::build(name, prompt, Payload::Array(values))
    }

    /// A property holding a string-keyed mapping of values.
    /// Iteration order of the mapping is not significant.
    pub fn with_object(
        name: impl Into<String>,
        prompt: Option<String>,
        object: BTreeMap<String, Value>,
    ) -> Property {
        Property::build(name, prompt, Payload::Object(object))
    }

    fn build(name: impl Into<String>, prompt: Option<String>, payload: Payload) -> Property {
        Property {
            name: name.into(),
            prompt,
            payload,
            extensions: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// The scalar value, when this property holds the scalar shape and a
    /// value is present.
    pub fn value(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Value(value) => value.as_ref(),
            _ => None,
        }
    }

    /// The value sequence, or an empty slice for the other shapes.
    pub fn values(&self) -> &[Value] {
        match &self.payload {
            Payload::Array(values) => values,
            _ => &[],
        }
    }

    /// The value mapping, or an empty mapping for the other shapes.
    pub fn object(&self) -> &BTreeMap<String, Value> {
        match &self.payload {
            Payload::Object(object) => object,
            _ => &EMPTY_OBJECT,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.payload, Payload::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.payload, Payload::Object(_))
    }

    /// An unreserved field carried through from the wire object, if present.
    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }

    /// A copy of this property with one extension field added or replaced.
    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Property {
        self.extensions.insert(name.into(), value);
        self
    }
}
