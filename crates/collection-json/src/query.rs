//! Read-forms: links that describe the parameters a caller may supply.

use std::collections::BTreeMap;

use serde_json::Map;
use url::Url;

use crate::data;
use crate::link::Render;
use crate::property::Property;

/// A query link. The embedded property list is purely descriptive
/// (parameter names and prompts), not a resolved value set.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub(crate) href: Url,
    pub(crate) rel: String,
    pub(crate) name: Option<String>,
    pub(crate) prompt: Option<String>,
    pub(crate) render: Option<Render>,
    pub(crate) data: Option<Vec<Property>>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl Query {
    pub fn new(href: Url, rel: impl Into<String>) -> Query {
        Query {
            href,
            rel: rel.into(),
            name: None,
            prompt: None,
            render: None,
            data: None,
            extensions: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Query {
        self.name = Some(name.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Query {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_render(mut self, render: Render) -> Query {
        self.render = Some(render);
        self
    }

    /// Replaces the parameter list with the given properties.
    pub fn with_data(mut self, data: Vec<Property>) -> Query {
        self.data = if data.is_empty() { None } else { Some(data) };
        self
    }

    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Query {
        self.extensions.insert(name.into(), value);
        self
    }

    pub fn href(&self) -> &Url {
        &self.href
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn render(&self) -> Option<Render> {
        self.render
    }

    pub fn data(&self) -> &[Property] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn data_as_map(&self) -> BTreeMap<String, Property> {
        data::by_name(self.data())
    }

    pub fn find_property<P>(&self, predicate: P) -> Option<&Property>
    where
        P: Fn(&Property) -> bool,
    {
        data::find_property(self.data(), predicate)
    }

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }
}
