//! Items: one resource representation within a collection.

use std::collections::BTreeMap;

use serde_json::Map;
use url::Url;

use crate::collection::Collection;
use crate::data;
use crate::encoder;
use crate::error::{Error, Result};
use crate::link::Link;
use crate::property::Property;
use crate::template::Template;

/// A single resource representation: optional address, ordered property
/// list, ordered link list.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) href: Option<Url>,
    pub(crate) data: Option<Vec<Property>>,
    pub(crate) links: Option<Vec<Link>>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl Item {
    pub fn new(href: Option<Url>) -> Item {
        Item {
            href,
            data: None,
            links: None,
            extensions: Map::new(),
        }
    }

    pub fn builder() -> ItemBuilder {
        ItemBuilder::new()
    }

    pub fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    pub fn data(&self) -> &[Property] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or(&[])
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

    /// A template containing a full copy of this item's properties, in order.
    pub fn to_template(&self) -> Template {
        Template::new(self.data().to_vec())
    }

    /// A template whose properties are exactly the names from `template`, in
    /// `template`'s order, each resolved against this item's data.
    ///
    /// Strict: if any requested name is absent from this item, the whole
    /// operation fails with an error carrying every missing name. There is no
    /// best-effort partial result.
    pub fn fill_template(&self, template: &Template) -> Result<Template> {
        let ours = self.data_as_map();
        let mut resolved = Vec::new();
        let mut missing: Vec<String> = Vec::new();
        for wanted in template.data() {
            match ours.get(wanted.name()) {
                Some(property) => resolved.push(property.clone()),
                None => {
                    if !missing.iter().any(|name| name == wanted.name()) {
                        missing.push(wanted.name().to_string());
                    }
                }
            }
        }
        if missing.is_empty() {
            Ok(Template::new(resolved))
        } else {
            Err(Error::MissingTemplateData { missing })
        }
    }

    /// First link with exactly this relation.
    pub fn link_by_rel(&self, rel: &str) -> Option<&Link> {
        self.find_link(|link| link.rel() == rel)
    }

    /// First link whose optional name equals the given optional name, so a
    /// nameless link matches a `None` lookup.
    pub fn link_by_name(&self, name: Option<&str>) -> Option<&Link> {
        self.find_link(|link| link.name() == name)
    }

    pub fn link_by_rel_and_name(&self, rel: &str, name: Option<&str>) -> Option<&Link> {
        self.find_link(|link| link.rel() == rel && link.name() == name)
    }

    /// First link satisfying the predicate, in list order.
    pub fn find_link<P>(&self, predicate: P) -> Option<&Link>
    where
        P: Fn(&Link) -> bool,
    {
        self.links().iter().find(|link| predicate(link))
    }

    /// All links satisfying the predicate, in list order.
    pub fn find_links<P>(&self, predicate: P) -> Vec<&Link>
    where
        P: Fn(&Link) -> bool,
    {
        self.links().iter().filter(|link| predicate(link)).collect()
    }

    /// Wrap this item alone into a minimal collection sharing its address.
    pub fn to_collection(&self) -> Collection {
        let mut builder = Collection::builder();
        if let Some(href) = &self.href {
            builder = builder.href(href.clone());
        }
        builder.item(self.clone()).build()
    }

    /// The bare item object, serialized. This is the payload an update
    /// operation would send.
    pub fn to_node_string(&self) -> String {
        encoder::item_node(self).to_string()
    }

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }

    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Item {
        self.extensions.insert(name.into(), value);
        self
    }
}

/// Mutable single-owner accumulator, consumed by [`ItemBuilder::build`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    href: Option<Url>,
    data: Vec<Property>,
    links: Vec<Link>,
}

impl ItemBuilder {
    pub fn new() -> ItemBuilder {
        ItemBuilder::default()
    }

    pub fn href(mut self, href: Url) -> ItemBuilder {
        self.href = Some(href);
        self
    }

    pub fn property(mut self, property: Property) -> ItemBuilder {
        self.data.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> ItemBuilder {
        self.data.extend(properties);
        self
    }

    pub fn link(mut self, link: Link) -> ItemBuilder {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> ItemBuilder {
        self.links.extend(links);
        self
    }

    /// Empty lists are omitted from the built item, matching what the wire
    /// writer emits.
    pub fn build(self) -> Item {
        Item {
            href: self.href,
            data: if self.data.is_empty() {
                None
            } else {
                Some(self.data)
            },
            links: if self.links.is_empty() {
                None
            } else {
                Some(self.links)
            },
            extensions: Map::new(),
        }
    }
}
