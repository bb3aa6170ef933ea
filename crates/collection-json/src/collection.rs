//! The top-level Collection+JSON document.

use serde_json::Map;
use url::Url;

use crate::data;
use crate::encoder;
use crate::error::Result;
use crate::item::Item;
use crate::link::Link;
use crate::query::Query;
use crate::template::Template;

/// The version written by the builder and assumed for documents that
/// predate the version field.
pub const VERSION: &str = "1.0";

/// The top-level document: version, address, links, items, queries, at most
/// one template, at most one error.
///
/// Immutable after construction. The version and the list fields remember
/// whether they were present in the source document so a decode→encode
/// round-trip does not invent or drop fields; the accessors expose default
/// views (`"1.0"`, empty slices) either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub(crate) version: Option<String>,
    pub(crate) href: Option<Url>,
    pub(crate) links: Option<Vec<Link>>,
    pub(crate) items: Option<Vec<Item>>,
    pub(crate) queries: Option<Vec<Query>>,
    pub(crate) template: Option<Template>,
    pub(crate) error: Option<ErrorMessage>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl Collection {
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    /// The document version, `"1.0"` when the field was absent.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(VERSION)
    }

    pub fn href(&self) -> Option<&Url> {
        self.href.as_ref()
    }

    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or(&[])
    }

    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn queries(&self) -> &[Query] {
        self.queries.as_deref().unwrap_or(&[])
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    pub fn first_item(&self) -> Option<&Item> {
        self.items().first()
    }

    /// Structural rules not already unrepresentable by construction.
    ///
    /// At-most-one template and at-most-one error hold structurally (single
    /// `Option` slots); what remains is rejecting empty property names
    /// anywhere in the document. The parser runs this once per parse and
    /// propagates failures.
    pub fn validate(&self) -> Result<()> {
        for item in self.items() {
            data::validate(item.data(), "item")?;
        }
        for query in self.queries() {
            data::validate(query.data(), "query")?;
        }
        if let Some(template) = &self.template {
            template.validate()?;
        }
        Ok(())
    }

    /// The `{"collection": …}` document tree.
    pub fn to_document(&self) -> serde_json::Value {
        encoder::collection_document(self)
    }

    /// The serialized document text.
    pub fn to_document_string(&self) -> String {
        self.to_document().to_string()
    }

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }

    pub fn with_extension(
        mut self,
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Collection {
        self.extensions.insert(name.into(), value);
        self
    }
}

/// The optional error payload of a collection document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorMessage {
    pub(crate) title: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl ErrorMessage {
    pub fn new() -> ErrorMessage {
        ErrorMessage::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> ErrorMessage {
        self.title = Some(title.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> ErrorMessage {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> ErrorMessage {
        self.message = Some(message.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }
}

/// Mutable single-owner accumulator, consumed by [`CollectionBuilder::build`].
///
/// The template and error slots are `Option`s: assigning twice replaces, so
/// a built collection can never hold more than one of either.
#[derive(Debug, Default)]
pub struct CollectionBuilder {
    href: Option<Url>,
    links: Vec<Link>,
    items: Vec<Item>,
    queries: Vec<Query>,
    template: Option<Template>,
    error: Option<ErrorMessage>,
}

impl CollectionBuilder {
    pub fn new() -> CollectionBuilder {
        CollectionBuilder::default()
    }

    pub fn href(mut self, href: Url) -> CollectionBuilder {
        self.href = Some(href);
        self
    }

    pub fn link(mut self, link: Link) -> CollectionBuilder {
        self.links.push(link);
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> CollectionBuilder {
        self.links.extend(links);
        self
    }

    pub fn item(mut self, item: Item) -> CollectionBuilder {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> CollectionBuilder {
        self.items.extend(items);
        self
    }

    pub fn query(mut self, query: Query) -> CollectionBuilder {
        self.queries.push(query);
        self
    }

    pub fn queries(mut self, queries: impl IntoIterator<Item = Query>) -> CollectionBuilder {
        self.queries.extend(queries);
        self
    }

    pub fn template(mut self, template: Template) -> CollectionBuilder {
        self.template = Some(template);
        self
    }

    pub fn error(mut self, error: ErrorMessage) -> CollectionBuilder {
        self.error = Some(error);
        self
    }

    /// Empty lists are omitted from the built collection, matching what the
    /// wire writer emits. Built collections always carry an explicit version.
    pub fn build(self) -> Collection {
        Collection {
            version: Some(VERSION.to_string()),
            href: self.href,
            links: if self.links.is_empty() {
                None
            } else {
                Some(self.links)
            },
            items: if self.items.is_empty() {
                None
            } else {
                Some(self.items)
            },
            queries: if self.queries.is_empty() {
                None
            } else {
                Some(self.queries)
            },
            template: self.template,
            error: self.error,
            extensions: Map::new(),
        }
    }
}
