//! Encoder — converts the typed model back into a generic JSON tree.
//!
//! Reserved fields are written first, in wire order, then the extension
//! fields carried through from decode. Fields the model tracks as absent are
//! not written at all, and numbers re-emit the exact decimal representation
//! they were decoded with, so decoding a well-formed document and encoding
//! it again yields a structurally equal tree.

use serde_json::{Map, Value as Json};

use crate::collection::{Collection, ErrorMessage};
use crate::item::Item;
use crate::link::Link;
use crate::property::{Payload, Property};
use crate::query::Query;
use crate::template::Template;
use crate::value::Value;

/// The `{"collection": …}` document tree for a collection.
pub fn collection_document(collection: &Collection) -> Json {
    let mut obj = Map::new();
    if let Some(version) = &collection.version {
        obj.insert("version".to_string(), Json::String(version.clone()));
    }
    if let Some(href) = &collection.href {
        obj.insert("href".to_string(), Json::String(href.to_string()));
    }
    if let Some(links) = &collection.links {
        obj.insert(
            "links".to_string(),
            Json::Array(links.iter().map(link_node).collect()),
        );
    }
    if let Some(items) = &collection.items {
        obj.insert(
            "items".to_string(),
            Json::Array(items.iter().map(item_node).collect()),
        );
    }
    if let Some(queries) = &collection.queries {
        obj.insert(
            "queries".to_string(),
            Json::Array(queries.iter().map(query_node).collect()),
        );
    }
    if let Some(template) = &collection.template {
        obj.insert("template".to_string(), template_node(template));
    }
    if let Some(error) = &collection.error {
        obj.insert("error".to_string(), error_node(error));
    }
    copy_extensions(&collection.extensions, &mut obj);

    let mut root = Map::new();
    root.insert("collection".to_string(), Json::Object(obj));
    Json::Object(root)
}

/// The `{"template": …}` document tree for a stand-alone template.
pub fn template_document(template: &Template) -> Json {
    let mut root = Map::new();
    root.insert("template".to_string(), template_node(template));
    Json::Object(root)
}

/// The bare item object, the payload an update operation would send.
pub fn item_node(item: &Item) -> Json {
    let mut obj = Map::new();
    if let Some(href) = &item.href {
        obj.insert("href".to_string(), Json::String(href.to_string()));
    }
    if let Some(data) = &item.data {
        obj.insert(
            "data".to_string(),
            Json::Array(data.iter().map(property_node).collect()),
        );
    }
    if let Some(links) = &item.links {
        obj.insert(
            "links".to_string(),
            Json::Array(links.iter().map(link_node).collect()),
        );
    }
    copy_extensions(&item.extensions, &mut obj);
    Json::Object(obj)
}

/// Serialized collection document text.
pub fn write_collection(collection: &Collection) -> String {
    collection_document(collection).to_string()
}

/// Serialized template document text, the payload a create operation would
/// send.
pub fn write_template(template: &Template) -> String {
    template_document(template).to_string()
}

/// Serialized bare item text, the payload an update operation would send.
pub fn write_item(item: &Item) -> String {
    item_node(item).to_string()
}

pub(crate) fn template_node(template: &Template) -> Json {
    let mut obj = Map::new();
    if let Some(data) = &template.data {
        obj.insert(
            "data".to_string(),
            Json::Array(data.iter().map(property_node).collect()),
        );
    }
    copy_extensions(&template.extensions, &mut obj);
    Json::Object(obj)
}

pub(crate) fn property_node(property: &Property) -> Json {
    let mut obj = Map::new();
    obj.insert("name".to_string(), Json::String(property.name.clone()));
    if let Some(prompt) = &property.prompt {
        obj.insert("prompt".to_string(), Json::String(prompt.clone()));
    }
    match &property.payload {
        Payload::Value(Some(value)) => {
            obj.insert("value".to_string(), value.to_node());
        }
        Payload::Value(None) => {}
        Payload::Array(values) => {
            obj.insert(
                "array".to_string(),
                Json::Array(values.iter().map(Value::to_node).collect()),
            );
        }
        Payload::Object(object) => {
            let entries = object
                .iter()
                .map(|(key, value)| (key.clone(), value.to_node()))
                .collect();
            obj.insert("object".to_string(), Json::Object(entries));
        }
    }
    copy_extensions(&property.extensions, &mut obj);
    Json::Object(obj)
}

pub(crate) fn link_node(link: &Link) -> Json {
    let mut obj = Map::new();
    obj.insert("href".to_string(), Json::String(link.href.to_string()));
    obj.insert("rel".to_string(), Json::String(link.rel.clone()));
    if let Some(name) = &link.name {
        obj.insert("name".to_string(), Json::String(name.clone()));
    }
    if let Some(prompt) = &link.prompt {
        obj.insert("prompt".to_string(), Json::String(prompt.clone()));
    }
    if let Some(render) = link.render {
        obj.insert(
            "render".to_string(),
            Json::String(render.as_str().to_string()),
        );
    }
    copy_extensions(&link.extensions, &mut obj);
    Json::Object(obj)
}

pub(crate) fn query_node(query: &Query) -> Json {
    let mut obj = Map::new();
    obj.insert("href".to_string(), Json::String(query.href.to_string()));
    obj.insert("rel".to_string(), Json::String(query.rel.clone()));
    if let Some(name) = &query.name {
        obj.insert("name".to_string(), Json::String(name.clone()));
    }
    if let Some(prompt) = &query.prompt {
        obj.insert("prompt".to_string(), Json::String(prompt.clone()));
    }
    if let Some(render) = query.render {
        obj.insert(
            "render".to_string(),
            Json::String(render.as_str().to_string()),
        );
    }
    if let Some(data) = &query.data {
        obj.insert(
            "data".to_string(),
            Json::Array(data.iter().map(property_node).collect()),
        );
    }
    copy_extensions(&query.extensions, &mut obj);
    Json::Object(obj)
}

pub(crate) fn error_node(error: &ErrorMessage) -> Json {
    let mut obj = Map::new();
    if let Some(title) = &error.title {
        obj.insert("title".to_string(), Json::String(title.clone()));
    }
    if let Some(code) = &error.code {
        obj.insert("code".to_string(), Json::String(code.clone()));
    }
    if let Some(message) = &error.message {
        obj.insert("message".to_string(), Json::String(message.clone()));
    }
    copy_extensions(&error.extensions, &mut obj);
    Json::Object(obj)
}

fn copy_extensions(extensions: &Map<String, Json>, obj: &mut Map<String, Json>) {
    for (key, value) in extensions {
        obj.insert(key.clone(), value.clone());
    }
}
