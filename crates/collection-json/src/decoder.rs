//! Parser — locates and decodes Collection+JSON documents.
//!
//! Input is either raw text (run through serde_json first, so malformed JSON
//! fails with positional information) or an already-decoded generic tree.
//! Decoding is schema-aware: reserved fields are pulled out of each wire
//! object by name and checked for shape, required fields that are missing or
//! malformed are reported together per object, and whatever keys remain are
//! preserved verbatim as extension fields.
//!
//! Decoding never yields a partially constructed document: the first shape
//! defect aborts the whole parse, and the validation hook runs on the fully
//! decoded value before it is returned.

use std::collections::BTreeMap;

use serde_json::{Map, Value as Json};
use url::Url;

use crate::collection::{Collection, ErrorMessage};
use crate::error::{Error, Result};
use crate::item::Item;
use crate::link::{Link, Render};
use crate::property::{Payload, Property};
use crate::query::Query;
use crate::template::Template;
use crate::value::Value;

/// Parse a collection document from text.
pub fn parse_collection(input: &str) -> Result<Collection> {
    let root: Json = serde_json::from_str(input)?;
    collection_from_value(root)
}

/// Parse a collection document from an already-decoded tree.
///
/// The tree must be an object carrying the top-level `"collection"` key; the
/// decoded collection is validated before it is returned.
pub fn collection_from_value(root: Json) -> Result<Collection> {
    let mut root = as_object(root, "document")?;
    let node = root
        .remove("collection")
        .ok_or_else(|| Error::Parse("missing top-level \"collection\" key".to_string()))?;
    let collection = decode_collection(as_object(node, "collection")?)?;
    collection.validate()?;
    Ok(collection)
}

/// Parse a template-only document from text.
pub fn parse_template(input: &str) -> Result<Template> {
    let root: Json = serde_json::from_str(input)?;
    template_from_value(root)
}

/// Parse a template-only document from an already-decoded tree.
pub fn template_from_value(root: Json) -> Result<Template> {
    let mut root = as_object(root, "document")?;
    let node = root
        .remove("template")
        .ok_or_else(|| Error::Parse("missing top-level \"template\" key".to_string()))?;
    let template = decode_template(as_object(node, "template")?)?;
    template.validate()?;
    Ok(template)
}

fn decode_collection(mut obj: Map<String, Json>) -> Result<Collection> {
    let version = take_string(&mut obj, "collection", "version")?;
    let href = take_url(&mut obj, "collection", "href")?;
    let links = match take_array(&mut obj, "collection", "links")? {
        Some(nodes) => Some(decode_each(nodes, decode_link)?),
        None => None,
    };
    let items = match take_array(&mut obj, "collection", "items")? {
        Some(nodes) => Some(decode_each(nodes, decode_item)?),
        None => None,
    };
    let queries = match take_array(&mut obj, "collection", "queries")? {
        Some(nodes) => Some(decode_each(nodes, decode_query)?),
        None => None,
    };
    let template = match obj.remove("template") {
        Some(node) => Some(decode_template(as_object(node, "collection template")?)?),
        None => None,
    };
    let error = match obj.remove("error") {
        Some(node) => Some(decode_error(as_object(node, "collection error")?)?),
        None => None,
    };
    Ok(Collection {
        version,
        href,
        links,
        items,
        queries,
        template,
        error,
        extensions: obj,
    })
}

fn decode_item(node: Json) -> Result<Item> {
    let mut obj = as_object(node, "item")?;
    let href = take_url(&mut obj, "item", "href")?;
    let data = match take_array(&mut obj, "item", "data")? {
        Some(nodes) => Some(decode_each(nodes, decode_property)?),
        None => None,
    };
    let links = match take_array(&mut obj, "item", "links")? {
        Some(nodes) => Some(decode_each(nodes, decode_link)?),
        None => None,
    };
    Ok(Item {
        href,
        data,
        links,
        extensions: obj,
    })
}

fn decode_template(mut obj: Map<String, Json>) -> Result<Template> {
    let data = match take_array(&mut obj, "template", "data")? {
        Some(nodes) => Some(decode_each(nodes, decode_property)?),
        None => None,
    };
    Ok(Template {
        data,
        extensions: obj,
    })
}

fn decode_error(mut obj: Map<String, Json>) -> Result<ErrorMessage> {
    let title = take_string(&mut obj, "error", "title")?;
    let code = take_string(&mut obj, "error", "code")?;
    let message = take_string(&mut obj, "error", "message")?;
    Ok(ErrorMessage {
        title,
        code,
        message,
        extensions: obj,
    })
}

fn decode_link(node: Json) -> Result<Link> {
    let mut obj = as_object(node, "link")?;
    let (href, rel) = required_link_fields(&mut obj, "link")?;
    let name = take_string(&mut obj, "link", "name")?;
    let prompt = take_string(&mut obj, "link", "prompt")?;
    let render = take_render(&mut obj, "link")?;
    Ok(Link {
        href,
        rel,
        name,
        prompt,
        render,
        extensions: obj,
    })
}

fn decode_query(node: Json) -> Result<Query> {
    let mut obj = as_object(node, "query")?;
    let (href, rel) = required_link_fields(&mut obj, "query")?;
    let name = take_string(&mut obj, "query", "name")?;
    let prompt = take_string(&mut obj, "query", "prompt")?;
    let render = take_render(&mut obj, "query")?;
    let data = match take_array(&mut obj, "query", "data")? {
        Some(nodes) => Some(decode_each(nodes, decode_property)?),
        None => None,
    };
    Ok(Query {
        href,
        rel,
        name,
        prompt,
        render,
        data,
        extensions: obj,
    })
}

fn decode_property(node: Json) -> Result<Property> {
    let mut obj = as_object(node, "property")?;
    let name = match obj.remove("name") {
        Some(Json::String(name)) => name,
        _ => {
            return Err(Error::Parse(
                "property: missing or malformed required field(s): name".to_string(),
            ))
        }
    };
    let prompt = take_string(&mut obj, "property", "prompt")?;
    let payload = decode_payload(&mut obj, &name)?;
    Ok(Property {
        name,
        prompt,
        payload,
        extensions: obj,
    })
}

/// The payload keys are mutually exclusive on the wire: more than one of
/// `value` / `array` / `object` is a shape defect. None of them is legal and
/// decodes as an absent scalar, as does an explicit null (or composite) under
/// `value`; absence is never modeled as an in-band null.
fn decode_payload(obj: &mut Map<String, Json>, name: &str) -> Result<Payload> {
    let shapes = ["value", "array", "object"]
        .iter()
        .filter(|key| obj.contains_key(**key))
        .count();
    if shapes > 1 {
        return Err(Error::Parse(format!(
            "property \"{name}\": at most one of \"value\", \"array\", \"object\" may be present"
        )));
    }

    if let Some(node) = obj.remove("array") {
        let nodes = match node {
            Json::Array(nodes) => nodes,
            other => {
                return Err(Error::Parse(format!(
                    "property \"{name}\": \"array\" must be an array, found {}",
                    node_kind(&other)
                )))
            }
        };
        let values = nodes
            .iter()
            .filter_map(|node| Value::from_node(Some(node)))
            .collect();
        return Ok(Payload::Array(values));
    }

    if let Some(node) = obj.remove("object") {
        let entries = match node {
            Json::Object(entries) => entries,
            other => {
                return Err(Error::Parse(format!(
                    "property \"{name}\": \"object\" must be an object, found {}",
                    node_kind(&other)
                )))
            }
        };
        let mut object = BTreeMap::new();
        for (key, node) in &entries {
            if let Some(value) = Value::from_node(Some(node)) {
                object.insert(key.clone(), value);
            }
        }
        return Ok(Payload::Object(object));
    }

    let value = obj.remove("value");
    Ok(Payload::Value(Value::from_node(value.as_ref())))
}

/// `href` and `rel` are both required; a single error reports every one of
/// them that is missing or malformed.
fn required_link_fields(obj: &mut Map<String, Json>, what: &str) -> Result<(Url, String)> {
    let mut problems = Vec::new();
    let href = match obj.remove("href") {
        Some(Json::String(raw)) => match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(_) => {
                problems.push("href");
                None
            }
        },
        _ => {
            problems.push("href");
            None
        }
    };
    let rel = match obj.remove("rel") {
        Some(Json::String(rel)) => Some(rel),
        _ => {
            problems.push("rel");
            None
        }
    };
    match (href, rel) {
        (Some(href), Some(rel)) => Ok((href, rel)),
        _ => Err(Error::Parse(format!(
            "{what}: missing or malformed required field(s): {}",
            problems.join(", ")
        ))),
    }
}

fn decode_each<T>(nodes: Vec<Json>, decode: fn(Json) -> Result<T>) -> Result<Vec<T>> {
    nodes.into_iter().map(decode).collect()
}

fn as_object(node: Json, what: &str) -> Result<Map<String, Json>> {
    match node {
        Json::Object(obj) => Ok(obj),
        other => Err(Error::Parse(format!(
            "{what} must be an object, found {}",
            node_kind(&other)
        ))),
    }
}

fn take_string(obj: &mut Map<String, Json>, what: &str, key: &str) -> Result<Option<String>> {
    match obj.remove(key) {
        None => Ok(None),
        Some(Json::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::Parse(format!(
            "{what}: \"{key}\" must be a string, found {}",
            node_kind(&other)
        ))),
    }
}

fn take_url(obj: &mut Map<String, Json>, what: &str, key: &str) -> Result<Option<Url>> {
    match take_string(obj, what, key)? {
        None => Ok(None),
        Some(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(|err| Error::Parse(format!("{what}: \"{key}\" is not a valid URI: {err}"))),
    }
}

fn take_array(obj: &mut Map<String, Json>, what: &str, key: &str) -> Result<Option<Vec<Json>>> {
    match obj.remove(key) {
        None => Ok(None),
        Some(Json::Array(nodes)) => Ok(Some(nodes)),
        Some(other) => Err(Error::Parse(format!(
            "{what}: \"{key}\" must be an array, found {}",
            node_kind(&other)
        ))),
    }
}

fn take_render(obj: &mut Map<String, Json>, what: &str) -> Result<Option<Render>> {
    match take_string(obj, what, "render")? {
        None => Ok(None),
        Some(raw) => Render::from_name(&raw).map(Some).ok_or_else(|| {
            Error::Parse(format!(
                "{what}: \"render\" must be \"link\" or \"image\", found \"{raw}\""
            ))
        }),
    }
}

fn node_kind(node: &Json) -> &'static str {
    match node {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
