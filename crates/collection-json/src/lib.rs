//! # collection-json
//!
//! Typed, immutable document model and parser for **Collection+JSON**
//! (`application/vnd.collection+json`), the hypermedia media type describing
//! a collection of items, hyperlinks, read-queries, a write-template, and an
//! optional error payload.
//!
//! The model overlays the generic `serde_json` tree: decoding produces typed
//! values that own independent copies of their data, encoding rebuilds the
//! tree losslessly, and any field outside the reserved schema rides along
//! verbatim as an extension. Numbers keep their exact decimal representation
//! in both directions.
//!
//! ## Quick start
//!
//! ```rust
//! use collection_json::parse_collection;
//!
//! let doc = r#"{"collection":{"version":"1.0","href":"http://example.org/friends/",
//!   "items":[{"href":"http://example.org/friends/jdoe",
//!             "data":[{"name":"full-name","value":"J. Doe"}]}]}}"#;
//!
//! let collection = parse_collection(doc).unwrap();
//! let item = collection.first_item().unwrap();
//! let full_name = item.data_as_map()["full-name"].value().unwrap().as_string().unwrap().to_string();
//! assert_eq!(full_name, "J. Doe");
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — document text / tree → typed model
//! - [`encoder`] — typed model → document tree / text
//! - [`collection`], [`item`], [`template`], [`query`], [`link`],
//!   [`property`], [`value`] — the document model
//! - [`data`] — shared operations over ordered property lists
//! - [`error`] — error types

pub mod collection;
pub mod data;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod item;
pub mod link;
pub mod property;
pub mod query;
pub mod template;
pub mod value;

pub use collection::{Collection, CollectionBuilder, ErrorMessage, VERSION};
pub use decoder::{collection_from_value, parse_collection, parse_template, template_from_value};
pub use encoder::{write_collection, write_item, write_template};
pub use error::{Error, Result};
pub use item::{Item, ItemBuilder};
pub use link::{Link, Render};
pub use property::Property;
pub use query::Query;
pub use template::Template;
pub use value::Value;

/// The Collection+JSON media type, as it must appear in a response's
/// `Content-Type` header to be parsed as a collection.
pub const MEDIA_TYPE: &str = "application/vnd.collection+json";
