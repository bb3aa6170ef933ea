//! # collection-json-net
//!
//! Transport glue for [`collection-json`](collection_json): follows
//! hyperlinks and hands the fetched documents to the parser.
//!
//! The document model itself performs no I/O. This crate supplies the
//! [`Navigator`] contract and a blocking HTTP implementation,
//! [`HttpNavigator`], which advertises the collection media type, follows
//! redirects up to a configurable hop bound, and only parses responses whose
//! content type is exactly `application/vnd.collection+json`.
//!
//! The write payloads a client would POST or PUT are produced by the core
//! crate (`write_template`, `write_item`); performing those operations is
//! out of scope here.

pub mod error;
pub mod http;

pub use error::{NavigationError, Result};
pub use http::{HttpNavigator, ACCEPT};

use collection_json::Collection;
use url::Url;

/// Follows collection links on behalf of the document model.
pub trait Navigator {
    /// Fetch the collection document behind `href`.
    fn follow(&self, href: &Url) -> Result<Collection>;
}
