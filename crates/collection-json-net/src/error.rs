//! Error types for link navigation.

use thiserror::Error;

/// Failures while following a collection link.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// The request could not be carried out at all (connection refused, DNS
    /// failure, broken stream).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success, non-redirect status. The
    /// response body rides along as the failure detail.
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    /// A redirect response carried no `Location` header to follow.
    #[error("redirect response carried no Location header")]
    MissingLocation,

    /// A redirect's `Location` header did not resolve to a valid URI.
    #[error("redirect target is not a valid URI: {0}")]
    InvalidLocation(String),

    /// The response content type is not exactly the collection media type.
    #[error("response content type is \"{found}\", expected \"application/vnd.collection+json\"")]
    ContentType { found: String },

    /// The redirect hop bound was exceeded; cyclic redirects end here
    /// instead of recursing forever.
    #[error("gave up after {limit} redirect hops")]
    TooManyRedirects { limit: usize },

    /// The fetched body was not a well-formed collection document.
    #[error("fetched document failed to parse: {0}")]
    Document(#[from] collection_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavigationError>;
