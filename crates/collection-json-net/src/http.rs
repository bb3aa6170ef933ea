//! Blocking HTTP navigator built on `ureq`.
//!
//! Automatic redirect handling is disabled on the agent so the hop count
//! stays under this module's control: every redirect is resolved against the
//! current URL and retried explicitly, and a cyclic chain fails once the
//! bound is hit instead of recursing without limit.

use collection_json::{parse_collection, Collection, MEDIA_TYPE};
use tracing::debug;
use url::Url;

use crate::error::{NavigationError, Result};
use crate::Navigator;

/// The `Accept` header sent with every read request: the collection media
/// type first, anything else as a low-priority fallback.
pub const ACCEPT: &str = "application/vnd.collection+json,*/*;q=0.1";

const DEFAULT_MAX_REDIRECTS: usize = 10;

/// A synchronous [`Navigator`] over HTTP.
pub struct HttpNavigator {
    agent: ureq::Agent,
    max_redirects: usize,
}

impl HttpNavigator {
    pub fn new() -> HttpNavigator {
        HttpNavigator {
            agent: ureq::AgentBuilder::new().redirects(0).build(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Bound the number of redirect hops `follow` will take before giving up.
    pub fn with_max_redirects(mut self, max_redirects: usize) -> HttpNavigator {
        self.max_redirects = max_redirects;
        self
    }
}

impl Default for HttpNavigator {
    fn default() -> HttpNavigator {
        HttpNavigator::new()
    }
}

impl Navigator for HttpNavigator {
    fn follow(&self, href: &Url) -> Result<Collection> {
        let mut url = href.clone();
        for hop in 0..=self.max_redirects {
            debug!(url = %url, hop, "fetching collection");
            let response = match self
                .agent
                .request_url("GET", &url)
                .set("Accept", ACCEPT)
                .call()
            {
                Ok(response) => response,
                Err(ureq::Error::Status(status, response)) => {
                    let body = response.into_string().unwrap_or_default();
                    return Err(NavigationError::Status { status, body });
                }
                Err(err) => return Err(NavigationError::Transport(err.to_string())),
            };

            let status = response.status();
            if (300..400).contains(&status) {
                let location = match response.header("Location") {
                    Some(location) => location.to_string(),
                    None => return Err(NavigationError::MissingLocation),
                };
                url = url
                    .join(&location)
                    .map_err(|_| NavigationError::InvalidLocation(location.clone()))?;
                debug!(target = %url, status, "redirected");
                continue;
            }
            if !(200..300).contains(&status) {
                let body = response.into_string().unwrap_or_default();
                return Err(NavigationError::Status { status, body });
            }

            let content_type = response.header("Content-Type").unwrap_or("").to_string();
            if content_type != MEDIA_TYPE {
                return Err(NavigationError::ContentType {
                    found: content_type,
                });
            }
            let body = response
                .into_string()
                .map_err(|err| NavigationError::Transport(err.to_string()))?;
            return Ok(parse_collection(&body)?);
        }
        Err(NavigationError::TooManyRedirects {
            limit: self.max_redirects,
        })
    }
}
