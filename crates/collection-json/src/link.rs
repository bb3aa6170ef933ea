//! Typed hyperlinks.

use serde_json::Map;
use url::Url;

/// How a link's target is meant to be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Link,
    Image,
}

impl Render {
    pub fn as_str(self) -> &'static str {
        match self {
            Render::Link => "link",
            Render::Image => "image",
        }
    }

    /// The wire names are closed: anything other than `link` or `image` is
    /// rejected by the parser.
    pub fn from_name(name: &str) -> Option<Render> {
        match name {
            "link" => Some(Render::Link),
            "image" => Some(Render::Image),
            _ => None,
        }
    }
}

/// A hyperlink carried by a collection or an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub(crate) href: Url,
    pub(crate) rel: String,
    pub(crate) name: Option<String>,
    pub(crate) prompt: Option<String>,
    pub(crate) render: Option<Render>,
    pub(crate) extensions: Map<String, serde_json::Value>,
}

impl Link {
    pub fn new(href: Url, rel: impl Into<String>) -> Link {
        Link {
            href,
            rel: rel.into(),
            name: None,
            prompt: None,
            render: None,
            extensions: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Link {
        self.name = Some(name.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Link {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_render(mut self, render: Render) -> Link {
        self.render = Some(render);
        self
    }

    pub fn with_extension(mut self, name: impl Into<String>, value: serde_json::Value) -> Link {
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

    pub fn extension(&self, name: &str) -> Option<&serde_json::Value> {
        self.extensions.get(name)
    }
}
