use std::collections::HashSet;

use ammonia::{Builder, UrlRelative};
use url::Url;

use crate::error::RenderError;

/// Tags permitted in entry markup: basic formatting and links, nothing
/// executable.
const ALLOWED_TAGS: &[&str] = &[
    "a", "em", "i", "b", "strong", "span", "sup", "sub", "br", "div",
];

const ALLOWED_ATTRS: &[&str] = &["href", "dir", "class", "data-ref", "style"];

/// Allow-list HTML sanitizer for the markup-bearing entry fields (`notes`,
/// `derivatives`, `language_reference`, sense definitions). This is the only
/// boundary through which embedded markup passes; everything else is
/// rendered literally.
///
/// Relative `href`s are rewritten against the lexicon's web origin; absolute
/// `http(s)` links are left untouched.
pub struct Sanitizer {
    base: Url,
}

impl Sanitizer {
    pub fn new(web_origin: &str) -> Result<Self, RenderError> {
        Ok(Self {
            base: Url::parse(web_origin)?,
        })
    }

    pub fn clean(&self, fragment: &str) -> String {
        let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();
        let attrs: HashSet<&str> = ALLOWED_ATTRS.iter().copied().collect();

        Builder::new()
            .tags(tags)
            .generic_attributes(attrs)
            .link_rel(None)
            .url_relative(UrlRelative::RewriteWithBase(self.base.clone()))
            .clean(fragment)
            .to_string()
    }
}
