//! Flattens an already-sanitized fragment into plain terminal text.
//!
//! Only runs on sanitizer output, so the tag vocabulary is the sanitizer's
//! allow-list: formatting tags are dropped, `<br>` and `<div>` become line
//! breaks, and a link's href is appended after its text.

/// Flatten a sanitized fragment. Not safe for arbitrary HTML; feed it
/// [`Sanitizer::clean`](crate::Sanitizer::clean) output only.
pub fn flatten(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut href: Option<String> = None;
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&unescape(&rest[..open]));
        rest = &rest[open..];
        let Some(close) = rest.find('>') else {
            // Unterminated tag; sanitized input shouldn't produce this, but
            // degrade to literal text rather than lose it.
            out.push_str(&unescape(rest));
            return out;
        };
        apply_tag(&rest[1..close], &mut out, &mut href);
        rest = &rest[close + 1..];
    }
    out.push_str(&unescape(rest));
    out
}

fn apply_tag(tag: &str, out: &mut String, href: &mut Option<String>) {
    let tag = tag.trim();
    if let Some(name) = tag.strip_prefix('/') {
        if name.trim() == "a"
            && let Some(url) = href.take()
            && !url.is_empty()
        {
            out.push_str(&format!(" ({url})"));
        }
        return;
    }

    let name = tag
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("");
    match name {
        "br" => out.push('\n'),
        "div" => {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        "a" => *href = attr_value(tag, "href"),
        _ => {}
    }
}

fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let marker = format!("{attr}=\"");
    let start = tag.find(&marker)? + marker.len();
    let end = tag[start..].find('"')?;
    Some(unescape(&tag[start..start + end]))
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
