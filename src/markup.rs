//! Markup generation contract and the default HTML renderer.
//!
//! Presenters never build tags by hand. They ask a [`RenderContext`] for a
//! fragment, so the host view layer decides how tags are produced and escaped.
//! [`HtmlRenderer`] is the stand-alone implementation used by the CLI and tests.

use std::fmt::Write;

use log::trace;

use crate::logutil::escape_log;
use crate::validation::{validate_attr_name, validate_tag_name, MarkupError};

/// Capability for producing a markup fragment from a tag, its text and attributes.
pub trait RenderContext {
    /// Render `<tag attrs...>text</tag>`. Attributes are emitted in the given order.
    fn content_tag(
        &self,
        tag: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<String, MarkupError>;
}

impl<R: RenderContext + ?Sized> RenderContext for &R {
    fn content_tag(
        &self,
        tag: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<String, MarkupError> {
        (**self).content_tag(tag, text, attrs)
    }
}

/// Escape text for use in HTML element content or a quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Plain HTML renderer: validates identifiers, escapes text and values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl RenderContext for HtmlRenderer {
    fn content_tag(
        &self,
        tag: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<String, MarkupError> {
        validate_tag_name(tag)?;

        let mut out = String::with_capacity(tag.len() * 2 + text.len() + 16);
        out.push('<');
        out.push_str(tag);
        for (name, value) in attrs {
            validate_attr_name(name)?;
            // Writing to a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');
        out.push_str(&escape_html(text));
        let _ = write!(out, "</{}>", tag);

        trace!("content_tag rendered {}", escape_log(&out));
        Ok(out)
    }
}
