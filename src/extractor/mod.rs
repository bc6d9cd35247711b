//! Read-only resource inventory of an HTML document.
//!
//! One pre-order walk over the parsed tree, dispatching on element name.
//! No resolver, no mutation, and no failure mode: elements missing the
//! attribute or text node they need are simply not reported.

pub mod schema;

pub use schema::Resource;

use kuchiki::traits::TendrilSink;

use crate::dom::{attribute, first_text_child, traverse::visit};
use schema::FALLBACK_MIME;

const MIME_CSS: &str = "text/css";
const MIME_JS: &str = "text/javascript";

/// Extract all inline and linked resources from an HTML document, in
/// document pre-order.
#[must_use]
pub fn extract_resources(html: &str) -> Vec<Resource> {
    let document = kuchiki::parse_html().one(html);

    let mut resources = Vec::new();

    visit(&document, |node| {
        let Some(element) = node.as_element() else {
            return;
        };

        match element.name.local.as_ref() {
            "style" => {
                if let Some(text) = first_text_child(node) {
                    resources.push(Resource::Inline {
                        mime: MIME_CSS.to_string(),
                        content: text.trim().to_string(),
                    });
                }
            }
            "link" => {
                if let Some(href) = attribute(node, "href") {
                    resources.push(Resource::Linked {
                        mime: mime_of(&href),
                        url: href,
                    });
                }
            }
            "script" => {
                // A sourced script is linked; otherwise its body, if any,
                // is an inline resource. The MIME is fixed either way.
                if let Some(src) = attribute(node, "src") {
                    resources.push(Resource::Linked {
                        mime: MIME_JS.to_string(),
                        url: src,
                    });
                } else if let Some(text) = first_text_child(node) {
                    resources.push(Resource::Inline {
                        mime: MIME_JS.to_string(),
                        content: text.trim().to_string(),
                    });
                }
            }
            "img" => {
                if let Some(src) = attribute(node, "src") {
                    resources.push(Resource::Linked {
                        mime: mime_of(&src),
                        url: src,
                    });
                }
            }
            _ => {}
        }
    });

    resources
}

/// MIME type for a path by extension, falling back to
/// `application/octet-stream`.
fn mime_of(path: &str) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_of_known_and_unknown_extensions() {
        assert_eq!(mime_of("main.css"), "text/css");
        assert_eq!(mime_of("photo.png"), "image/png");
        assert_eq!(mime_of("download"), FALLBACK_MIME);
        // A query string hides the extension from the lookup table.
        assert_eq!(mime_of("main.css?v=2"), FALLBACK_MIME);
    }
}
