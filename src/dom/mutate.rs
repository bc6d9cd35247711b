//! Per-tag mutation rules: how a resolver's answer is applied to a node.
//!
//! Inline content replaces a `link`/`script` with a freshly built
//! attribute-less `style`/`script` element whose sole child is a text node
//! holding the content verbatim. A URL reference rewrites the node's
//! `href`/`src` attribute in place and drops any children, since a linked
//! reference carries no content. `Skip` is always a no-op.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::bundler::ResolverResult;

/// Apply a resolver outcome to a `link` element.
pub fn inline_style(node: &NodeRef, resolved: ResolverResult) {
    match resolved {
        ResolverResult::Skip => {}
        ResolverResult::InlineContent(css) => {
            log::debug!("inlining stylesheet into <style> element");
            replace_with_text_element(node, "style", css);
        }
        ResolverResult::UrlReference(url) => {
            log::debug!("rewriting stylesheet link to {url}");
            rewrite_reference(node, "href", url);
        }
    }
}

/// Apply a resolver outcome to a `script` element.
pub fn inline_script(node: &NodeRef, resolved: ResolverResult) {
    match resolved {
        ResolverResult::Skip => {}
        ResolverResult::InlineContent(js) => {
            log::debug!("inlining script body");
            replace_with_text_element(node, "script", js);
        }
        ResolverResult::UrlReference(url) => {
            log::debug!("rewriting script src to {url}");
            rewrite_reference(node, "src", url);
        }
    }
}

/// Apply a resolver outcome to an `img` element.
///
/// Images cannot hold text content, so both inline content and a URL
/// reference land in the `src` attribute; a caller that chooses to inline
/// an image supplies an already-encoded representation such as a data URL.
pub fn inline_image(node: &NodeRef, resolved: ResolverResult) {
    let src = match resolved {
        ResolverResult::Skip => return,
        ResolverResult::InlineContent(data) => data,
        ResolverResult::UrlReference(url) => url,
    };

    log::debug!("rewriting image src");
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().insert("src", src);
    }
}

/// Swap `node` for a new attribute-less element named `tag` whose sole
/// child is a text node holding `text`.
///
/// An empty shell element is parsed and filled with the text node
/// afterwards, so `text` never passes through the parser and is embedded
/// byte-for-byte. The replacement lands at the same position in the
/// parent's child list before the original is detached.
fn replace_with_text_element(node: &NodeRef, tag: &str, text: String) {
    let shell = kuchiki::parse_html().one(format!("<{tag}></{tag}>"));
    let Ok(replacement) = shell.select_first(tag) else {
        return;
    };
    let replacement = replacement.as_node().clone();
    replacement.detach();
    replacement.append(NodeRef::new_text(text));

    node.insert_before(replacement);
    node.detach();
}

/// Point `node`'s `attr` at `url` and drop its children.
fn rewrite_reference(node: &NodeRef, attr: &str, url: String) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().insert(attr, url);
    }

    // Children are collected before detaching; see dom::traverse::find_all.
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{attribute, first_text_child};

    fn first(document: &NodeRef, selector: &str) -> Option<NodeRef> {
        document
            .select_first(selector)
            .ok()
            .map(|node| node.as_node().clone())
    }

    #[test]
    fn inline_style_replaces_link_with_style_element() {
        let document =
            kuchiki::parse_html().one(r#"<head><link rel="stylesheet" href="a.css"></head>"#);
        let link = first(&document, "link").unwrap();

        inline_style(&link, ResolverResult::InlineContent("  p { margin: 0 }  ".into()));

        assert!(first(&document, "link").is_none());
        let style = first(&document, "style").unwrap();
        assert!(style.as_element().unwrap().attributes.borrow().map.is_empty());
        // Content is embedded verbatim, whitespace included.
        assert_eq!(first_text_child(&style).as_deref(), Some("  p { margin: 0 }  "));
    }

    #[test]
    fn inline_style_replacement_keeps_tree_position() {
        let document = kuchiki::parse_html()
            .one(r#"<head><meta charset="utf-8"><link href="a.css"><title>t</title></head>"#);
        let link = first(&document, "link").unwrap();

        inline_style(&link, ResolverResult::InlineContent("css".into()));

        let head = first(&document, "head").unwrap();
        let tags: Vec<String> = head
            .children()
            .filter_map(|child| {
                child
                    .as_element()
                    .map(|element| element.name.local.as_ref().to_string())
            })
            .collect();
        assert_eq!(tags, ["meta", "style", "title"]);
    }

    #[test]
    fn url_reference_rewrites_href_and_drops_children() {
        let document = kuchiki::parse_html().one(r#"<head><link href="a.css"></head>"#);
        let link = first(&document, "link").unwrap();
        link.append(NodeRef::new_text("stale"));

        inline_style(&link, ResolverResult::UrlReference("data:text/css,p{}".into()));

        assert_eq!(attribute(&link, "href").as_deref(), Some("data:text/css,p{}"));
        assert_eq!(link.children().count(), 0);
    }

    #[test]
    fn inline_script_replaces_sourced_script() {
        let document = kuchiki::parse_html().one(r#"<script src="m.js"></script>"#);
        let script = first(&document, "script").unwrap();

        inline_script(&script, ResolverResult::InlineContent("alert(1)".into()));

        let script = first(&document, "script").unwrap();
        assert_eq!(attribute(&script, "src"), None);
        assert_eq!(first_text_child(&script).as_deref(), Some("alert(1)"));
    }

    #[test]
    fn inline_image_sets_src_for_both_outcomes() {
        let document = kuchiki::parse_html().one(r#"<img src="a.png"><img src="b.png">"#);
        let images = crate::dom::traverse::find_all(&document, "img");

        inline_image(&images[0], ResolverResult::InlineContent("data:image/png,x".into()));
        inline_image(&images[1], ResolverResult::UrlReference("cdn/b.png".into()));

        assert_eq!(attribute(&images[0], "src").as_deref(), Some("data:image/png,x"));
        assert_eq!(attribute(&images[1], "src").as_deref(), Some("cdn/b.png"));
    }

    #[test]
    fn skip_leaves_the_node_untouched() {
        let document = kuchiki::parse_html().one(r#"<head><link href="a.css"></head>"#);
        let link = first(&document, "link").unwrap();

        inline_style(&link, ResolverResult::Skip);

        assert_eq!(attribute(&link, "href").as_deref(), Some("a.css"));
        assert!(first(&document, "style").is_none());
    }
}
