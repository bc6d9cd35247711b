//! DOM access helpers shared by the bundler and the extractor.
//!
//! Everything here is a thin layer over the kuchiki tree: attribute reads,
//! pre-order traversal, and the per-tag mutation rules that apply a
//! resolver's answer to a node.

pub mod mutate;
pub mod traverse;

use kuchiki::NodeRef;

/// Read an attribute off an element node, if present.
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(ToString::to_string)
}

/// First text-node child of `node`, in document order.
pub fn first_text_child(node: &NodeRef) -> Option<String> {
    node.children()
        .find_map(|child| child.as_text().map(|text| text.borrow().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink;

    #[test]
    fn attribute_reads_present_and_absent_names() {
        let document = kuchiki::parse_html().one(r#"<img src="photo.jpg">"#);
        let img = document.select_first("img").unwrap().as_node().clone();

        assert_eq!(attribute(&img, "src").as_deref(), Some("photo.jpg"));
        assert_eq!(attribute(&img, "alt"), None);
    }

    #[test]
    fn first_text_child_skips_element_children() {
        let document = kuchiki::parse_html().one("<div><span>a</span>b</div>");
        let div = document.select_first("div").unwrap().as_node().clone();

        assert_eq!(first_text_child(&div).as_deref(), Some("b"));
    }
}
