//! Pre-order traversal wrappers over the kuchiki tree.

use kuchiki::NodeRef;

/// Collect every element named `tag` under (and including) `root`, in
/// document pre-order.
///
/// Matches are collected eagerly: callers mutate the tree while walking the
/// result, and detaching a node during iteration invalidates kuchiki's
/// traversal iterators. Fixing the candidate set up front also means a
/// mutation never changes which nodes the same pass still visits.
pub fn find_all(root: &NodeRef, tag: &str) -> Vec<NodeRef> {
    root.inclusive_descendants()
        .filter(|node| {
            node.as_element()
                .is_some_and(|element| element.name.local.as_ref() == tag)
        })
        .collect()
}

/// Visit every node under (and including) `root` in pre-order.
pub fn visit<F: FnMut(&NodeRef)>(root: &NodeRef, mut callback: F) {
    for node in root.inclusive_descendants() {
        callback(&node);
    }
}
