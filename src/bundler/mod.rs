//! Resource bundling: resolve every external reference in an HTML document
//! and mutate the tree accordingly.
//!
//! The document is parsed once, processed in three fixed passes
//! (`link` → `script` → `img`, each over a candidate set collected up front
//! in document pre-order), and serialized once. All resolution policy lives
//! in the caller's [`Resolver`]; this module only decides which elements
//! are eligible and how an answer is applied.

pub mod errors;
pub mod resolver;

pub use errors::BundleError;
pub use resolver::{Resolver, ResolverResult};

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::dom::mutate::{inline_image, inline_script, inline_style};
use crate::dom::{attribute, traverse::find_all};

/// Options for [`bundle`].
pub struct BundleOptions<R> {
    /// URL of the initial HTML document, passed to the resolver with no
    /// origin.
    pub entry: String,
    /// Resolver consulted for the entry and for every candidate reference.
    pub resolver: R,
}

/// Transform an HTML document, inlining or rewriting its external resources.
///
/// Fails only when the entry itself does not resolve to inline text; every
/// per-resource outcome, including `Skip`, is applied silently.
pub fn bundle<R: Resolver>(options: BundleOptions<R>) -> Result<String, BundleError> {
    let BundleOptions { entry, mut resolver } = options;

    let html = match resolver.resolve(None, &entry) {
        ResolverResult::InlineContent(text) => text,
        ResolverResult::Skip | ResolverResult::UrlReference(_) => {
            return Err(BundleError::EntryUnavailable { url: entry });
        }
    };

    let document = kuchiki::parse_html().one(html);

    process_links(&document, &entry, &mut resolver);
    process_scripts(&document, &entry, &mut resolver);
    process_images(&document, &entry, &mut resolver);

    serialize(&document)
}

fn process_links<R: Resolver>(document: &NodeRef, entry: &str, resolver: &mut R) {
    for link in find_all(document, "link") {
        // Preload/prefetch hints have no runtime meaning once resources are
        // resolved; drop them without consulting the resolver.
        if is_resource_hint(&link) {
            log::debug!("removing preload/prefetch link");
            link.detach();
            continue;
        }

        let Some(href) = attribute(&link, "href") else {
            continue;
        };

        inline_style(&link, resolver.resolve(Some(entry), &href));
    }
}

fn process_scripts<R: Resolver>(document: &NodeRef, entry: &str, resolver: &mut R) {
    for script in find_all(document, "script") {
        // No src means the script is already inline.
        let Some(src) = attribute(&script, "src") else {
            continue;
        };

        inline_script(&script, resolver.resolve(Some(entry), &src));
    }
}

fn process_images<R: Resolver>(document: &NodeRef, entry: &str, resolver: &mut R) {
    for image in find_all(document, "img") {
        let Some(src) = attribute(&image, "src") else {
            continue;
        };

        inline_image(&image, resolver.resolve(Some(entry), &src));
    }
}

/// A `link` whose `rel` is exactly `preload` or `prefetch`.
fn is_resource_hint(link: &NodeRef) -> bool {
    matches!(
        attribute(link, "rel").as_deref(),
        Some("preload" | "prefetch")
    )
}

fn serialize(document: &NodeRef) -> Result<String, BundleError> {
    let mut output = Vec::new();
    document.serialize(&mut output)?;
    Ok(String::from_utf8(output)?)
}
