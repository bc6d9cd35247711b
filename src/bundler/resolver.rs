//! The caller-supplied resource resolver contract.

/// Answer to a single resource request.
///
/// Exactly one variant applies per request. `Skip` is the universal
/// "do nothing" signal: a resolver that has no mapping for a URL and one
/// that deliberately leaves it alone are indistinguishable here, and both
/// leave the referencing node untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverResult {
    /// Leave the referencing node as it is.
    Skip,
    /// Raw text to embed in place of the reference.
    InlineContent(String),
    /// A replacement URL (for example a data URL) to point the reference at
    /// instead of embedding content.
    UrlReference(String),
}

/// Maps a requested URL to its content, a replacement URL, or `Skip`.
///
/// `origin` is the URL of the document that referenced `url`, or `None`
/// when the entry document itself is being resolved. The resolver owns all
/// policy: joining relative paths against `origin`, refusing protocols it
/// does not serve, content decisions, caching. It is called synchronously,
/// in document order, at most once per candidate node.
pub trait Resolver {
    fn resolve(&mut self, origin: Option<&str>, url: &str) -> ResolverResult;
}

impl<F> Resolver for F
where
    F: FnMut(Option<&str>, &str) -> ResolverResult,
{
    fn resolve(&mut self, origin: Option<&str>, url: &str) -> ResolverResult {
        self(origin, url)
    }
}
