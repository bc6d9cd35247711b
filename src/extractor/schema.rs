use serde::{Deserialize, Serialize};

/// MIME type reported when extension lookup has no answer.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A resource found in an HTML document.
///
/// Inline resources carry the trimmed text of their originating text node;
/// linked resources carry the URL exactly as written in the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Resource {
    Inline { mime: String, content: String },
    Linked { mime: String, url: String },
}

impl Resource {
    /// The resource's MIME type, whichever variant it is.
    #[must_use]
    pub fn mime(&self) -> &str {
        match self {
            Resource::Inline { mime, .. } | Resource::Linked { mime, .. } => mime,
        }
    }
}
