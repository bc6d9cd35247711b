//! Error types for bundling.
//!
//! Per-resource outcomes are never errors: a resolver signals them as data
//! (`ResolverResult`), and a missing `href`/`src` is simply nothing to do.
//! Only the entry document can fail the whole operation.

/// Error types for bundling
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The entry resolver call returned something other than inline text
    #[error("request for entry file '{url}' failed")]
    EntryUnavailable { url: String },

    /// Writing the serialized document failed
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] std::io::Error),

    /// The serializer produced bytes that were not valid UTF-8
    #[error("serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
