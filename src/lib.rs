//! Inline, rewrite, and inventory the external resources of an HTML
//! document.
//!
//! This crate is meant to be embedded by a build or bundling tool. The
//! caller supplies a [`Resolver`] that maps a requested URL to its content,
//! a replacement URL, or "skip"; [`bundle`] performs the tree walk, decides
//! which elements are eligible, and applies each answer to the tree.
//! [`extract_resources`] is the read-only counterpart: it reports every
//! inline and linked resource a document contains without touching it.
//!
//! ```
//! use htmlpack::{BundleOptions, ResolverResult, bundle};
//!
//! let html = r#"<link rel="stylesheet" href="style.css">"#;
//! let out = bundle(BundleOptions {
//!     entry: "/index.html".to_string(),
//!     resolver: |origin: Option<&str>, url: &str| match (origin, url) {
//!         (None, "/index.html") => ResolverResult::InlineContent(html.to_string()),
//!         (Some(_), "style.css") => {
//!             ResolverResult::InlineContent("body { margin: 0 }".to_string())
//!         }
//!         _ => ResolverResult::Skip,
//!     },
//! })
//! .unwrap();
//! assert!(out.contains("<style>body { margin: 0 }</style>"));
//! ```

pub mod bundler;
pub mod dom;
pub mod extractor;

pub use bundler::{BundleError, BundleOptions, Resolver, ResolverResult, bundle};
pub use dom::mutate::{inline_image, inline_script, inline_style};
pub use extractor::{extract_resources, schema::Resource};
