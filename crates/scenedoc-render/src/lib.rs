//! scenedoc Render - Markdown documents from parsed scenes
//!
//! Rebuilds the node tree, resolves resource references, filters
//! properties down to the relevant ones and describes signal connections
//! in plain sentences.

mod connection;
mod document;
mod filter;
mod value;

pub use connection::{format_connection, Connection};
pub use document::{join_documents, render_markdown, DocumentRenderer, DOCUMENT_SEPARATOR};
pub use filter::{
    RelevanceFilter, DEFAULT_KEYS, DEFAULT_MEDIA_EXTENSIONS, DEFAULT_RESOURCE_EXTENSIONS,
};
pub use value::{resolve_value, unquote};
