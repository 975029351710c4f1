//! `graphql_persisted_manifest`
//! =========
//!
//! _Persisted query manifests for GraphQL clients._
//!
//! The **`graphql_persisted_manifest`** library generates the manifest that a GraphQL client and
//! server share to agree on persisted queries. For each document the client sends, it:
//!
//! - adds a `__typename` field to the document's Selection Sets, as normalized caches require it
//! - prints the document to a single canonical line of text
//! - hashes that text with SHA-256
//!
//! The client then only sends the hash, and the server looks its query up in the manifest. As both
//! sides must derive the same text for the same document, the canonical text is what's hashed and
//! stored, never the document's original source.
//!
//! Documents aren't parsed by this crate. They're handed to it by a host, usually a codegen tool,
//! and with the default `graphql-parser` feature documents parsed by the `graphql_parser` crate
//! can be converted into this crate's AST.
//!
//! [A good place to start is the `manifest` module...](manifest)

pub mod ast;
pub mod error;
pub mod manifest;
pub mod visit;

pub use bumpalo;
pub use manifest::{plugin, DocumentFile, PluginConfig};
