//! # Persisted Query Manifests
//!
//! The `graphql_persisted_manifest::manifest` module turns GraphQL documents into a persisted query
//! manifest, a list of each document's canonical text keyed by its SHA-256 hash.
//!
//! Every document goes through the same steps:
//! - [`AddTypename`] adds `__typename` to its Selection Sets, according to a [`TypenamePolicy`]
//! - the result is printed to canonical text using [`PrintNode`](crate::ast::PrintNode)
//! - [`sha256_hex`] hashes that text
//!
//! [`ManifestBuilder`] runs these steps and collects a [`Manifest`], which renders to one of the
//! [`OutputFormat`]s. [`plugin`] wraps all of it for codegen hosts.
//!
//! ```
//! use graphql_persisted_manifest::{ast::*, manifest::*};
//!
//! let ctx = ASTContext::new();
//! let parsed = graphql_parser::parse_query::<&str>("query Foo { bar }").unwrap();
//! let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();
//!
//! let mut builder = ManifestBuilder::new(TypenamePolicy::All);
//! builder.add_document(&document).unwrap();
//! let manifest = builder.finish();
//!
//! assert_eq!(
//!     manifest.render(OutputFormat::JsonLines).unwrap(),
//!     r#"{"hash":"1bd7e5b6c826bf7735cc14946ed5980618b0a94d7ed251c7e3ac2d956bb9f860","query":"query Foo { bar __typename }"}"#
//! );
//! ```

mod builder;
mod config;
mod hash;
mod output;
mod plugin;
mod typename;

pub use builder::ManifestBuilder;
pub use config::PluginConfig;
pub use hash::sha256_hex;
pub use output::{Manifest, ManifestEntry, OutputFormat};
pub use plugin::{plugin, DocumentFile};
pub use typename::{AddTypename, TypenamePolicy};
