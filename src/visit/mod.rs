//! # Transforming GraphQL ASTs
//!
//! The `graphql_persisted_manifest::visit` module contains utilities to transform GraphQL ASTs.
//! Its main part is the [Folder] trait, which is used to implement a folder that rewrites an AST
//! into a new copy of it.
//!
//! Folding starts on any node implementing the [`FoldNode`] trait, usually a [`Document`](crate::ast::Document).
//! The input AST is never mutated. Instead, the folder builds a new AST from the bottom up on the
//! [`ASTContext`](crate::ast::ASTContext) that's passed to `fold`, so each callback receives a node
//! whose children have already been folded.
//!
//! A folder that appends a `__typename` field to each fragment definition may look like such:
//!
//! ```
//! use graphql_persisted_manifest::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct TagFragments {}
//!
//! impl<'a> Folder<'a> for TagFragments {
//!     fn fragment(
//!         &mut self,
//!         ctx: &'a ASTContext,
//!         fragment: FragmentDefinition<'a>,
//!         _info: &VisitInfo,
//!     ) -> Result<FragmentDefinition<'a>> {
//!         let selection_set = fragment
//!             .selection_set
//!             .with_selection(ctx, Field::typename(ctx).into());
//!         Ok(FragmentDefinition {
//!             selection_set,
//!             ..fragment
//!         })
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let parsed = graphql_parser::parse_query::<&str>("fragment F on User { id }").unwrap();
//! let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();
//! let output = document.fold(&ctx, &mut TagFragments::default()).unwrap();
//! assert_eq!(output.print(), "fragment F on User { id __typename }");
//! ```
//!
//! [More information on the Folder trait](Folder)

mod folder;
mod path;

pub use folder::*;
pub use path::*;
