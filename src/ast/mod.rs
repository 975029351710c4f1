//! # GraphQL Query Language AST
//!
//! The `graphql_persisted_manifest::ast` module contains the executable GraphQL query language AST
//! that documents are normalized on, and the trait to print it into canonical source text.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`PrintNode`], a trait using which AST Nodes are printed into canonical source text
//! - `Document::from_graphql_parser`, which copies a document parsed by the `graphql_parser`
//!   crate onto an AST Context (enabled by the `graphql-parser` feature)
//!
//! This crate doesn't parse GraphQL source text itself. Documents are handed to it already parsed.
//!
//! ```
//! use graphql_persisted_manifest::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Convert a document that a host parser produced
//! let parsed = graphql_parser::parse_query::<&str>("query Foo { bar }").unwrap();
//! let ast = Document::from_graphql_parser(&ctx, &parsed).unwrap();
//!
//! // Print the Document node to its canonical text
//! assert_eq!(ast.print(), "query Foo { bar }");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
#[cfg(feature = "graphql-parser")]
mod from_graphql_parser;
mod printer;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use printer::PrintNode;
