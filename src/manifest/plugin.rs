use super::{ManifestBuilder, PluginConfig};
use crate::ast::Document;
use crate::error::Result;

/// A document as handed over by the host, together with where it was loaded from.
///
/// `document` is `None` for files the host couldn't parse or that don't contain GraphQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentFile<'a> {
    pub location: Option<&'a str>,
    pub document: Option<&'a Document<'a>>,
}

impl<'a> DocumentFile<'a> {
    pub fn new(location: Option<&'a str>, document: &'a Document<'a>) -> Self {
        DocumentFile {
            location,
            document: Some(document),
        }
    }
}

/// Generates the persisted query manifest for `documents`.
///
/// The schema is accepted for compatibility with codegen hosts but isn't read. Documents are
/// processed in order and the manifest is returned in the encoding `config.output` selects. Any
/// error aborts the whole run and no partial manifest is returned.
#[tracing::instrument(skip_all, fields(documents = documents.len()))]
pub fn plugin<S: ?Sized>(
    _schema: &S,
    documents: &[DocumentFile<'_>],
    config: &PluginConfig,
) -> Result<String> {
    let mut builder = ManifestBuilder::new(config.typename_policy);
    for file in documents {
        builder.add_file(file)?;
    }

    let manifest = builder.finish();
    tracing::debug!(entries = manifest.len(), output = ?config.output, "rendering manifest");
    manifest.render(config.output)
}

#[cfg(all(test, feature = "graphql-parser"))]
mod tests {
    use super::*;
    use crate::ast::{ASTContext, DefaultIn};
    use crate::manifest::{OutputFormat, TypenamePolicy};
    use indoc::indoc;

    const SCHEMA: &str = "type Query { foo: Foo } type Foo { bar: String }";

    fn parse<'a>(ctx: &'a ASTContext, source: &str) -> &'a Document<'a> {
        let parsed = graphql_parser::parse_query::<&str>(source).unwrap();
        ctx.alloc(Document::from_graphql_parser(ctx, &parsed).unwrap())
    }

    #[test]
    fn end_to_end_hash() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "query Foo { bar }");
        let config = PluginConfig {
            output: OutputFormat::JsonLines,
            typename_policy: TypenamePolicy::All,
        };
        let output = plugin(SCHEMA, &[DocumentFile::new(None, document)], &config).unwrap();
        assert_eq!(
            output,
            r#"{"hash":"1bd7e5b6c826bf7735cc14946ed5980618b0a94d7ed251c7e3ac2d956bb9f860","query":"query Foo { bar __typename }"}"#
        );
    }

    #[test]
    fn json_lines_per_document() {
        let ctx = ASTContext::new();
        let first = parse(
            &ctx,
            indoc! {"
                query First {
                  foo {
                    bar
                  }
                }
            "},
        );
        let second = parse(&ctx, "fragment FooFields on Foo { bar }");
        let documents = [
            DocumentFile::new(Some("first.graphql"), first),
            DocumentFile {
                location: Some("broken.graphql"),
                document: None,
            },
            DocumentFile::new(Some("second.graphql"), second),
        ];

        let output = plugin(SCHEMA, &documents, &PluginConfig::default()).unwrap();
        let queries = output
            .split('\n')
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["query"].clone())
            .collect::<Vec<_>>();
        assert_eq!(
            queries,
            vec![
                "query First { foo { bar __typename } }",
                "fragment FooFields on Foo { bar __typename }"
            ]
        );
    }

    #[test]
    fn object_dedupes_identical_documents() {
        let ctx = ASTContext::new();
        // Both normalize to the same canonical text
        let a = parse(&ctx, "{ foo { bar } }");
        let b = parse(&ctx, "query {\n  foo { bar }\n}");
        let config = PluginConfig {
            output: OutputFormat::Object,
            ..PluginConfig::default()
        };

        let output = plugin(
            SCHEMA,
            &[DocumentFile::new(None, a), DocumentFile::new(None, b)],
            &config,
        )
        .unwrap();
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&output).unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(
            object.values().next().unwrap(),
            "{ foo { bar __typename } }"
        );
    }

    #[test]
    fn no_documents() {
        let ctx = ASTContext::new();
        let empty = ctx.alloc(Document::default_in(&ctx.arena));
        let documents = [DocumentFile::new(None, empty)];

        assert_eq!(plugin(&(), &documents, &PluginConfig::default()).unwrap(), "");
        let config = PluginConfig {
            output: OutputFormat::Object,
            ..PluginConfig::default()
        };
        assert_eq!(plugin(&(), &[], &config).unwrap(), "{}");
    }
}
