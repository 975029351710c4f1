use crate::ast::*;
use bumpalo::collections::Vec;
use std::mem;

pub use super::{Path, PathSegment};
pub use crate::error::{Error, Result};

/// Information on the node that's currently being folded.
#[derive(Debug, Clone)]
pub struct VisitInfo {
    /// The path from the Document to the current node.
    pub path: Path,
    /// The kind of node that owns the Selection Set currently being folded, e.g.
    /// [`ASTKind::OperationDefinition`] for an operation's root Selection Set.
    pub parent: ASTKind,
}

impl Default for VisitInfo {
    fn default() -> Self {
        VisitInfo {
            path: Path::default(),
            parent: ASTKind::Document,
        }
    }
}

impl VisitInfo {
    /// Checks whether the Selection Set currently being folded is the root Selection Set of an
    /// operation.
    #[inline]
    pub fn is_operation_root(&self) -> bool {
        self.parent == ASTKind::OperationDefinition
    }
}

pub(crate) mod private {
    use super::{ASTContext, Folder, Result, VisitInfo};

    pub trait FoldNode<'a>: Sized {
        fn fold_with_ctx<F: Folder<'a>>(
            &self,
            info: &mut VisitInfo,
            ctx: &'a ASTContext,
            folder: &mut F,
        ) -> Result<Self>;
    }
}

/// Trait for a folder that carries methods that are called as callback while AST nodes
/// implementing the folder pattern are traversed and copied.
///
/// A Folder traverses a GraphQL AST depth-first and builds a new AST from the bottom up. Each
/// callback receives a node that has just been built on the new [`ASTContext`], with all of its
/// children already folded, and returns the node that's placed into the new AST in its stead. The
/// input AST is only ever read and stays untouched.
///
/// All callbacks have a default no-op implementation that returns the input AST Node and hence
/// only creates an unchanged copy of the AST.
/// Returning an error from a callback stops the folding, and the error is returned as is.
///
/// This pattern is applicable to any AST node that implements the [`FoldNode`] trait.
pub trait Folder<'a> {
    /// Folds an [`OperationDefinition`] after its Selection Set has been folded.
    #[inline]
    fn operation(
        &mut self,
        _ctx: &'a ASTContext,
        operation: OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> Result<OperationDefinition<'a>> {
        Ok(operation)
    }

    /// Folds a [`FragmentDefinition`] after its Selection Set has been folded.
    #[inline]
    fn fragment(
        &mut self,
        _ctx: &'a ASTContext,
        fragment: FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> Result<FragmentDefinition<'a>> {
        Ok(fragment)
    }

    /// Folds a [`SelectionSet`] after all of its selections have been folded.
    ///
    /// `info.parent` identifies the kind of node the Selection Set belongs to.
    #[inline]
    fn selection_set(
        &mut self,
        _ctx: &'a ASTContext,
        selection_set: SelectionSet<'a>,
        _info: &VisitInfo,
    ) -> Result<SelectionSet<'a>> {
        Ok(selection_set)
    }

    /// Folds a [Field] after its Selection Set has been folded.
    #[inline]
    fn field(
        &mut self,
        _ctx: &'a ASTContext,
        field: Field<'a>,
        _info: &VisitInfo,
    ) -> Result<Field<'a>> {
        Ok(field)
    }

    /// Folds an [`InlineFragment`] after its Selection Set has been folded.
    #[inline]
    fn inline_fragment(
        &mut self,
        _ctx: &'a ASTContext,
        inline_fragment: InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> Result<InlineFragment<'a>> {
        Ok(inline_fragment)
    }

    /// Folds a [`FragmentSpread`] node.
    #[inline]
    fn fragment_spread(
        &mut self,
        _ctx: &'a ASTContext,
        fragment_spread: FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> Result<FragmentSpread<'a>> {
        Ok(fragment_spread)
    }
}

/// Trait for folding AST Nodes of a GraphQL language document in depth-first order using a
/// custom folder. This transforms the AST while creating a new copy of it.
///
/// The folder must implement the [Folder] trait.
pub trait FoldNode<'a>: private::FoldNode<'a> {
    /// Visit the GraphQL AST node tree recursively in depth-first order and create a transformed
    /// copy of it using the given folder.
    ///
    /// This will return a [Result] containing a reference to the new copied AST Node allocated on
    /// the given AST Context's arena or an error.
    fn fold<F: Folder<'a>>(&self, ctx: &'a ASTContext, folder: &mut F) -> Result<&'a Self> {
        let mut info = VisitInfo::default();
        Ok(ctx.alloc(self.fold_with_ctx(&mut info, ctx, folder)?))
    }
}

impl<'a, T: private::FoldNode<'a>> FoldNode<'a> for T {}

/// Folds the Selection Set owned by a node of the `parent` kind.
#[inline]
fn fold_owned_selection_set<'a, F: Folder<'a>>(
    selection_set: &SelectionSet<'a>,
    parent: ASTKind,
    info: &mut VisitInfo,
    ctx: &'a ASTContext,
    folder: &mut F,
) -> Result<SelectionSet<'a>> {
    let previous = mem::replace(&mut info.parent, parent);
    info.path.push(PathSegment::SelectionSet);
    let folded = private::FoldNode::fold_with_ctx(selection_set, info, ctx, folder);
    info.path.pop();
    info.parent = previous;
    folded
}

impl<'a> private::FoldNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let fragment_spread = FragmentSpread {
            name: self.name,
            directives: self.directives.clone_in(&ctx.arena),
        };
        folder.fragment_spread(ctx, fragment_spread, info)
    }
}

impl<'a> private::FoldNode<'a> for Field<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let selection_set =
            fold_owned_selection_set(&self.selection_set, ASTKind::Field, info, ctx, folder)?;
        let field = Field {
            alias: self.alias,
            name: self.name,
            arguments: self.arguments.clone_in(&ctx.arena),
            directives: self.directives.clone_in(&ctx.arena),
            selection_set,
        };
        folder.field(ctx, field, info)
    }
}

impl<'a> private::FoldNode<'a> for InlineFragment<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let selection_set = fold_owned_selection_set(
            &self.selection_set,
            ASTKind::InlineFragment,
            info,
            ctx,
            folder,
        )?;
        let fragment = InlineFragment {
            type_condition: self.type_condition,
            directives: self.directives.clone_in(&ctx.arena),
            selection_set,
        };
        folder.inline_fragment(ctx, fragment, info)
    }
}

impl<'a> private::FoldNode<'a> for Selection<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        Ok(match self {
            Selection::Field(field) => field.fold_with_ctx(info, ctx, folder)?.into(),
            Selection::FragmentSpread(spread) => spread.fold_with_ctx(info, ctx, folder)?.into(),
            Selection::InlineFragment(fragment) => {
                fragment.fold_with_ctx(info, ctx, folder)?.into()
            }
        })
    }
}

impl<'a> private::FoldNode<'a> for SelectionSet<'a> {
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let mut selections = Vec::with_capacity_in(self.selections.len(), &ctx.arena);
        for (index, selection) in self.selections.iter().enumerate() {
            info.path.push(PathSegment::Index(index));
            let folded = selection.fold_with_ctx(info, ctx, folder);
            info.path.pop();
            selections.push(folded?);
        }
        folder.selection_set(ctx, SelectionSet { selections }, info)
    }
}

impl<'a> private::FoldNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let selection_set = fold_owned_selection_set(
            &self.selection_set,
            ASTKind::FragmentDefinition,
            info,
            ctx,
            folder,
        )?;
        let fragment = FragmentDefinition {
            name: self.name,
            type_condition: self.type_condition,
            directives: self.directives.clone_in(&ctx.arena),
            selection_set,
        };
        folder.fragment(ctx, fragment, info)
    }
}

impl<'a> private::FoldNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let selection_set = fold_owned_selection_set(
            &self.selection_set,
            ASTKind::OperationDefinition,
            info,
            ctx,
            folder,
        )?;
        let operation = OperationDefinition {
            operation: self.operation,
            name: self.name,
            variable_definitions: self.variable_definitions.clone_in(&ctx.arena),
            directives: self.directives.clone_in(&ctx.arena),
            selection_set,
        };
        folder.operation(ctx, operation, info)
    }
}

impl<'a> private::FoldNode<'a> for Document<'a> {
    fn fold_with_ctx<F: Folder<'a>>(
        &self,
        info: &mut VisitInfo,
        ctx: &'a ASTContext,
        folder: &mut F,
    ) -> Result<Self> {
        let mut definitions = Vec::with_capacity_in(self.definitions.len(), &ctx.arena);
        for (index, definition) in self.definitions.iter().enumerate() {
            info.path.push(PathSegment::Index(index));
            let folded = match definition {
                Definition::Operation(operation) => operation
                    .fold_with_ctx(info, ctx, folder)
                    .map(Definition::from),
                Definition::Fragment(fragment) => fragment
                    .fold_with_ctx(info, ctx, folder)
                    .map(Definition::from),
            };
            info.path.pop();
            definitions.push(folded?);
        }
        Ok(Document { definitions })
    }
}

#[cfg(all(test, feature = "graphql-parser"))]
mod tests {
    use super::*;

    fn parse<'a>(ctx: &'a ASTContext, source: &str) -> &'a Document<'a> {
        let parsed = graphql_parser::parse_query::<&str>(source).unwrap();
        ctx.alloc(Document::from_graphql_parser(ctx, &parsed).unwrap())
    }

    #[derive(Default)]
    struct FoldNoop {}
    impl<'a> Folder<'a> for FoldNoop {}

    #[test]
    fn noop_copies_document() {
        let ctx = ASTContext::new();
        let query = "query Q($a: Int) { a(x: $a) { ...F ... on T { b } } } fragment F on T { c }";
        let ast = parse(&ctx, query);
        let output = ast.fold(&ctx, &mut FoldNoop::default()).unwrap();
        assert_eq!(output, ast);
        assert_eq!(
            output.print(),
            "query Q($a: Int) { a(x: $a) { ...F ... on T { b } } } fragment F on T { c }"
        );
    }

    #[derive(Default)]
    struct RecordSelectionSets {
        seen: std::vec::Vec<(String, ASTKind)>,
    }

    impl<'a> Folder<'a> for RecordSelectionSets {
        fn selection_set(
            &mut self,
            _ctx: &'a ASTContext,
            selection_set: SelectionSet<'a>,
            info: &VisitInfo,
        ) -> Result<SelectionSet<'a>> {
            self.seen.push((info.path.to_string(), info.parent));
            Ok(selection_set)
        }
    }

    #[test]
    fn selection_sets_know_their_parent() {
        let ctx = ASTContext::new();
        let ast = parse(&ctx, "{ a { b } ... on T { c } } fragment F on T { d }");
        let mut folder = RecordSelectionSets::default();
        ast.fold(&ctx, &mut folder).unwrap();

        // Leaf fields carry empty Selection Sets, which are folded as well
        let seen = folder
            .seen
            .iter()
            .map(|(path, parent)| (path.as_str(), *parent))
            .collect::<std::vec::Vec<_>>();
        assert_eq!(
            seen,
            vec![
                ("0.selectionSet.0.selectionSet.0.selectionSet", ASTKind::Field),
                ("0.selectionSet.0.selectionSet", ASTKind::Field),
                ("0.selectionSet.1.selectionSet.0.selectionSet", ASTKind::Field),
                ("0.selectionSet.1.selectionSet", ASTKind::InlineFragment),
                ("0.selectionSet", ASTKind::OperationDefinition),
                ("1.selectionSet.0.selectionSet", ASTKind::Field),
                ("1.selectionSet", ASTKind::FragmentDefinition),
            ]
        );
    }

    #[test]
    fn copies_lists_onto_the_new_context() {
        let source = ASTContext::new();
        let ast = parse(
            &source,
            "query Q($a: [Int] = [1]) @live { f(x: {y: [2]}) @skip(if: $a) { ...F @defer } }",
        );

        let ctx = ASTContext::new();
        let output = ast.fold(&ctx, &mut FoldNoop::default()).unwrap();
        assert_eq!(output, ast);

        let on_ctx = |arena: &bumpalo::Bump| std::ptr::eq(arena, &ctx.arena);
        let operation = output.operations().next().unwrap();
        let var_def = &operation.variable_definitions.children[0];
        assert!(on_ctx(operation.variable_definitions.children.bump()));
        assert!(on_ctx(operation.directives.children.bump()));
        match &var_def.default_value {
            Some(Value::List(list)) => assert!(on_ctx(list.children.bump())),
            value => panic!("expected a list default, got {:?}", value),
        }

        let field = operation.selection_set.selections[0].field().unwrap();
        assert!(on_ctx(field.arguments.children.bump()));
        assert!(on_ctx(field.directives.children.bump()));
        match &field.arguments.children[0].value {
            Value::Object(object) => {
                assert!(on_ctx(object.children.bump()));
                match &object.children[0].value {
                    Value::List(list) => assert!(on_ctx(list.children.bump())),
                    value => panic!("expected a list, got {:?}", value),
                }
            }
            value => panic!("expected an object, got {:?}", value),
        }
        match &field.selection_set.selections[0] {
            Selection::FragmentSpread(spread) => assert!(on_ctx(spread.directives.children.bump())),
            selection => panic!("expected a spread, got {:?}", selection),
        }
    }

    struct FailOnSpread {}

    impl<'a> Folder<'a> for FailOnSpread {
        fn fragment_spread(
            &mut self,
            _ctx: &'a ASTContext,
            fragment_spread: FragmentSpread<'a>,
            info: &VisitInfo,
        ) -> Result<FragmentSpread<'a>> {
            Err(Error::new_with_context(
                format!("Unexpected spread of '{}'", fragment_spread.name.name),
                info.path.to_string(),
                None,
            ))
        }
    }

    #[test]
    fn errors_stop_folding() {
        let ctx = ASTContext::new();
        let ast = parse(&ctx, "{ a { ...F } }");
        let err = ast.fold(&ctx, &mut FailOnSpread {}).unwrap_err();
        assert_eq!(err.message(), "Unexpected spread of 'F'");
        assert_eq!(
            err.print(true),
            "Transform Error: Unexpected spread of 'F'\n0.selectionSet.0.selectionSet.0"
        );
    }
}
