use crate::ast::*;
use crate::error::Result;
use crate::visit::{FoldNode, Folder, VisitInfo};
use serde::Deserialize;

/// Which Selection Sets receive a `__typename` field.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypenamePolicy {
    /// Every non-empty Selection Set, including the root Selection Sets of operations.
    All,
    /// Every non-empty Selection Set except the root Selection Sets of operations.
    #[default]
    ExceptRoot,
}

/// A [Folder] that appends an unaliased `__typename` field to Selection Sets.
///
/// Selection Sets that already select `__typename`, under any alias, are left as they are, which
/// makes running the folder twice produce the same document as running it once. Empty Selection
/// Sets belong to leaf fields and are never touched.
#[derive(Debug, Clone, Copy)]
pub struct AddTypename {
    policy: TypenamePolicy,
}

impl AddTypename {
    pub fn new(policy: TypenamePolicy) -> Self {
        AddTypename { policy }
    }

    /// Folds `document` into a copy of it on `ctx` with `__typename` fields added.
    pub fn apply<'a>(
        mut self,
        ctx: &'a ASTContext,
        document: &Document<'a>,
    ) -> Result<&'a Document<'a>> {
        document.fold(ctx, &mut self)
    }
}

impl Default for AddTypename {
    fn default() -> Self {
        AddTypename::new(TypenamePolicy::default())
    }
}

impl<'a> Folder<'a> for AddTypename {
    fn selection_set(
        &mut self,
        ctx: &'a ASTContext,
        selection_set: SelectionSet<'a>,
        info: &VisitInfo,
    ) -> Result<SelectionSet<'a>> {
        if selection_set.is_empty() || selection_set.has_typename() {
            return Ok(selection_set);
        }
        if self.policy == TypenamePolicy::ExceptRoot && info.is_operation_root() {
            return Ok(selection_set);
        }

        tracing::trace!(
            path = %info.path,
            depth = info.path.depth(),
            parent = %info.parent,
            "adding __typename"
        );
        let mut selection_set = selection_set;
        selection_set.selections.push(Field::typename(ctx).into());
        Ok(selection_set)
    }
}
