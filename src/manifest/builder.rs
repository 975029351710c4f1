use super::{AddTypename, DocumentFile, Manifest, ManifestEntry, TypenamePolicy};
use crate::ast::{ASTContext, Document, PrintNode};
use crate::error::Result;

/// Builds a [Manifest] from documents, one at a time and in order.
///
/// Each document is rewritten with `__typename` fields, printed to its canonical text and
/// hashed. The rewritten copy lives on an [`ASTContext`] of its own that's dropped once the
/// document has been printed, so input documents are never modified.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    policy: TypenamePolicy,
    manifest: Manifest,
}

impl ManifestBuilder {
    pub fn new(policy: TypenamePolicy) -> Self {
        ManifestBuilder {
            policy,
            manifest: Manifest::new(),
        }
    }

    /// Adds a document to the manifest and returns its entry. Documents whose canonical text is
    /// empty are skipped and return `None`.
    pub fn add_document(&mut self, document: &Document<'_>) -> Result<Option<&ManifestEntry>> {
        let printed = {
            let ctx = ASTContext::new();
            let document = AddTypename::new(self.policy).apply(&ctx, document)?;
            document.print()
        };

        let query = printed.trim();
        if query.is_empty() {
            tracing::debug!("skipping document without canonical text");
            return Ok(None);
        }
        Ok(Some(self.manifest.push(query)))
    }

    /// Adds a host's document file. Files that carry no parsed document are skipped.
    pub fn add_file(&mut self, file: &DocumentFile<'_>) -> Result<Option<&ManifestEntry>> {
        let location = file.location.unwrap_or("<unknown>");
        match file.document {
            Some(document) => {
                tracing::debug!(location, "adding document");
                self.add_document(document)
            }
            None => {
                tracing::debug!(location, "skipping file without a parsed document");
                Ok(None)
            }
        }
    }

    pub fn finish(self) -> Manifest {
        self.manifest
    }
}
