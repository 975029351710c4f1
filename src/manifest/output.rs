use super::hash::sha256_hex;
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The encoding a [Manifest] is rendered to.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// One compact `{"hash":..,"query":..}` object per line, in input order.
    #[default]
    JsonLines,
    /// A single pretty-printed object mapping each hash to its query.
    Object,
}

/// A document's canonical text and the hash identifying it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ManifestEntry {
    pub hash: String,
    pub query: String,
}

impl ManifestEntry {
    /// Creates an entry for `query`, which is expected to be canonical text already.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        ManifestEntry {
            hash: sha256_hex(&query),
            query,
        }
    }
}

/// An ordered list of persisted queries.
///
/// Entries are kept in the order they were added, duplicates included. Duplicates only collapse
/// when the manifest is rendered as [`OutputFormat::Object`].
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the query stored under `hash`. When a hash was added more than once, the query
    /// that was added last is returned, as it is in the object encoding.
    pub fn get(&self, hash: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.hash == hash)
            .map(|entry| entry.query.as_str())
    }

    /// Hashes and appends `query` and returns the new entry.
    pub fn push<S: Into<String>>(&mut self, query: S) -> &ManifestEntry {
        let entry = ManifestEntry::new(query);
        tracing::debug!(hash = %entry.hash, "added manifest entry");
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Renders all entries as JSON Lines, without a trailing newline.
    pub fn to_json_lines(&self) -> Result<String> {
        let lines = self
            .entries
            .iter()
            .map(serde_json::to_string)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    /// Renders all entries as a single object keyed by hash, indented by two spaces.
    pub fn to_json_object(&self) -> Result<String> {
        let mut object = IndexMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            object.insert(entry.hash.as_str(), entry.query.as_str());
        }
        Ok(serde_json::to_string_pretty(&object)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::JsonLines => self.to_json_lines(),
            OutputFormat::Object => self.to_json_object(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Manifest {
    fn from_iter<I: IntoIterator<Item = S>>(queries: I) -> Self {
        Manifest {
            entries: queries.into_iter().map(ManifestEntry::new).collect(),
        }
    }
}
