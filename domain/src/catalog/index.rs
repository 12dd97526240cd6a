//! The discovery index over all loaded sources

use std::collections::HashMap;

use crate::catalog::entities::{CatalogEntry, SourceSummary};
use crate::source::entities::{ResolvedAction, SourceConfig};

/// Immutable index of every action from every loaded source
///
/// Built exactly once at startup, read-only afterwards. Entry order is
/// source-processing order, which is also the tie-break for result
/// ordering and limit truncation — there is no relevance ranking.
///
/// Duplicate action names are resolved last-wins: the earlier entry is
/// removed from the sequence, the replacement is appended at the end, and
/// the name mapping is overwritten. The replacement is reported as a
/// warning, not an error.
#[derive(Debug, Default)]
pub struct ActionIndex {
    /// Catalog entries in insertion order
    entries: Vec<CatalogEntry>,
    /// Exact-name lookup for execution
    actions: HashMap<String, ResolvedAction>,
    /// One summary per processed source, in source order
    summaries: Vec<SourceSummary>,
}

impl ActionIndex {
    /// Build the index from an ordered list of sources.
    pub fn from_sources(sources: &[SourceConfig]) -> Self {
        let mut index = Self::default();

        for source in sources {
            for action in &source.actions {
                if index.actions.contains_key(&action.name) {
                    tracing::warn!(
                        action = %action.name,
                        source = %source.name,
                        "Duplicate action name, replacing earlier definition"
                    );
                    index.entries.retain(|entry| entry.action_name != action.name);
                }
                index.entries.push(CatalogEntry::from_action(action, source));
                index
                    .actions
                    .insert(action.name.clone(), ResolvedAction::new(action.clone(), source));
            }
            index.summaries.push(SourceSummary::from_source(source));
        }

        index
    }

    /// Search catalog entries.
    ///
    /// With no filters this is a browse: the first `limit` entries in index
    /// order. Otherwise all provided filters apply with AND semantics —
    /// `query` is a case-insensitive literal substring match over the
    /// precomputed search text, `category` and `source` are case-insensitive
    /// exact matches. No match yields an empty list, never an error.
    pub fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        source: Option<&str>,
        limit: usize,
    ) -> Vec<&CatalogEntry> {
        if query.is_none() && category.is_none() && source.is_none() {
            return self.entries.iter().take(limit).collect();
        }

        let needle = query.map(str::to_lowercase);
        let category = category.map(str::to_lowercase);
        let source = source.map(str::to_lowercase);

        self.entries
            .iter()
            .filter(|entry| {
                if let Some(needle) = &needle {
                    if !entry.matches_query(needle) {
                        return false;
                    }
                }
                if let Some(category) = &category {
                    match &entry.category {
                        Some(entry_category) if entry_category.to_lowercase() == *category => {}
                        _ => return false,
                    }
                }
                if let Some(source) = &source {
                    if entry.source_name.to_lowercase() != *source {
                        return false;
                    }
                }
                true
            })
            .take(limit)
            .collect()
    }

    /// Source summaries in source-processing order, capped at `limit` if
    /// given.
    pub fn summarize(&self, limit: Option<usize>) -> Vec<&SourceSummary> {
        let cap = limit.unwrap_or(self.summaries.len());
        self.summaries.iter().take(cap).collect()
    }

    /// Exact-match lookup of the execution-facing action record.
    pub fn get(&self, action_name: &str) -> Option<&ResolvedAction> {
        self.actions.get(action_name)
    }

    /// All catalog entries in index order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All known action names, unsorted.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
