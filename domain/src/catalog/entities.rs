//! Catalog entities — immutable discovery-facing records

use serde::Serialize;

use crate::invocation::schema::parameter_schema;
use crate::source::entities::{ActionDef, SourceConfig};

/// The searchable, discovery-facing representation of one action
///
/// Entries are built once during index construction and never change.
/// The full parameter schema is carried so an agent can assemble an
/// invocation from a search result without a further lookup.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Unique action name across the whole index
    pub action_name: String,
    /// Human/LLM-facing description
    pub description: String,
    /// Name of the originating source
    pub source_name: String,
    /// Category inherited from the source
    pub category: Option<String>,
    /// Tags inherited from the source
    pub tags: Vec<String>,
    /// JSON Schema of the accepted parameters
    pub parameter_schema: serde_json::Value,
    /// Lowercase concatenation of name, description, source name, category,
    /// and tags. Used only for substring search; never serialized.
    #[serde(skip)]
    search_text: String,
}

impl CatalogEntry {
    /// Build the entry for one action of a source.
    ///
    /// An action without a description falls back to showing the command
    /// it runs, so the agent always sees something actionable.
    pub fn from_action(action: &ActionDef, source: &SourceConfig) -> Self {
        let description = if action.description.is_empty() {
            format!("Run: {} {}", source.command, action.command)
                .trim_end()
                .to_string()
        } else {
            action.description.clone()
        };

        let mut haystack = vec![action.name.clone(), description.clone(), source.name.clone()];
        if let Some(category) = &source.category {
            haystack.push(category.clone());
        }
        haystack.extend(source.tags.iter().cloned());
        let search_text = haystack.join(" ").to_lowercase();

        Self {
            action_name: action.name.clone(),
            description,
            source_name: source.name.clone(),
            category: source.category.clone(),
            tags: source.tags.clone(),
            parameter_schema: parameter_schema(&action.args),
            search_text,
        }
    }

    /// Literal substring match against the precomputed search text.
    ///
    /// `needle` must already be lowercase. Characters that are special in
    /// pattern languages (".", "*", "[") match literally.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.search_text.contains(needle)
    }
}

/// Per-source rollup shown in summary mode
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    /// Source name
    pub source_name: String,
    /// Source description
    pub description: String,
    /// Number of actions the source contributed at build time
    pub action_count: usize,
    /// Source category
    pub category: Option<String>,
    /// Source tags
    pub tags: Vec<String>,
}

impl SourceSummary {
    pub fn from_source(source: &SourceConfig) -> Self {
        Self {
            source_name: source.name.clone(),
            description: source.description.clone(),
            action_count: source.actions.len(),
            category: source.category.clone(),
            tags: source.tags.clone(),
        }
    }
}
