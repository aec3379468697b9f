//! Tool Registry

use crate::{ToolPlugin, ToolMeta, ToolCategory};
use serde_json::Value as JsonValue;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use toolbelt_core::ToolError;
use tracing::{debug, warn};

/// Central tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolPlugin>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn with_tool<T: ToolPlugin + 'static>(mut self, tool: T) -> Self {
        let name = tool.meta().name.to_lowercase();
        self.tools.insert(name, Arc::new(tool));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolPlugin> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn call(&self, name: &str, args: &JsonValue) -> Result<JsonValue, ToolError> {
        match self.get(name) {
            Some(tool) => {
                debug!(tool = name, "dispatching tool call");
                tool.call(args)
            }
            None => {
                warn!(tool = name, "unknown tool requested");
                // Find similar tool names for better error message
                let similar = self.find_similar_tools(name);
                let mut err = ToolError::unknown_tool(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use tools/list for full list.",
                        suggestions.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// All tool metadata, sorted by name
    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self.tools.values().map(|t| t.meta()).collect();
        metas.sort_by(|a, b| a.name.cmp(b.name));
        metas
    }

    /// Sidebar search: case-insensitive match against name, description and
    /// keywords, optionally restricted to one category. Sorted by name.
    pub fn search(&self, query: &str, category: Option<ToolCategory>) -> Vec<ToolMeta> {
        let query = query.trim().to_lowercase();
        self.list()
            .into_iter()
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .filter(|meta| meta.matches(&query))
            .collect()
    }

    /// Distinct categories with at least one registered tool
    pub fn categories(&self) -> Vec<ToolCategory> {
        let set: BTreeSet<ToolCategory> = self.tools.values().map(|t| t.meta().category).collect();
        set.into_iter().collect()
    }

    /// Find tool names similar to the given name (for error suggestions)
    fn find_similar_tools(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.tools.keys()
            .filter_map(|tool_name| {
                let score = Self::similarity_score(&name_lower, tool_name);
                if score > 0 {
                    Some((tool_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then by name so suggestions are stable
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared characters
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        // Penalize length difference
        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
