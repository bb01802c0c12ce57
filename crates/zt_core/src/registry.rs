//! Tool catalog.
//!
//! Each tool crate publishes a list of [`ToolDescriptor`]s. The CLI collects
//! them into a [`ToolRegistry`] to list what is available and to resolve a
//! tool by id.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Groups tools the way they are presented to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Security,
    Encoding,
    Text,
    DateTime,
    Debugging,
}

impl ToolCategory {
    /// All categories in display order.
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::Security,
        ToolCategory::Encoding,
        ToolCategory::Text,
        ToolCategory::DateTime,
        ToolCategory::Debugging,
    ];

    /// Human-readable heading.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Security => "Security Tools",
            ToolCategory::Encoding => "Encoding Tools",
            ToolCategory::Text => "Text Tools",
            ToolCategory::DateTime => "DateTime Tools",
            ToolCategory::Debugging => "Debugging Tools",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Describes a single tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Stable identifier, also the CLI subcommand path (e.g. `uuid-generator`)
    pub id: String,
    /// Display name
    pub name: String,
    pub category: ToolCategory,
    /// One-line summary of what the tool does
    pub description: String,
}

impl ToolDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ToolCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: description.into(),
        }
    }
}

/// A registry of tool descriptors keyed by id.
///
/// Iteration order is stable: by category, then by id.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Build a registry from a set of descriptors.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor);
        }
        registry
    }

    /// Register a tool. A tool with the same id is replaced.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        debug!("Registering tool: {}", descriptor.id);
        self.tools.insert(descriptor.id.clone(), descriptor);
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.get(id)
    }

    /// Get a tool by id, returning an error if not found.
    pub fn get_required(&self, id: &str) -> CoreResult<&ToolDescriptor> {
        self.get(id)
            .ok_or_else(|| CoreError::ToolNotFound(id.to_string()))
    }

    /// Check if a tool is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// Get all registered tool ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Tools belonging to one category, sorted by id.
    pub fn by_category(&self, category: ToolCategory) -> Vec<&ToolDescriptor> {
        self.tools
            .values()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Iterate over every tool grouped by category.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        ToolCategory::ALL
            .into_iter()
            .flat_map(move |category| self.by_category(category))
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, category: ToolCategory) -> ToolDescriptor {
        ToolDescriptor::new(id, id.to_uppercase(), category, "test tool")
    }

    #[test]
    fn test_registry_register() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(descriptor("hash", ToolCategory::Security));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("hash"));
    }

    #[test]
    fn test_registry_get_required() {
        let registry = ToolRegistry::from_descriptors([descriptor("cron", ToolCategory::Debugging)]);

        assert_eq!(registry.get_required("cron").unwrap().name, "CRON");
        let err = registry.get_required("nonexistent").unwrap_err();
        assert!(matches!(err, CoreError::ToolNotFound(id) if id == "nonexistent"));
    }

    #[test]
    fn test_registry_replaces_duplicate_ids() {
        let mut registry = ToolRegistry::new();
        registry.register(descriptor("diff", ToolCategory::Text));
        registry.register(ToolDescriptor::new("diff", "Text Diff", ToolCategory::Text, "changed"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("diff").unwrap().description, "changed");
    }

    #[test]
    fn test_registry_iter_groups_by_category() {
        let registry = ToolRegistry::from_descriptors([
            descriptor("stacktrace", ToolCategory::Debugging),
            descriptor("url", ToolCategory::Encoding),
            descriptor("uuid", ToolCategory::Security),
            descriptor("hash", ToolCategory::Security),
        ]);

        let ids: Vec<_> = registry.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["hash", "uuid", "url", "stacktrace"]);
    }
}
