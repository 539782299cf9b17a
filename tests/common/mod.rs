//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary data directory with an optional index file
pub struct SearchDirBuilder {
    temp_dir: TempDir,
    items: Vec<ItemBuilder>,
}

impl SearchDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, items: Vec::new() }
    }

    /// Add an item to the index file
    pub fn with_item(mut self, item: ItemBuilder) -> Self {
        self.items.push(item);
        self
    }

    /// Write a `recent-searches.json` store with the given terms
    pub fn with_recent(self, terms: &[&str]) -> Self {
        let json = serde_json::json!({ "version": 1, "terms": terms });
        fs::write(self.temp_dir.path().join("recent-searches.json"), json.to_string())
            .expect("Failed to write recent searches");
        self
    }

    /// Write raw content as the recent-search store
    pub fn with_raw_recent(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("recent-searches.json"), content)
            .expect("Failed to write recent searches");
        self
    }

    /// Build and return the temp directory (consumes self)
    ///
    /// The index, if any items were added, lands in `index.json`.
    pub fn build(self) -> TempDir {
        if !self.items.is_empty() {
            let content =
                format!("[{}]", self.items.iter().map(|i| i.to_json()).collect::<Vec<_>>().join(","));
            fs::write(index_path(self.temp_dir.path()), content).expect("Failed to write index");
        }
        self.temp_dir
    }
}

impl Default for SearchDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn index_path(dir: &Path) -> PathBuf {
    dir.join("index.json")
}

/// Builder for index entries
pub struct ItemBuilder {
    id: String,
    title: String,
    description: String,
    category: String,
    href: String,
    status: Option<String>,
}

impl ItemBuilder {
    /// Create a new agent item with default values
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: "Test item".to_string(),
            description: "Test description".to_string(),
            category: "agent".to_string(),
            href: "/agents".to_string(),
            status: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the category by its serialized name (e.g. `voice-clone`)
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn href(mut self, href: &str) -> Self {
        self.href = href.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let mut value = serde_json::json!({
            "id": self.id,
            "title": self.title,
            "description": self.description,
            "category": self.category,
            "href": self.href,
        });
        if let Some(status) = &self.status {
            value["metadata"] = serde_json::json!({ "status": status });
        }
        value.to_string()
    }
}

/// Three items where both the agent and the campaign match "sa"
pub fn sales_items() -> Vec<ItemBuilder> {
    vec![
        ItemBuilder::new("agent-1")
            .title("Sales Assistant AI")
            .description("Automated outbound calls")
            .href("/agents")
            .status("Active"),
        ItemBuilder::new("campaign-1")
            .title("Summer Outreach 2024")
            .description("Seasonal sales push")
            .category("campaign")
            .href("/campaigns"),
        ItemBuilder::new("contact-1")
            .title("Mike Davis")
            .description("Operations at BigCorp")
            .category("contact")
            .href("/contacts"),
    ]
}

/// Data directory with the sales index written to `index.json`
pub fn sales_dir() -> TempDir {
    sales_items().into_iter().fold(SearchDirBuilder::new(), |b, item| b.with_item(item)).build()
}
