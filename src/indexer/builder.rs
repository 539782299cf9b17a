//! Index construction and loading.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use crate::indexer::builtin::builtin_items;
use crate::models::{Category, SearchableItem};
use crate::utils::terminal::strip_ansi_codes;
use crate::utils::validate_file_size;

/// Immutable, cheaply clonable set of searchable items with unique ids
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Arc<[SearchableItem]>,
}

impl SearchIndex {
    /// Build an index, rejecting empty or duplicate ids
    pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                bail!("Index item with title {:?} has an empty id", item.title);
            }
            if !seen.insert(item.id.as_str()) {
                bail!("Duplicate index item id: {}", item.id);
            }
        }

        Ok(Self { items: items.into() })
    }

    /// The built-in dashboard catalogue
    pub fn builtin() -> Self {
        Self { items: builtin_items().into() }
    }

    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&SearchableItem> {
        self.items.get(idx)
    }

    /// Number of items per category, in [`Category::ALL`] order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                (category, self.items.iter().filter(|i| i.category == category).count())
            })
            .collect()
    }
}

/// Load an index from a JSON array of items
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is larger than 10MB
/// - The JSON does not describe an array of items
/// - Any id is empty or duplicated
pub fn load_index(path: &Path) -> Result<SearchIndex> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open index file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let items: Vec<SearchableItem> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse index file: {}", path.display()))?;

    let items = cluster_by_category(items.into_iter().map(sanitize_item).collect());
    tracing::debug!(count = items.len(), path = %path.display(), "loaded search index");

    SearchIndex::new(items)
}

/// Stable reorder so each category's items are contiguous, categories in
/// order of first appearance
///
/// The cursor walks the flattened list while the overlay draws groups; with
/// contiguous categories both orders agree.
fn cluster_by_category(items: Vec<SearchableItem>) -> Vec<SearchableItem> {
    let mut order: Vec<Category> = Vec::new();
    for item in &items {
        if !order.contains(&item.category) {
            order.push(item.category);
        }
    }

    let mut clustered = items;
    clustered.sort_by_key(|item| order.iter().position(|&c| c == item.category));
    clustered
}

fn sanitize_item(mut item: SearchableItem) -> SearchableItem {
    item.title = strip_ansi_codes(&item.title);
    item.description = strip_ansi_codes(&item.description);
    if let Some(status) = item.metadata.as_mut().and_then(|m| m.status.as_mut()) {
        *status = strip_ansi_codes(status);
    }
    item
}
