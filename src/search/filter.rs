//! Result filtering and grouping over the static index.

use crate::models::{Category, SearchableItem};

/// Which path produced a result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMode {
    /// Blank term: the fixed slice of popular items
    Defaults,
    /// Trimmed, non-empty term that was matched against the index
    Query(String),
}

/// Flattened result list as positions into the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub mode: ResultMode,
    pub hits: Vec<usize>,
}

impl FilterOutcome {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// A term was searched and nothing matched
    pub fn is_no_match(&self) -> bool {
        matches!(self.mode, ResultMode::Query(_)) && self.hits.is_empty()
    }
}

/// One category's slice of the flattened results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup<'a> {
    pub category: Category,
    /// `(flattened position, item)` in index order
    pub entries: Vec<(usize, &'a SearchableItem)>,
}

/// Filter `items` by `term`
///
/// A blank term yields the first `default_items` items. Otherwise the trimmed
/// term is matched case-insensitively against title, description and category
/// label, keeping index order and at most `max_results` hits.
pub fn filter_items(
    items: &[SearchableItem],
    term: &str,
    default_items: usize,
    max_results: usize,
) -> FilterOutcome {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return FilterOutcome {
            mode: ResultMode::Defaults,
            hits: (0..items.len().min(default_items)).collect(),
        };
    }

    let needle = trimmed.to_lowercase();
    let hits = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.matches(&needle))
        .map(|(idx, _)| idx)
        .take(max_results)
        .collect();

    FilterOutcome { mode: ResultMode::Query(trimmed.to_string()), hits }
}

/// Group hits by category, groups ordered by first occurrence
pub fn group_by_category<'a>(items: &'a [SearchableItem], hits: &[usize]) -> Vec<ResultGroup<'a>> {
    let mut groups: Vec<ResultGroup<'a>> = Vec::new();

    for (position, &idx) in hits.iter().enumerate() {
        let Some(item) = items.get(idx) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.entries.push((position, item)),
            None => groups.push(ResultGroup { category: item.category, entries: vec![(position, item)] }),
        }
    }

    groups
}
