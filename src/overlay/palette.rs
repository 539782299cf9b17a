use std::time::{Duration, Instant};

use super::navigator::Navigator;
use super::state::{OverlayKey, OverlayState};
use crate::indexer::SearchIndex;
use crate::models::SearchableItem;
use crate::search::{
    Debouncer, FilterOutcome, RecentSearches, ResultGroup, ResultMode, SearchAnalytics,
    SearchConfig, filter_items, group_by_category,
};

/// Upper bound on the raw term length
const MAX_TERM_LEN: usize = 256;

/// Outcome of selecting a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item_id: String,
    pub href: String,
    /// 0-based position in the flattened result list
    pub position: usize,
}

pub struct GlobalSearch {
    index: SearchIndex,
    config: SearchConfig,
    open: bool,
    // Raw input, updated on every keystroke
    term: String,
    debouncer: Debouncer<String>,
    // Last debounced term the results were computed from
    applied_term: String,
    results: FilterOutcome,
    cursor: usize,
    recent: RecentSearches,
    analytics: SearchAnalytics,
}

impl GlobalSearch {
    pub fn new(
        index: SearchIndex,
        config: SearchConfig,
        recent: RecentSearches,
        analytics: SearchAnalytics,
    ) -> Self {
        let results = filter_items(index.items(), "", config.default_items, config.max_results);
        Self {
            debouncer: Debouncer::new(config.debounce()),
            index,
            config,
            open: false,
            term: String::new(),
            applied_term: String::new(),
            results,
            cursor: 0,
            recent,
            analytics,
        }
    }

    pub fn state(&self) -> OverlayState {
        if !self.open {
            return OverlayState::Closed;
        }
        match self.results.mode {
            ResultMode::Defaults => OverlayState::OpenEmpty,
            ResultMode::Query(_) if self.results.is_empty() => OverlayState::OpenNoResults,
            ResultMode::Query(_) => OverlayState::OpenResults,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with a fresh term, cursor and default results
    pub fn open(&mut self) {
        self.open = true;
        self.reset_transient();
        tracing::debug!("search overlay opened");
    }

    /// Close, discarding the in-progress term and any pending debounce
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!(term = %self.term, "search overlay closed");
        }
        self.open = false;
        self.reset_transient();
    }

    pub fn toggle(&mut self) {
        if self.open { self.close() } else { self.open() }
    }

    fn reset_transient(&mut self) {
        self.term.clear();
        self.debouncer.cancel();
        self.apply(String::new());
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// The debounced term the current results reflect
    pub fn applied_term(&self) -> &str {
        &self.applied_term
    }

    /// Replace the raw term
    ///
    /// A blank term applies immediately; anything else waits for the debounce
    /// window and supersedes whatever was pending.
    pub fn set_term(&mut self, term: impl Into<String>, now: Instant) {
        if !self.open {
            return;
        }
        let mut term = term.into();
        if term.len() > MAX_TERM_LEN {
            let mut cut = MAX_TERM_LEN;
            while !term.is_char_boundary(cut) {
                cut -= 1;
            }
            term.truncate(cut);
        }
        self.term = term;

        if self.term.trim().is_empty() {
            self.debouncer.cancel();
            if self.results.mode != ResultMode::Defaults {
                self.apply(String::new());
            }
        } else {
            self.debouncer.schedule(self.term.clone(), now);
        }
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        if self.term.len() + c.len_utf8() > MAX_TERM_LEN {
            return;
        }
        let mut term = self.term.clone();
        term.push(c);
        self.set_term(term, now);
    }

    pub fn delete_char(&mut self, now: Instant) {
        let mut term = self.term.clone();
        if term.pop().is_some() {
            self.set_term(term, now);
        }
    }

    pub fn clear_term(&mut self, now: Instant) {
        self.set_term(String::new(), now);
    }

    /// Apply a debounced term whose window has elapsed; returns whether results changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        match self.debouncer.poll(now) {
            Some(term) if term != self.applied_term => {
                self.apply(term);
                true
            }
            _ => false,
        }
    }

    /// Time until a pending term is applied
    pub fn pending_for(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    fn apply(&mut self, term: String) {
        self.results = filter_items(
            self.index.items(),
            &term,
            self.config.default_items,
            self.config.max_results,
        );
        if let ResultMode::Query(query) = &self.results.mode {
            self.analytics.track_search(query, self.results.len());
        }
        self.applied_term = term;
        self.cursor = 0;
    }

    pub fn results(&self) -> &FilterOutcome {
        &self.results
    }

    /// Flattened results in display-position order
    pub fn result_items(&self) -> impl Iterator<Item = &SearchableItem> + '_ {
        self.results.hits.iter().filter_map(|&idx| self.index.get(idx))
    }

    pub fn groups(&self) -> Vec<ResultGroup<'_>> {
        group_by_category(self.index.items(), &self.results.hits)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_item(&self) -> Option<&SearchableItem> {
        self.item_at(self.cursor)
    }

    fn item_at(&self, position: usize) -> Option<&SearchableItem> {
        self.results.hits.get(position).and_then(|&idx| self.index.get(idx))
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.results.len();
        self.cursor = if len == 0 { 0 } else { (self.cursor + 1).min(len - 1) };
    }

    /// React to a navigation key; returns the selection when Enter picked a result
    pub fn handle_key(&mut self, key: OverlayKey, navigator: &mut dyn Navigator) -> Option<Selection> {
        if !self.open {
            return None;
        }
        match key {
            OverlayKey::ArrowUp => self.move_up(),
            OverlayKey::ArrowDown => self.move_down(),
            OverlayKey::Enter => {
                if !self.results.is_empty() {
                    return self.select(self.cursor, navigator);
                }
            }
            OverlayKey::Escape => self.close(),
        }
        None
    }

    /// Select the result at `position` (click or Enter)
    ///
    /// Records the raw term as a recent search, tracks the click, closes the
    /// overlay and only then asks the navigator to move.
    pub fn select(&mut self, position: usize, navigator: &mut dyn Navigator) -> Option<Selection> {
        if !self.open {
            return None;
        }
        let item = self.item_at(position)?;
        let selection =
            Selection { item_id: item.id.clone(), href: item.href.clone(), position };

        if !self.term.trim().is_empty() {
            self.recent.add(&self.term);
        }
        self.analytics.track_search_click(&self.term, &selection.item_id, position);
        self.close();
        navigator.navigate(&selection.href);

        Some(selection)
    }

    /// Put the `idx`-th recent search back into the input
    pub fn use_recent(&mut self, idx: usize, now: Instant) -> bool {
        match self.recent.get(idx).map(str::to_string) {
            Some(term) if self.open => {
                self.set_term(term, now);
                true
            }
            _ => false,
        }
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    pub fn remove_recent(&mut self, term: &str) -> bool {
        self.recent.remove(term)
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl std::fmt::Debug for GlobalSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalSearch")
            .field("state", &self.state())
            .field("term", &self.term)
            .field("applied_term", &self.applied_term)
            .field("cursor", &self.cursor)
            .field("results", &self.results.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, SearchEvent};
    use crate::search::MemorySink;

    const WINDOW: Duration = Duration::from_millis(150);

    fn item(id: &str, title: &str, category: Category, href: &str) -> SearchableItem {
        SearchableItem {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            href: href.to_string(),
            metadata: None,
        }
    }

    fn palette() -> (GlobalSearch, MemorySink) {
        let index = SearchIndex::new(vec![
            item("agent-1", "Sales Assistant AI", Category::Agent, "/agents"),
            item("campaign-1", "Spring Sale", Category::Campaign, "/campaigns"),
            item("contact-1", "John Smith", Category::Contact, "/contacts"),
        ])
        .unwrap();
        let sink = MemorySink::new();
        let search = GlobalSearch::new(
            index,
            SearchConfig::default(),
            RecentSearches::new(10),
            SearchAnalytics::new(Box::new(sink.clone())),
        );
        (search, sink)
    }

    fn type_and_settle(search: &mut GlobalSearch, term: &str, now: Instant) -> Instant {
        search.set_term(term, now);
        let later = now + WINDOW;
        search.tick(later);
        later
    }

    #[test]
    fn test_starts_closed() {
        let (search, _) = palette();
        assert_eq!(search.state(), OverlayState::Closed);
        assert!(!search.is_open());
    }

    #[test]
    fn test_open_shows_defaults() {
        let (mut search, sink) = palette();
        search.open();

        assert_eq!(search.state(), OverlayState::OpenEmpty);
        assert_eq!(search.results().len(), 3);
        assert_eq!(search.cursor(), 0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_term_applied_after_window() {
        let (mut search, sink) = palette();
        let start = Instant::now();
        search.open();

        search.set_term("sale", start);
        assert!(!search.tick(start + Duration::from_millis(10)));
        assert_eq!(search.state(), OverlayState::OpenEmpty);

        assert!(search.tick(start + WINDOW));
        assert_eq!(search.state(), OverlayState::OpenResults);
        assert_eq!(search.results().len(), 2);
        assert!(matches!(
            sink.events().as_slice(),
            [SearchEvent::Search { term, result_count: 2, .. }] if term == "sale"
        ));
    }

    #[test]
    fn test_no_results_state() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();

        type_and_settle(&mut search, "zzz_no_match", start);
        assert_eq!(search.state(), OverlayState::OpenNoResults);
    }

    #[test]
    fn test_clearing_term_returns_to_empty_immediately() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        let now = type_and_settle(&mut search, "john", start);
        assert_eq!(search.state(), OverlayState::OpenResults);

        search.clear_term(now);
        assert_eq!(search.state(), OverlayState::OpenEmpty);
    }

    #[test]
    fn test_whitespace_term_is_empty_path() {
        let (mut search, sink) = palette();
        let start = Instant::now();
        search.open();

        type_and_settle(&mut search, "   ", start);
        assert_eq!(search.state(), OverlayState::OpenEmpty);
        assert_eq!(search.results().len(), 3);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_same_debounced_term_is_not_retracked() {
        let (mut search, sink) = palette();
        let start = Instant::now();
        search.open();

        let now = type_and_settle(&mut search, "sale", start);
        search.set_term("sales", now);
        search.set_term("sale", now + Duration::from_millis(20));
        assert!(!search.tick(now + Duration::from_secs(1)));
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_cursor_clamps() {
        let (mut search, _) = palette();
        search.open();
        let mut nav = |_: &str| {};

        search.handle_key(OverlayKey::ArrowUp, &mut nav);
        assert_eq!(search.cursor(), 0);

        for _ in 0..10 {
            search.handle_key(OverlayKey::ArrowDown, &mut nav);
        }
        assert_eq!(search.cursor(), 2);

        search.handle_key(OverlayKey::ArrowUp, &mut nav);
        assert_eq!(search.cursor(), 1);
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "zzz", start);

        search.move_down();
        search.move_up();
        assert_eq!(search.cursor(), 0);
        assert!(search.selected_item().is_none());
    }

    #[test]
    fn test_cursor_resets_on_recompute() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        search.move_down();
        assert_eq!(search.cursor(), 1);

        type_and_settle(&mut search, "s", start);
        assert_eq!(search.cursor(), 0);
    }

    #[test]
    fn test_enter_selects_at_cursor() {
        let (mut search, sink) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "sale", start);

        let mut visited = Vec::new();
        let mut nav = |href: &str| visited.push(href.to_string());
        search.handle_key(OverlayKey::ArrowDown, &mut nav);
        let selection = search.handle_key(OverlayKey::Enter, &mut nav).unwrap();

        assert_eq!(selection.item_id, "campaign-1");
        assert_eq!(selection.position, 1);
        assert_eq!(visited, vec!["/campaigns"]);
        assert_eq!(search.state(), OverlayState::Closed);
        assert_eq!(search.recent().terms(), ["sale"]);
        assert!(matches!(
            sink.events().last(),
            Some(SearchEvent::Click { position: 1, result_id, .. }) if result_id == "campaign-1"
        ));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "zzz", start);

        let mut calls = 0;
        let mut nav = |_: &str| calls += 1;
        assert!(search.handle_key(OverlayKey::Enter, &mut nav).is_none());
        assert!(search.is_open());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_select_without_term_skips_recent() {
        let (mut search, sink) = palette();
        search.open();

        let mut nav = |_: &str| {};
        let selection = search.select(2, &mut nav).unwrap();

        assert_eq!(selection.href, "/contacts");
        assert!(search.recent().is_empty());
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut search, sink) = palette();
        search.open();

        let mut nav = |_: &str| {};
        assert!(search.select(99, &mut nav).is_none());
        assert!(search.is_open());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_escape_discards_term() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "xyz", start);

        let mut nav = |_: &str| {};
        search.handle_key(OverlayKey::Escape, &mut nav);

        assert_eq!(search.state(), OverlayState::Closed);
        assert!(search.recent().is_empty());
        assert_eq!(search.term(), "");
    }

    #[test]
    fn test_close_cancels_pending_debounce() {
        let (mut search, sink) = palette();
        let start = Instant::now();
        search.open();
        search.set_term("john", start);
        search.close();

        search.open();
        assert!(!search.tick(start + WINDOW * 2));
        assert_eq!(search.state(), OverlayState::OpenEmpty);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_input_ignored_while_closed() {
        let (mut search, _) = palette();
        let start = Instant::now();

        search.set_term("john", start);
        search.push_char('x', start);
        assert_eq!(search.term(), "");

        let mut calls = 0;
        let mut nav = |_: &str| calls += 1;
        assert!(search.handle_key(OverlayKey::Enter, &mut nav).is_none());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_push_and_delete_char() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();

        search.push_char('j', start);
        search.push_char('o', start);
        assert_eq!(search.term(), "jo");

        search.delete_char(start);
        assert_eq!(search.term(), "j");
        assert!(search.pending_for(start).is_some());
    }

    #[test]
    fn test_term_length_is_bounded() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();

        search.set_term("é".repeat(200), start);
        assert!(search.term().len() <= MAX_TERM_LEN);

        let before = search.term().to_string();
        search.push_char('é', start);
        assert_eq!(search.term(), before);
    }

    #[test]
    fn test_use_recent_fills_term() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "john", start);
        let mut nav = |_: &str| {};
        search.select(0, &mut nav);

        search.open();
        assert!(search.use_recent(0, start));
        assert_eq!(search.term(), "john");
        assert!(!search.use_recent(5, start));
    }

    #[test]
    fn test_toggle() {
        let (mut search, _) = palette();
        search.toggle();
        assert!(search.is_open());
        search.toggle();
        assert!(!search.is_open());
    }

    #[test]
    fn test_groups_follow_results() {
        let (mut search, _) = palette();
        let start = Instant::now();
        search.open();
        type_and_settle(&mut search, "sale", start);

        let groups = search.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, Category::Agent);
        assert_eq!(groups[1].entries[0].0, 1);
    }
}
