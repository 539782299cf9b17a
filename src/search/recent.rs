use crate::storage::RecentStore;

/// Bounded, most-recent-first list of search terms
///
/// Owns the only state that survives overlay open/close. Mutated exclusively
/// through [`add`](Self::add), [`remove`](Self::remove) and [`clear`](Self::clear);
/// each mutation writes through to the attached store. A failing store is
/// detached and the list carries on in memory.
pub struct RecentSearches {
    terms: Vec<String>,
    max_len: usize,
    store: Option<Box<dyn RecentStore>>,
}

impl RecentSearches {
    /// Session-only list
    pub fn new(max_len: usize) -> Self {
        Self { terms: Vec::new(), max_len, store: None }
    }

    /// List backed by `store`, seeded with its persisted terms
    pub fn with_store(max_len: usize, mut store: Box<dyn RecentStore>) -> Self {
        match store.load() {
            Ok(loaded) => {
                let mut recent = Self { terms: Vec::new(), max_len, store: Some(store) };
                recent.terms = recent.sanitize(loaded);
                recent
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load recent searches, keeping them in memory");
                Self::new(max_len)
            }
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Insert `term` at the front, dropping an earlier identical entry
    ///
    /// Blank terms are ignored. Returns whether the list changed.
    pub fn add(&mut self, term: &str) -> bool {
        if term.trim().is_empty() {
            return false;
        }

        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.max_len);
        self.persist();
        true
    }

    /// Remove one entry; returns whether it was present
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.terms.len();
        self.terms.retain(|t| t != term);
        let removed = self.terms.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.terms.clear();
        if let Some(store) = self.store.as_mut()
            && let Err(e) = store.clear()
        {
            tracing::warn!(error = %e, "failed to clear persisted recent searches");
            self.store = None;
        }
    }

    fn persist(&mut self) {
        if let Some(store) = self.store.as_mut()
            && let Err(e) = store.save(&self.terms)
        {
            tracing::warn!(error = %e, "failed to persist recent searches, continuing in memory");
            self.store = None;
        }
    }

    /// Re-apply blank filtering, dedup and the bound to persisted data
    fn sanitize(&self, loaded: Vec<String>) -> Vec<String> {
        let mut terms: Vec<String> = Vec::with_capacity(self.max_len.min(loaded.len()));
        for term in loaded {
            if terms.len() >= self.max_len {
                break;
            }
            if term.trim().is_empty() || terms.contains(&term) {
                continue;
            }
            terms.push(term);
        }
        terms
    }
}

impl std::fmt::Debug for RecentSearches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentSearches")
            .field("terms", &self.terms)
            .field("max_len", &self.max_len)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}
