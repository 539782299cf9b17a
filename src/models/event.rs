use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analytics record emitted by the search overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    Search { term: String, result_count: usize, timestamp: DateTime<Utc> },
    Click { term: String, result_id: String, position: usize, timestamp: DateTime<Utc> },
}

impl SearchEvent {
    pub fn search(term: &str, result_count: usize) -> Self {
        SearchEvent::Search { term: term.to_string(), result_count, timestamp: Utc::now() }
    }

    pub fn click(term: &str, result_id: &str, position: usize) -> Self {
        SearchEvent::Click {
            term: term.to_string(),
            result_id: result_id.to_string(),
            position,
            timestamp: Utc::now(),
        }
    }

    pub fn term(&self) -> &str {
        match self {
            SearchEvent::Search { term, .. } | SearchEvent::Click { term, .. } => term,
        }
    }
}
