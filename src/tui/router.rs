use crate::overlay::Navigator;

const HOME_ROUTE: &str = "/dashboard";
/// Oldest entries are dropped past this many back steps
const MAX_HISTORY: usize = 50;

#[rustfmt::skip]
const PAGES: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/agents", "Agents"),
    ("/agents/new", "New Agent"),
    ("/agents/playground", "Agent Playground"),
    ("/campaigns", "Campaigns"),
    ("/campaigns/new", "New Campaign"),
    ("/contacts", "Contacts"),
    ("/calls", "Call History"),
    ("/conversations", "Conversations"),
    ("/voice-cloning", "Voice Cloning"),
    ("/voice-cloning/new", "New Voice Clone"),
    ("/phone-numbers", "Phone Numbers"),
    ("/rag", "Knowledge Base"),
    ("/tools", "Tools"),
    ("/analytics", "Analytics"),
    ("/settings", "Settings"),
];

/// Dashboard router: current route plus back history
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Router {
    pub fn new() -> Self {
        Self { current: HOME_ROUTE.to_string(), history: Vec::new() }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Title of the current page, `None` for unknown routes
    pub fn page_title(&self) -> Option<&'static str> {
        PAGES.iter().find(|(route, _)| *route == self.current).map(|(_, title)| *title)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Return to the previous route; false when there is none
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, href: &str) {
        if href == self.current {
            return;
        }
        if !PAGES.iter().any(|(route, _)| *route == href) {
            tracing::warn!(%href, "navigating to unknown route");
        }
        let previous = std::mem::replace(&mut self.current, href.to_string());
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(previous);
    }
}
