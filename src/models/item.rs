use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Agent,
    Campaign,
    Contact,
    Call,
    VoiceClone,
    Analytics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Agent,
        Category::Campaign,
        Category::Contact,
        Category::Call,
        Category::VoiceClone,
        Category::Analytics,
    ];

    /// Human-readable label, also matched against search terms
    pub fn label(self) -> &'static str {
        match self {
            Category::Agent => "Agents",
            Category::Campaign => "Campaigns",
            Category::Contact => "Contacts",
            Category::Call => "Calls",
            Category::VoiceClone => "Voice Clones",
            Category::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Accent color as `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ItemMetadata>,
}

impl SearchableItem {
    /// Case-insensitive substring match against title, description and category label.
    ///
    /// `needle` must already be lowercased and trimmed.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
    }

    pub fn status(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.status.as_deref())
    }
}
