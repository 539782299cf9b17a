//! Built-in dashboard catalogue used when no index file is supplied.

use chrono::NaiveDate;

use crate::models::{Category, ItemMetadata, SearchableItem};

struct Meta {
    status: Option<&'static str>,
    date: Option<(i32, u32, u32)>,
    count: Option<u64>,
    color: Option<&'static str>,
}

const fn status(status: &'static str, color: &'static str) -> Meta {
    Meta { status: Some(status), date: None, count: None, color: Some(color) }
}

const fn dated(status: &'static str, date: (i32, u32, u32), color: &'static str) -> Meta {
    Meta { status: Some(status), date: Some(date), count: None, color: Some(color) }
}

const fn report(date: (i32, u32, u32), count: u64) -> Meta {
    Meta { status: None, date: Some(date), count: Some(count), color: None }
}

#[rustfmt::skip]
const CATALOGUE: &[(&str, &str, &str, Category, &str, Meta)] = &[
    ("agent-1", "Sales Assistant AI", "Automated sales calls and lead qualification",
        Category::Agent, "/agents", status("Active", "#10B981")),
    ("agent-2", "Customer Support Bot", "Handle customer inquiries and support tickets",
        Category::Agent, "/agents", status("Training", "#F59E0B")),
    ("agent-3", "Lead Qualifier", "Qualify incoming leads and schedule meetings",
        Category::Agent, "/agents", status("Active", "#10B981")),
    ("agent-new", "Create New Agent", "Set up a new AI agent for your campaigns",
        Category::Agent, "/agents/new", status("Action", "#3B82F6")),
    ("campaign-1", "Summer Outreach 2024", "Q3 lead generation campaign targeting SMBs",
        Category::Campaign, "/campaigns", dated("Running", (2024, 7, 15), "#3B82F6")),
    ("campaign-2", "Product Launch Campaign", "Announce new AI features to existing customers",
        Category::Campaign, "/campaigns", dated("Completed", (2024, 6, 30), "#10B981")),
    ("campaign-3", "Holiday Promotion", "End of year special offers and discounts",
        Category::Campaign, "/campaigns", dated("Scheduled", (2024, 12, 1), "#8B5CF6")),
    ("campaign-new", "Create New Campaign", "Launch a new marketing campaign",
        Category::Campaign, "/campaigns/new", status("Action", "#3B82F6")),
    ("contact-1", "John Smith", "CEO at TechCorp - High priority lead",
        Category::Contact, "/contacts", status("Hot Lead", "#EF4444")),
    ("contact-2", "Sarah Johnson", "Marketing Director at StartupXYZ",
        Category::Contact, "/contacts", status("Qualified", "#10B981")),
    ("contact-3", "Mike Davis", "Operations Manager at BigCorp",
        Category::Contact, "/contacts", status("Follow-up", "#F59E0B")),
    ("call-1", "Call with TechCorp", "Discovery call about AI implementation",
        Category::Call, "/calls", dated("Completed", (2024, 10, 20), "#10B981")),
    ("call-2", "Follow-up with StartupXYZ", "Discuss pricing and implementation timeline",
        Category::Call, "/calls", dated("Scheduled", (2024, 10, 21), "#3B82F6")),
    ("voice-1", "Professional Male Voice", "Deep, authoritative voice for B2B calls",
        Category::VoiceClone, "/voice-cloning", status("Ready", "#10B981")),
    ("voice-2", "Friendly Female Voice", "Warm, approachable voice for customer support",
        Category::VoiceClone, "/voice-cloning", status("Training", "#F59E0B")),
    ("voice-new", "Create New Voice Clone", "Train a new AI voice for your campaigns",
        Category::VoiceClone, "/voice-cloning/new", status("Action", "#3B82F6")),
    ("analytics-1", "Call Performance Report", "Weekly performance metrics and insights",
        Category::Analytics, "/analytics", report((2024, 10, 21), 247)),
    ("analytics-2", "Campaign ROI Analysis", "Return on investment for all campaigns",
        Category::Analytics, "/analytics", report((2024, 10, 20), 12)),
    ("dashboard-1", "Dashboard Overview", "Main dashboard with key metrics and insights",
        Category::Analytics, "/dashboard", status("Live", "#10B981")),
    ("settings-1", "Account Settings", "Manage your account preferences and configuration",
        Category::Analytics, "/settings", status("Available", "#6B7280")),
];

/// Items of the built-in catalogue, in display order
pub fn builtin_items() -> Vec<SearchableItem> {
    CATALOGUE
        .iter()
        .map(|(id, title, description, category, href, meta)| SearchableItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: *category,
            href: href.to_string(),
            metadata: Some(ItemMetadata {
                status: meta.status.map(str::to_string),
                date: meta.date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                count: meta.count,
                color: meta.color.map(str::to_string),
            }),
        })
        .collect()
}
