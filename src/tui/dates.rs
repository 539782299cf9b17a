use chrono::{Datelike, NaiveDate, Utc};

/// Format an item date: "Jul 15" within the current year, "Jul 15, 2024" otherwise
pub fn format_item_date(date: &NaiveDate) -> String {
    format_item_date_relative_to(date, &Utc::now().date_naive())
}

fn format_item_date_relative_to(date: &NaiveDate, today: &NaiveDate) -> String {
    if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}
