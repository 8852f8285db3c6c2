use chrono::NaiveDate;

/// Long-form day label, e.g. "Tuesday, 14 November 2023".
#[must_use]
pub fn format_day(value: NaiveDate) -> String {
    value.format("%A, %-d %B %Y").to_string()
}
