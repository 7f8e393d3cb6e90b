//! Display formatting for API timestamps.
//!
//! The API sends ISO-8601 timestamps (`2024-03-05T10:00:00.000Z`). Lists show
//! `Mar 5, 2024`; detail pages show `March 5, 2024`. Input that does not parse
//! is returned unchanged.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// `Mon D, YYYY`.
pub fn short_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |date| {
        let month = date.month().to_string();
        format!("{} {}, {}", &month[..3], date.day(), date.year())
    })
}

/// `Month D, YYYY`.
pub fn long_date(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || raw.to_owned(),
        |date| format!("{} {}, {}", date.month(), date.day(), date.year()),
    )
}

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}
