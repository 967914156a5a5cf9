//! Calendar date helpers shared by the wire format and the form rules.

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Date format used both on the wire and in form inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a form input date (`YYYY-MM-DD`). Surrounding whitespace is ignored.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// The same month and day one calendar year later.
///
/// Returns `None` when that day does not exist in the following year
/// (a release on Feb 29).
pub fn one_year_after(date: NaiveDate) -> Option<NaiveDate> {
    date.with_year(date.year() + 1)
}

/// Parse a date coming from the API. Accepts a plain date or an ISO-8601
/// timestamp, in which case only the date part is kept.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    parse_input_date(trimmed).or_else(|| trimmed.get(..10).and_then(parse_input_date))
}

pub(crate) mod wire_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }
}
