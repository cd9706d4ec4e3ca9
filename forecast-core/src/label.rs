use chrono::NaiveDate;

pub const TODAY_LABEL: &str = "Today";

/// Returned when a date string can't be read.
pub const UNKNOWN_LABEL: &str = "???";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar label for a `yyyy-MM-dd` date: "Today" for the first day,
/// otherwise the abbreviated English weekday ("Mon", "Tue", ...).
///
/// Only the literal date components are read; no timezone conversion happens.
/// Never fails: an unreadable date yields [`UNKNOWN_LABEL`].
pub fn label(date: &str, is_today: bool) -> String {
    if is_today {
        return TODAY_LABEL.to_string();
    }

    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(day) => day.format("%a").to_string(),
        Err(_) => UNKNOWN_LABEL.to_string(),
    }
}
