//! Resolves report month names to the date range they cover.

use std::ops::RangeInclusive;

use time::{Date, Month, OffsetDateTime};

use crate::Error;

/// Parse a full English month name, ignoring case.
///
/// The mapping is a fixed, finite enumeration: abbreviations and non-English
/// names are not accepted.
pub(crate) fn parse_month_name(name: &str) -> Option<Month> {
    let month = match name.to_ascii_lowercase().as_str() {
        "january" => Month::January,
        "february" => Month::February,
        "march" => Month::March,
        "april" => Month::April,
        "may" => Month::May,
        "june" => Month::June,
        "july" => Month::July,
        "august" => Month::August,
        "september" => Month::September,
        "october" => Month::October,
        "november" => Month::November,
        "december" => Month::December,
        _ => return None,
    };

    Some(month)
}

/// The inclusive datetime range covered by `month` of `year`.
///
/// The range runs from midnight UTC on the first day of the month to midnight
/// UTC on its last day. Records timestamped later on the last day fall
/// outside the range, matching the report shape this service replaces.
pub(crate) fn month_bounds(month: Month, year: i32) -> RangeInclusive<OffsetDateTime> {
    let last_day = time::util::days_in_year_month(year, month);

    let start = Date::from_calendar_date(year, month, 1)
        .unwrap()
        .midnight()
        .assume_utc();
    let end = Date::from_calendar_date(year, month, last_day)
        .unwrap()
        .midnight()
        .assume_utc();

    start..=end
}

/// Resolve a report month name to the range it covers in the current year.
///
/// The year is taken from the UTC clock at call time; it is not supplied by
/// the caller.
///
/// # Errors
/// Returns an [Error::UnknownMonth] if `month_name` is not a full English
/// month name.
pub(crate) fn resolve_report_range(
    month_name: &str,
) -> Result<RangeInclusive<OffsetDateTime>, Error> {
    let month = parse_month_name(month_name)
        .ok_or_else(|| Error::UnknownMonth(month_name.to_owned()))?;
    let year = OffsetDateTime::now_utc().year();

    Ok(month_bounds(month, year))
}
