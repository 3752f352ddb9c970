//! Date and time resolution for matched headers.
//!
//! Exports write dates as three numeric components whose order depends on the
//! phone's locale. The year is easy to place (four digits up front, otherwise
//! last); day and month need either a component greater than 12 or a
//! day-first hint, which [`infer_order`] can derive from a whole transcript.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::signature::HeaderMatch;

/// Numeric date components of one header.
///
/// For year-first dates `first` is the month and `second` the day. Otherwise
/// `first` and `second` are in written order and still ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub first: u32,
    pub second: u32,
    pub year: i32,
    pub year_first: bool,
}

impl DateParts {
    /// Reads the three written components.
    pub fn from_components(raw: [&str; 3]) -> Option<Self> {
        let [a, b, c] = raw;
        if a.len() == 4 {
            return Some(Self {
                first: b.parse().ok()?,
                second: c.parse().ok()?,
                year: a.parse().ok()?,
                year_first: true,
            });
        }
        Some(Self {
            first: a.parse().ok()?,
            second: b.parse().ok()?,
            year: expand_year(c)?,
            year_first: false,
        })
    }

    /// Returns `(day, month)`.
    ///
    /// A component greater than 12 is the day no matter what `days_first`
    /// says.
    pub fn day_month(&self, days_first: bool) -> (u32, u32) {
        if self.year_first {
            return (self.second, self.first);
        }
        match (self.first > 12, self.second > 12) {
            (true, false) => (self.first, self.second),
            (false, true) => (self.second, self.first),
            _ if days_first => (self.first, self.second),
            _ => (self.second, self.first),
        }
    }
}

/// Two-digit years live in the 2000s.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    Some(if raw.len() == 2 { 2000 + year } else { year })
}

/// Converts a 12-hour clock reading to 24-hour.
fn to_24_hour(hour: u32, meridiem: Option<&str>) -> u32 {
    let Some(meridiem) = meridiem else {
        return hour;
    };
    let is_pm = meridiem
        .chars()
        .find(char::is_ascii_alphabetic)
        .is_some_and(|c| c.eq_ignore_ascii_case(&'p'));

    match (is_pm, hour) {
        (false, 12) => 0,
        (true, h) if h < 12 => h + 12,
        (_, h) => h,
    }
}

/// Resolves a header's timestamp.
///
/// Returns `None` if the date or time is out of range (31/02, 25:00, ...).
pub fn resolve_timestamp(header: &HeaderMatch<'_>, days_first: bool) -> Option<NaiveDateTime> {
    let parts = DateParts::from_components(header.date)?;
    let (day, month) = parts.day_month(days_first);
    let date = NaiveDate::from_ymd_opt(parts.year, month, day)?;

    let hour: u32 = header.hour.parse().ok()?;
    let minute: u32 = header.minute.parse().ok()?;
    let second: u32 = match header.second {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_opt(to_24_hour(hour, header.meridiem), minute, second)?;

    Some(date.and_time(time))
}

/// Infers whether the first date component is the day.
///
/// Only dates that are not year-first take part. In order:
///
/// 1. a first component above 12 means day-first, a second one above 12
///    means month-first;
/// 2. within a year, dates are chronological, so the month never goes down:
///    the component that decreases is the day;
/// 3. the day changes more often than the month: the component with the
///    larger total movement is the day.
///
/// Returns `None` if none of this settles it.
pub fn infer_order(dates: &[DateParts]) -> Option<bool> {
    let dates: Vec<&DateParts> = dates.iter().filter(|d| !d.year_first).collect();
    if dates.is_empty() {
        return None;
    }

    if dates.iter().any(|d| d.first > 12) {
        return Some(true);
    }
    if dates.iter().any(|d| d.second > 12) {
        return Some(false);
    }

    let same_year = || {
        dates
            .windows(2)
            .filter(|pair| pair[0].year == pair[1].year)
            .map(|pair| (pair[0], pair[1]))
    };

    if same_year().any(|(prev, next)| next.first < prev.first) {
        return Some(true);
    }
    if same_year().any(|(prev, next)| next.second < prev.second) {
        return Some(false);
    }

    let (first_moves, second_moves) = dates.windows(2).fold((0u64, 0u64), |(f, s), pair| {
        (
            f + u64::from(pair[0].first.abs_diff(pair[1].first)),
            s + u64::from(pair[0].second.abs_diff(pair[1].second)),
        )
    });

    match first_moves.cmp(&second_moves) {
        Ordering::Greater => Some(true),
        Ordering::Less => Some(false),
        Ordering::Equal => None,
    }
}
