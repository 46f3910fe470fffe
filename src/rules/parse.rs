//! Rules backed by real parsers
//!
//! URLs are parsed with the `url` crate and dates with `chrono`. A parse
//! error is never surfaced: it simply fails the rule.

use std::borrow::Cow;

use std::sync::LazyLock;

use chrono::{DateTime, Days, NaiveDate};
use regex::Regex;
use url::Url;

use super::pattern::compile;
use super::Rule;
use crate::Value;

/// String must parse as an absolute URL.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUrl;

impl Rule for IsUrl {
    fn check(&self, value: &Value) -> bool {
        let Some(s) = value.as_str() else {
            return false;
        };
        match Url::parse(s) {
            Ok(_) => true,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(input = s, error = %_err, "url rejected");
                false
            }
        }
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be a valid URL.")
    }
}

/// Create a rule that requires an absolute URL.
///
/// Any scheme is accepted, including ones without an authority.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(is_url().check(&Value::from("https://example.com")));
/// assert!(is_url().check(&Value::from("mailto:someone@example.com")));
/// assert!(!is_url().check(&Value::from("invalid-url")));
/// assert!(!is_url().check(&Value::from("/relative/path")));
/// ```
pub fn is_url() -> IsUrl {
    IsUrl
}

/// String must parse as a calendar date or date-time.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDate;

impl Rule for IsDate {
    fn check(&self, value: &Value) -> bool {
        let Some(s) = value.as_str() else {
            return false;
        };
        if parse_date(s) {
            return true;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(input = s, "date rejected");
        false
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("Value must be a valid date.")
    }
}

/// Create a rule that requires a parseable date.
///
/// Parsing is permissive, the way browsers read dates:
/// - ISO 8601: `2023`, `2023-10`, `2023-1-5`, `2023-10-01T12:30`,
///   `2023-10-01T12:30:45.123Z`, `2023-10-01T12:30:45+02:00`
/// - RFC 2822: `Sun, 01 Oct 2023 12:30:45 +0000`
/// - month/day/year with `/`, `-` or `.`: `10/1/2023`, `10-01-2023`,
///   `01.10.2023`, and `2023/10/01`
/// - month names: `October 1, 2023`, `Oct 1 2023`, `1 October 2023`
///
/// Any of these may be followed by a time (`15:00`, `3:00 PM`) and a zone
/// (`Z`, `GMT+0200`, `+02:00`). Days up to 31 roll over into the next month,
/// so `2023-02-30` is March 2nd. Months above 12 and days above 31 fail.
///
/// # Example
///
/// ```rust
/// use checkmate::rules::*;
/// use checkmate::Value;
///
/// assert!(is_date().check(&Value::from("2023-10-01")));
/// assert!(is_date().check(&Value::from("May 20, 1993")));
/// assert!(is_date().check(&Value::from("Dec 25, 2023 3:00 PM")));
/// assert!(!is_date().check(&Value::from("invalid-date")));
/// assert!(!is_date().check(&Value::from("2023-02-32")));
/// ```
pub fn is_date() -> IsDate {
    IsDate
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const WEEKDAY: &str = r"(?:(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*,?\s+)?";

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([+-][0-9]{6}|[0-9]{4})(?:-([0-9]{1,2})(?:-([0-9]{1,2}))?)?(?:[T\s]+(.+))?$")
});

static NUMERIC_MDY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([0-9]{1,2})[/.-]([0-9]{1,2})[/.-]([0-9]{4}|[0-9]{2})(?:[\s,]+(.+))?$")
});

static NUMERIC_YMD: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})(?:[\s,]+(.+))?$")
});

static NAMED_MDY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^{WEEKDAY}([a-z]{{3,}})\.?\s+([0-9]{{1,2}}),?\s+([0-9]{{4}})(?:[\s,]+(.+))?$"
    ))
});

static NAMED_DMY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^{WEEKDAY}([0-9]{{1,2}})\s+([a-z]{{3,}})\.?,?\s+([0-9]{{4}})(?:[\s,]+(.+))?$"
    ))
});

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)^([0-9]{1,2}):([0-9]{2})(?::([0-9]{2})(?:\.[0-9]+)?)?",
        r"\s*(?:([ap])\.?m\.?)?",
        r"\s*(?:z|gmt|utc)?\s*(?:[+-]([0-9]{2}):?([0-9]{2}))?",
        r"(?:\s*\([^)]*\))?$",
    ))
});

fn parse_date(input: &str) -> bool {
    let s = input.trim();
    if s.is_empty() {
        return false;
    }

    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }

    parse_iso(s) || parse_legacy(s)
}

fn parse_iso(s: &str) -> bool {
    let Some(caps) = ISO_DATE.captures(s) else {
        return false;
    };
    let year = number::<i32>(caps.get(1));
    let month = caps.get(2).map_or(Some(1), |m| m.as_str().parse::<u32>().ok());
    let day = caps.get(3).map_or(Some(1), |m| m.as_str().parse::<u32>().ok());
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => {
            calendar_date(y, m, d).is_some() && time_of_day(caps.get(4).map(|m| m.as_str()))
        }
        _ => false,
    }
}

fn parse_legacy(s: &str) -> bool {
    let parsed = if let Some(caps) = NUMERIC_MDY.captures(s) {
        let year = number::<i32>(caps.get(3)).map(|y| match caps[3].len() {
            2 if y < 50 => y + 2000,
            2 => y + 1900,
            _ => y,
        });
        Some((year, number::<u32>(caps.get(1)), number::<u32>(caps.get(2)), caps.get(4)))
    } else if let Some(caps) = NUMERIC_YMD.captures(s) {
        Some((number(caps.get(1)), number(caps.get(2)), number(caps.get(3)), caps.get(4)))
    } else if let Some(caps) = NAMED_MDY.captures(s) {
        Some((number(caps.get(3)), month_number(&caps[1]), number(caps.get(2)), caps.get(4)))
    } else if let Some(caps) = NAMED_DMY.captures(s) {
        Some((number(caps.get(3)), month_number(&caps[2]), number(caps.get(1)), caps.get(4)))
    } else {
        None
    };

    match parsed {
        Some((Some(y), Some(m), Some(d), time)) => {
            calendar_date(y, m, d).is_some() && time_of_day(time.map(|t| t.as_str()))
        }
        _ => false,
    }
}

fn number<T: std::str::FromStr>(m: Option<regex::Match<'_>>) -> Option<T> {
    m?.as_str().parse().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .and_then(|i| u32::try_from(i + 1).ok())
}

/// Days past the end of the month roll into the next one, up to the 31st.
fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

fn time_of_day(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return true;
    };
    let Some(caps) = TIME_OF_DAY.captures(text) else {
        return false;
    };
    let field = |i: usize| caps.get(i).map_or(Some(0), |m| m.as_str().parse::<u32>().ok());
    let (Some(hour), Some(minute), Some(second)) = (field(1), field(2), field(3)) else {
        return false;
    };
    let (Some(offset_hours), Some(offset_minutes)) = (field(5), field(6)) else {
        return false;
    };

    let hour_ok = if caps.get(4).is_some() {
        (1..=12).contains(&hour)
    } else {
        hour < 24 || (hour == 24 && minute == 0 && second == 0)
    };
    hour_ok && minute < 60 && second < 60 && offset_hours < 24 && offset_minutes < 60
}
