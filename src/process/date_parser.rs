use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// `%.f` also accepts a missing fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y", "%B %d, %Y",
    "%b %d, %Y", "%d %B %Y", "%d %b %Y",
];

static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(?:[-/.](\d{1,2}))?$").expect("valid regex"));

static MONTH_NAME_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\.?,?\s+(\d{4})$").expect("valid regex"));

pub fn year_of(dt: &NaiveDateTime) -> i32 {
    dt.year()
}

/// A bare year stored as a number, e.g. `2021.0`.
pub fn year_from_number(n: f64) -> Option<i32> {
    if n.fract() == 0.0 && (1000.0..=9999.0).contains(&n) {
        Some(n as i32)
    } else {
        None
    }
}

/// Best-effort year extraction from a free-form date string.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.year());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.year());
        }
    }

    // "2023", "2023-05", "2023/5"
    if let Some(caps) = YEAR_MONTH.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        if let Some(m) = caps.get(2) {
            let month: u32 = m.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)?;
        }
        return Some(year);
    }

    // "March 2023", "Sep. 2021"
    if let Some(caps) = MONTH_NAME_YEAR.captures(s) {
        let probe = format!("1 {} {}", &caps[1], &caps[2]);
        return NaiveDate::parse_from_str(&probe, "%d %B %Y")
            .or_else(|_| NaiveDate::parse_from_str(&probe, "%d %b %Y"))
            .ok()
            .map(|d| d.year());
    }

    None
}
