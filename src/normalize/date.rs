//! Permissive release-date parsing.
//!
//! Release pages write dates every way imaginable: `"Released August 17, 1959"`,
//! `"17 August 1959"`, `"1959-08-17"`, `"08/17/1959"`, or just `"1959"`.
//! [`parse_date`] first tries a list of exact formats, then falls back to a
//! token scan that picks out a year, an optional month name and an optional
//! day while ignoring surrounding words.
//!
//! Missing parts resolve to the first of the month / first of the year so the
//! result is deterministic. Text without a plausible year is rejected.

use chrono::{Datelike, NaiveDate};

// Month-first before day-first, so ambiguous `08/07/1959` reads as August 7
const EXACT_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y",
    "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y",
];

const YEARS: std::ops::RangeInclusive<i32> = 1000..=2999;

/// Parse free-form date text.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    EXACT_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(text, fmt)
                .ok()
                .filter(|date| YEARS.contains(&date.year()))
        })
        .or_else(|| scan_tokens(text))
}

/// Format as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Token-level fallback for dates embedded in prose.
///
/// A month name only counts when it is the one closest to the year, and the
/// day is the number closest to that month name.
fn scan_tokens(text: &str) -> Option<NaiveDate> {
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();

    // (position, value) of every numeric token, ordinal suffixes stripped
    let numbers: Vec<(usize, u32)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| numeric_value(t).map(|n| (i, n)))
        .collect();

    let (year_pos, year) = numbers
        .iter()
        .find(|(_, n)| YEARS.contains(&(*n as i32)))
        .copied()?;

    let month_name = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| month_token_to_number(t).map(|m| (i, m)))
        .min_by_key(|(i, _)| i.abs_diff(year_pos));

    let rest: Vec<(usize, u32)> = numbers
        .iter()
        .filter(|(i, _)| *i != year_pos)
        .copied()
        .collect();

    let (month, day) = match month_name {
        Some((month_pos, month)) => {
            let day = rest
                .iter()
                .min_by_key(|(i, _)| i.abs_diff(month_pos))
                .map_or(1, |(_, d)| *d);
            (month, day)
        }
        None => match rest.as_slice() {
            [] => (1, 1),
            // Day-first only when the first number cannot be a month
            [(_, a), (_, b), ..] if *a > 12 && *b <= 12 => (*b, *a),
            [(_, a), (_, b), ..] => (*a, *b),
            [(_, m)] => (*m, 1),
        },
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Digits, optionally followed by an English ordinal suffix (`17th`).
fn numeric_value(token: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Convert a lowercase month token to a month number (1-12).
fn month_token_to_number(token: &str) -> Option<u32> {
    match token {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn parses_exact_formats() {
        assert_eq!(parse_date("1959-08-17"), ymd(1959, 8, 17));
        assert_eq!(parse_date("08/17/1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("August 17, 1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("17 Aug 1959"), ymd(1959, 8, 17));
    }

    #[test]
    fn parses_dates_inside_prose() {
        assert_eq!(parse_date("Released August 17, 1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("Released 17th August 1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("Recorded: 1959-08-17 (NYC)"), ymd(1959, 8, 17));
    }

    #[test]
    fn partial_dates_anchor_to_first_day() {
        assert_eq!(parse_date("August 1959"), ymd(1959, 8, 1));
        assert_eq!(parse_date("1959"), ymd(1959, 1, 1));
    }

    #[test]
    fn reads_day_first_numeric_dates() {
        assert_eq!(parse_date("17/08/1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("17-08-1959"), ymd(1959, 8, 17));
        assert_eq!(parse_date("Released 17/08/1959"), ymd(1959, 8, 17));
        // Ambiguous stays month-first
        assert_eq!(parse_date("08/07/1959"), ymd(1959, 8, 7));
    }

    #[test]
    fn month_name_nearest_the_year_wins() {
        assert_eq!(
            parse_date("Recorded in March, released 12 August 1959"),
            ymd(1959, 8, 12)
        );
        assert_eq!(parse_date("Aug 1959"), ymd(1959, 8, 1));
        assert_eq!(parse_date("March 1972"), ymd(1972, 3, 1));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("sometime soon, maybe"), None);
        assert_eq!(parse_date("@@## ??"), None);
        assert_eq!(parse_date("catalog 12345678"), None);
    }

    #[test]
    fn rejects_impossible_days() {
        assert_eq!(parse_date("February 30, 1959"), None);
        assert_eq!(parse_date("13/45/1959"), None);
    }

    #[test]
    fn formats_iso() {
        let date = NaiveDate::from_ymd_opt(1959, 8, 17).unwrap();
        assert_eq!(format_date(date), "1959-08-17");
    }
}
