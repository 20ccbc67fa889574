//! Running-time parsing (`"Total length: 45:44"`, `"1:02:03"`, `"2744"`).

use std::sync::LazyLock;

use regex::Regex;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d{2})(?::(\d{2}))?").unwrap());

/// Parse a running time into whole seconds.
///
/// Clock notation anywhere in the text wins (`M:SS` or `H:MM:SS`; the last
/// occurrence is used so totals after per-track times are preferred). Bare
/// numbers are taken as seconds. Zero is treated as unknown.
pub fn parse_duration(text: &str) -> Option<u32> {
    let text = text.trim();

    let seconds = match CLOCK_RE.captures_iter(text).last() {
        Some(caps) => {
            let first: u32 = caps[1].parse().ok()?;
            let second: u32 = caps[2].parse().ok()?;
            match caps.get(3) {
                Some(third) => {
                    let third: u32 = third.as_str().parse().ok()?;
                    first
                        .checked_mul(3600)?
                        .checked_add(second * 60)?
                        .checked_add(third)?
                }
                None => first.checked_mul(60)?.checked_add(second)?,
            }
        }
        None => {
            let secs = text.parse::<f64>().ok().filter(|s| s.is_finite() && *s >= 0.0)?;
            let secs = secs.round();
            if secs > f64::from(u32::MAX) {
                return None;
            }
            secs as u32
        }
    };

    (seconds > 0).then_some(seconds)
}
