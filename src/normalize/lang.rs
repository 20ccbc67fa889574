//! Lightweight language detection for titles and descriptions.
//!
//! Titles are short, so statistical detectors are unreliable on them anyway.
//! Detection works in two steps: the dominant Unicode script decides outright
//! for non-Latin text (kana means Japanese even alongside Han characters), and
//! Latin text is scored against small stopword lists. Anything undecided is
//! reported as English.

/// Language code used when nothing better can be determined.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Han,
    Kana,
    Hangul,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Thai,
    Devanagari,
}

fn script_of(c: char) -> Option<Script> {
    match c as u32 {
        0x0041..=0x005A | 0x0061..=0x007A | 0x00C0..=0x024F => Some(Script::Latin),
        0x0370..=0x03FF => Some(Script::Greek),
        0x0400..=0x04FF => Some(Script::Cyrillic),
        0x0590..=0x05FF => Some(Script::Hebrew),
        0x0600..=0x06FF => Some(Script::Arabic),
        0x0900..=0x097F => Some(Script::Devanagari),
        0x0E00..=0x0E7F => Some(Script::Thai),
        0x3040..=0x30FF => Some(Script::Kana),
        0x3400..=0x4DBF | 0x4E00..=0x9FFF => Some(Script::Han),
        0xAC00..=0xD7AF | 0x1100..=0x11FF => Some(Script::Hangul),
        _ => None,
    }
}

const STOPWORDS: &[(&str, &[&str])] = &[
    ("en", &["the", "of", "and", "in", "to", "is", "with", "for", "on", "by"]),
    ("fr", &["le", "la", "les", "des", "du", "et", "est", "une", "dans", "pour"]),
    ("de", &["der", "die", "das", "und", "ist", "nicht", "mit", "ein", "eine", "für"]),
    ("es", &["el", "los", "las", "del", "y", "con", "una", "por", "para", "que"]),
    ("it", &["il", "gli", "della", "di", "che", "con", "una", "per", "sono", "nel"]),
    ("pt", &["o", "os", "da", "do", "em", "não", "com", "uma", "para", "são"]),
    ("nl", &["de", "het", "een", "en", "van", "niet", "met", "voor", "zijn", "ik"]),
];

/// Detect the language of `text`, returning an ISO 639-1 style code.
pub fn detect_language(text: &str) -> &'static str {
    let mut counts = [0usize; 10];
    for script in text.chars().filter_map(script_of) {
        counts[script as usize] += 1;
    }

    if counts[Script::Kana as usize] > 0 {
        return "ja";
    }

    let dominant = [
        (Script::Latin, "en"),
        (Script::Han, "zh"),
        (Script::Hangul, "ko"),
        (Script::Cyrillic, "ru"),
        (Script::Greek, "el"),
        (Script::Arabic, "ar"),
        (Script::Hebrew, "he"),
        (Script::Thai, "th"),
        (Script::Devanagari, "hi"),
    ]
    .into_iter()
    .filter(|(script, _)| counts[*script as usize] > 0)
    .max_by_key(|(script, _)| counts[*script as usize]);

    match dominant {
        None => DEFAULT_LANGUAGE,
        Some((Script::Latin, _)) => detect_latin(text),
        Some((Script::Cyrillic, _)) if text.chars().any(|c| "іїєґІЇЄҐ".contains(c)) => "uk",
        Some((_, code)) => code,
    }
}

/// Stopword vote among Latin-script languages; ties keep the earlier entry.
fn detect_latin(text: &str) -> &'static str {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    let mut best = (DEFAULT_LANGUAGE, 0usize);
    for (code, stopwords) in STOPWORDS {
        let hits = words
            .iter()
            .filter(|w| stopwords.contains(&w.as_str()))
            .count();
        if hits > best.1 {
            best = (*code, hits);
        }
    }
    best.0
}
