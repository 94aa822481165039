use std::sync::LazyLock;

use regex::Regex;

static ISO_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:\d+(?:[.,]\d+)?Y)?(?:\d+(?:[.,]\d+)?M)?(?:\d+(?:[.,]\d+)?W)?(?:\d+(?:[.,]\d+)?D)?(?:T(?:\d+(?:[.,]\d+)?H)?(?:\d+(?:[.,]\d+)?M)?(?:\d+(?:[.,]\d+)?S)?)?$",
    )
    .expect("Invalid ISO duration regex")
});

/// `^P` followed by a digit or `T`: the only inputs read as ISO-8601.
static ISO_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^P[\dT]").expect("Invalid ISO prefix regex"));

/// French and Italian "1h30": minutes written after the hour mark with no unit.
/// Group 3 catches a trailing unit word, in which case the unit regexes apply.
static HOURS_MINUTES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*h\s*(\d{1,2})(\s*\p{L}+)?(?:[^\p{L}\d]|$)")
        .expect("Invalid hours-minutes regex")
});

static NUMBER_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[.,]\d+)?$").expect("Invalid number regex"));

static DAYS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:[.,]\d+)?)\s*(?:days|day|jours|jour|tage|tag|d)(?:[^\p{L}]|$)")
        .expect("Invalid days regex")
});

static HOURS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:[.,]\d+)?)\s*(?:hours|hour|hrs|hr|heures|heure|horas|hora|stunden|stunde|std|ore|ora|h)(?:[^\p{L}]|$)",
    )
    .expect("Invalid hours regex")
});

static MINUTES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+(?:[.,]\d+)?)\s*(?:minutes|minute|minuten|minuti|minutos|minuto|mins|min|m)(?:[^\p{L}]|$)",
    )
    .expect("Invalid minutes regex")
});

static SECONDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:seconds|second|secs|sec|s)(?:[^\p{L}]|$)")
        .expect("Invalid seconds regex")
});

/// Normalize a duration to ISO-8601.
///
/// Valid ISO durations are kept (upper-cased), negative ones are dropped,
/// free-form text such as `"1 hr 20 min"`, `"1h30"` or a bare number of
/// minutes is rewritten as `PT1H20M`. Anything else yields an empty string.
///
/// When a unit appears more than once (`"1 hour rise plus 2 hours chill"`)
/// the largest value is taken, not the sum. Ranges read the same way
/// (`"10-15 minutes"` is 15 minutes), and a recipe card's time field names
/// one span, not a schedule of steps.
pub fn duration(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if ISO_PREFIX_REGEX.is_match(trimmed) {
        let upper = trimmed.to_ascii_uppercase();
        return if is_iso_duration(&upper) {
            upper
        } else {
            String::new()
        };
    }
    if trimmed.starts_with('-') {
        return String::new();
    }

    if NUMBER_ONLY_REGEX.is_match(trimmed) {
        return match parse_number(trimmed) {
            Some(minutes) => format_seconds((minutes * 60.0).round() as u64),
            None => String::new(),
        };
    }

    let lower = trimmed.to_lowercase();
    if let Some(cap) = HOURS_MINUTES_REGEX.captures(&lower) {
        if cap.get(3).is_none() {
            let hours = cap.get(1).and_then(|m| parse_number(m.as_str())).unwrap_or(0.0);
            let minutes = cap.get(2).and_then(|m| parse_number(m.as_str())).unwrap_or(0.0);
            return format_seconds((hours * 3_600.0 + minutes * 60.0).round() as u64);
        }
    }

    let mut total = 0.0;
    let mut matched = false;
    for (regex, unit_seconds) in [
        (&*DAYS_REGEX, 86_400.0),
        (&*HOURS_REGEX, 3_600.0),
        (&*MINUTES_REGEX, 60.0),
        (&*SECONDS_REGEX, 1.0),
    ] {
        if let Some(value) = largest_capture(regex, &lower) {
            total += value * unit_seconds;
            matched = true;
        }
    }

    if matched {
        format_seconds(total.round() as u64)
    } else {
        String::new()
    }
}

/// Whether `value` is a lexically valid, non-negative ISO-8601 duration.
pub fn is_iso_duration(value: &str) -> bool {
    ISO_DURATION_REGEX.is_match(value)
        && value.len() > 1
        && !value.ends_with('T')
        && value.chars().any(|c| c.is_ascii_digit())
}

/// The largest value captured by `regex`; for ranges like "10-15 minutes" only
/// the upper end is followed by the unit, so that is what matches.
fn largest_capture(regex: &Regex, text: &str) -> Option<f64> {
    regex
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).and_then(|m| parse_number(m.as_str())))
        .reduce(f64::max)
}

fn parse_number(text: &str) -> Option<f64> {
    text.replace(',', ".").parse::<f64>().ok()
}

fn format_seconds(total: u64) -> String {
    if total == 0 {
        return "PT0S".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::from("PT");
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds}S"));
    }
    out
}
