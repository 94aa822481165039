use std::sync::LazyLock;

use regex::Regex;

static YIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\s*(?:-|–|—|to|bis|à|a|or)\s*(\d+))?").expect("Invalid yield regex")
});

/// Number of servings from free text like "Serves 6" or "2-3 portions".
///
/// The first integer wins; for a range the larger end is taken. Text without
/// a number gives 0.
pub fn yields(text: &str) -> i16 {
    let Some(cap) = YIELD_REGEX.captures(text) else {
        return 0;
    };

    let first = cap.get(1).map(|m| to_i16(m.as_str())).unwrap_or(0);
    let second = cap.get(2).map(|m| to_i16(m.as_str())).unwrap_or(0);
    first.max(second)
}

/// Servings from a JSON number.
pub fn yields_from_number(value: f64) -> i16 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(i16::MAX)) as i16
}

fn to_i16(digits: &str) -> i16 {
    match digits.parse::<i64>() {
        Ok(n) => n.clamp(0, i64::from(i16::MAX)) as i16,
        // only digits, so the number is simply too large
        Err(_) => i16::MAX,
    }
}
