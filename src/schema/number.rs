//! JavaScript-flavoured numeric coercion of text.
//!
//! Accepts what `Number(text)` accepts for non-blank input: decimal literals
//! with optional sign, fraction and exponent, `0x`/`0o`/`0b` integers, and
//! `Infinity`. Rust-only spellings (`inf`, `NaN`, `1_000`) are rejected.
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("static regex")
});

pub fn coerce(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }

    let (sign, body) = match t.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, t.strip_prefix('+').unwrap_or(t)),
    };
    if body == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // radix literals take no sign
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| t.strip_prefix(*p)) {
            return parse_radix(digits, radix);
        }
    }

    if DECIMAL.is_match(t) {
        t.parse::<f64>().ok()
    } else {
        None
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}
