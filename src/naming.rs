//! Identifier helpers shared by every target.
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;

static INVALID_IDENT_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^a-z0-9_]").expect("static regex"));

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// PascalCase-ish type name: `user_id` → `UserId`, `person` → `Person`.
///
/// Only underscores split words; everything else is kept as-is, so the
/// function is idempotent.
pub fn format_name(name: &str) -> String {
    if name.contains('_') {
        name.split('_').map(capitalize).collect()
    } else {
        capitalize(name)
    }
}

/// Safe variable name for callers that need a default root name.
///
/// Blank input yields `variable_<random hex>`.
pub fn get_valid_variable_name(name: &str) -> String {
    if name.trim().is_empty() {
        return format!("variable_{}", random_suffix());
    }
    sanitize(name)
}

/// Deterministic part of [`get_valid_variable_name`].
pub fn sanitize(name: &str) -> String {
    let name = name.trim().replace([' ', '-'], "_");
    let mut out = INVALID_IDENT_CHARS.replace_all(&name, "_").into_owned();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.replace_range(..1, "_");
    }
    out
}

/// Identifier used for declared types and C# properties.
pub fn type_name(key: &str) -> String {
    let name = format_name(&sanitize(key));
    if name.is_empty() {
        "Field".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

fn random_suffix() -> String {
    // every RandomState is freshly keyed, so an empty hash is already random
    let hasher = RandomState::new().build_hasher();
    format!("{:08x}", hasher.finish() as u32)
}
