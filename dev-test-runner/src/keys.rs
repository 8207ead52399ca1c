//! Read field keys back out of rendered declarations.
use json_scaffold::codegen::TargetLanguage;
use once_cell::sync::Lazy;
use regex::Regex;

static CS_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+ class \w+$").unwrap());
static CS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*\[JsonPropertyName\(("(?:[^"\\]|\\.)*")\)\]$"#).unwrap());

static TS_ALIAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^export type \w+ = \{$").unwrap());
static TS_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s+("(?:[^"\\]|\\.)*"|[A-Za-z_$][\w$]*)\??: "#).unwrap()
});

static JS_TYPEDEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ \* @typedef \{Object\} \w+$").unwrap());
static JS_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^ \* @property \{[^}]*\} \[?("(?:[^"\\]|\\.)*"|[A-Za-z_$][\w$]*)\]?$"#).unwrap()
});

/// One key list per declaration, in rendered order.
pub fn extract_keys(target: TargetLanguage, src: &str) -> Vec<Vec<String>> {
    let (start, field) = match target {
        TargetLanguage::CSharp => (&*CS_CLASS, &*CS_ATTR),
        TargetLanguage::TypeScript => (&*TS_ALIAS, &*TS_FIELD),
        TargetLanguage::JsDoc => (&*JS_TYPEDEF, &*JS_PROPERTY),
    };

    let mut out: Vec<Vec<String>> = Vec::new();
    for line in src.lines() {
        if start.is_match(line) {
            out.push(Vec::new());
        } else if let (Some(caps), Some(current)) = (field.captures(line), out.last_mut()) {
            current.push(unquote(&caps[1]));
        }
    }
    out
}

fn unquote(key: &str) -> String {
    if key.starts_with('"') {
        serde_json::from_str::<String>(key).unwrap_or_else(|_| key.to_string())
    } else {
        key.to_string()
    }
}
