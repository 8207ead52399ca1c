//! Reading samples: files, stdin, JSON Pointer selection.
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::naming::get_valid_variable_name;

/// Input spelling for standard input.
pub const STDIN: &str = "-";

/// One parsed sample and where it came from.
#[derive(Debug, Clone)]
pub struct Document {
    pub origin: String,
    /// File stem, used to derive a default root name.
    pub stem: Option<String>,
    pub value: Value,
}

impl Document {
    pub fn default_root_name(&self) -> String {
        match &self.stem {
            Some(stem) => get_valid_variable_name(stem),
            None => "Root".to_string(),
        }
    }
}

/// Parse JSON text; errors carry the JSON path where parsing stopped.
pub fn parse_json(src: &str, origin: &str) -> Result<Value> {
    crate::path_de::from_str_with_path(src, origin)
}

/// Replace `value` by the node `pointer` (RFC 6901) selects.
pub fn select_pointer(mut value: Value, pointer: &str, origin: &str) -> Result<Value> {
    value
        .pointer_mut(pointer)
        .map(Value::take)
        .ok_or_else(|| Error::Pointer {
            origin: origin.to_string(),
            pointer: pointer.to_string(),
        })
}

pub fn read_document(path: &Path) -> Result<Document> {
    let origin = path.display().to_string();
    let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: origin.clone(),
        source,
    })?;
    let value = parse_json(&src, &origin)?;
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
    Ok(Document { origin, stem, value })
}

pub fn read_stdin() -> Result<Document> {
    let origin = "<stdin>".to_string();
    let mut src = String::new();
    std::io::stdin()
        .read_to_string(&mut src)
        .map_err(|source| Error::Io {
            path: origin.clone(),
            source,
        })?;
    let value = parse_json(&src, &origin)?;
    Ok(Document { origin, stem: None, value })
}
