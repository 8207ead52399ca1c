//! Optional JSON settings file; CLI flags override its values.
//!
//! ```json
//! { "root_name": "Person", "target": "csharp", "indent": 2, "dedup": "names-and-types" }
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codegen::EmitOptions;
use crate::error::{Error, Result};
use crate::lower::DedupPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub root_name: Option<String>,
    /// Raw target tag; unknown tags are reported at emission time.
    pub target: Option<String>,
    pub indent: Option<usize>,
    pub dedup: Option<DedupPolicy>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: origin.clone(),
            source,
        })?;
        crate::path_de::from_str_with_path(&src, &origin)
    }

    /// Values set in `overrides` win.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            root_name: overrides.root_name.or(self.root_name),
            target: overrides.target.or(self.target),
            indent: overrides.indent.or(self.indent),
            dedup: overrides.dedup.or(self.dedup),
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        let defaults = EmitOptions::default();
        EmitOptions {
            indent: self.indent.unwrap_or(defaults.indent),
            dedup: self.dedup.unwrap_or(defaults.dedup),
        }
    }
}
