//! Render declaration IR as source text for one target language.
pub mod csharp;
pub mod jsdoc;
pub mod typescript;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::Error;
use crate::ir::{Declaration, TypeRef};
use crate::lower::{lower_to_decls, DedupPolicy};
use crate::schema::ObjectMember;

/// Prefix of the text returned for an unsupported target tag.
pub const UNSUPPORTED_TARGET: &str = "// Unsupported target language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// C# classes with `[JsonPropertyName]` attributes.
    CSharp,
    /// TypeScript structural type aliases.
    TypeScript,
    /// JSDoc `@typedef` blocks.
    JsDoc,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::CSharp,
        TargetLanguage::TypeScript,
        TargetLanguage::JsDoc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::JsDoc => "jsdoc",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::TypeScript => "ts",
            TargetLanguage::JsDoc => "js",
        }
    }

    fn renderer(self) -> &'static dyn Renderer {
        match self {
            TargetLanguage::CSharp => &csharp::CSharp,
            TargetLanguage::TypeScript => &typescript::TypeScript,
            TargetLanguage::JsDoc => &jsdoc::JsDoc,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(TargetLanguage::CSharp),
            "typescript" | "ts" => Ok(TargetLanguage::TypeScript),
            "jsdoc" | "js" | "javascript" => Ok(TargetLanguage::JsDoc),
            _ => Err(Error::UnknownTarget(tag.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per indentation level inside a declaration.
    pub indent: usize,
    pub dedup: DedupPolicy,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            dedup: DedupPolicy::default(),
        }
    }
}

/// One target's syntax over the declaration IR.
pub trait Renderer {
    /// Lines placed once before the first declaration.
    fn preamble(&self) -> Option<&'static str> {
        None
    }

    fn render_type(&self, ty: &TypeRef) -> String;

    fn render_declaration(&self, decl: &Declaration, indent: &str) -> String;
}

/// Accumulates rendered declarations for one target.
pub struct Codegen {
    target: TargetLanguage,
    options: EmitOptions,
    out: String,
}

impl Codegen {
    pub fn new(target: TargetLanguage, options: EmitOptions) -> Self {
        Self {
            target,
            options,
            out: String::new(),
        }
    }

    /// Lower `root` and render its declarations.
    pub fn emit(&mut self, root: &ObjectMember) {
        let decls = lower_to_decls(root, &self.options);
        self.emit_decls(&decls);
    }

    pub fn emit_decls(&mut self, decls: &[Declaration]) {
        let renderer = self.target.renderer();
        let indent = " ".repeat(self.options.indent);
        for decl in decls {
            if self.out.is_empty() {
                if let Some(preamble) = renderer.preamble() {
                    self.out.push_str(preamble);
                    self.out.push('\n');
                }
            } else {
                self.out.push('\n');
            }
            self.out.push_str(&renderer.render_declaration(decl, &indent));
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

/// Render `root` for `target`.
pub fn generate(root: &ObjectMember, target: TargetLanguage, options: &EmitOptions) -> String {
    let mut cg = Codegen::new(target, options.clone());
    cg.emit(root);
    cg.into_string()
}

/// Render `root` for a raw target tag.
///
/// Unknown tags are not an error: the sentinel
/// `// Unsupported target language: <tag>` comes back instead.
pub fn generate_code(root: &ObjectMember, tag: &str, options: &EmitOptions) -> String {
    match tag.parse::<TargetLanguage>() {
        Ok(target) => generate(root, target, options),
        Err(error) => {
            warn!(%error, "no emitter for target");
            format!("{UNSUPPORTED_TARGET}: {tag}")
        }
    }
}

// ------------------------------- Helpers --------------------------------- //

static SCRIPT_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("static regex"));

/// Double-quoted literal, valid in C#, TypeScript and JavaScript.
pub(crate) fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Property key as written in a TypeScript/JSDoc shape; quoted unless it is
/// a plain identifier.
pub(crate) fn script_key(key: &str) -> String {
    if SCRIPT_IDENT.is_match(key) {
        key.to_string()
    } else {
        string_literal(key)
    }
}
