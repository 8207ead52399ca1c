//! Infer a type schema from one JSON sample and scaffold declarations for it.
//!
//! The pipeline is: JSON value → [`schema::ObjectMember`] tree →
//! [`ir::Declaration`] list (structurally deduplicated) → source text for a
//! [`codegen::TargetLanguage`].
//!
//! ```
//! use json_scaffold::{generate, codegen::{EmitOptions, TargetLanguage}};
//!
//! let sample = serde_json::json!({ "user_id": 5, "name": "Ann" });
//! let src = generate(&sample, "person", TargetLanguage::TypeScript, &EmitOptions::default());
//! assert!(src.starts_with("export type Person = {"));
//! ```
pub mod codegen;
pub mod error;
pub mod input;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod path_de;
pub mod schema;
pub mod settings;

pub use error::{Error, Result};
pub use schema::{build_member, check_data_type, DataType, ObjectMember};

use codegen::{Codegen, EmitOptions, TargetLanguage};

/// Build the member tree for `value` and render it for `target` in one call.
pub fn generate(
    value: &serde_json::Value,
    root_name: &str,
    target: TargetLanguage,
    options: &EmitOptions,
) -> String {
    let root = build_member(root_name, value);
    let mut cg = Codegen::new(target, options.clone());
    cg.emit(&root);
    cg.into_string()
}
