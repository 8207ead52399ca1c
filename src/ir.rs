// Declaration IR for codegen. No target syntax here.

use crate::schema::{AccessModifier, DataType};

#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Scalar(DataType),      // never Object/List
    Named(String),         // a declared (or reused) type
    List(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub key: String,       // wire name, exactly as in the sample
    pub property: String,  // identifier-safe, PascalCase
    pub ty: TypeRef,
    pub nullable: bool,
    pub access: AccessModifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub access: AccessModifier,
    pub fields: Vec<FieldDecl>, // source order
}

impl Declaration {
    /// Wire keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}
