use crate::codegen::{script_key, Renderer};
use crate::ir::{Declaration, TypeRef};
use crate::schema::DataType;

/// TypeScript `export type X = { … };` aliases.
pub struct TypeScript;

/// Type mapping shared with the JSDoc target.
pub(crate) fn script_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Scalar(data_type) => match data_type {
            DataType::DateTime => "Date",
            DataType::Bool => "boolean",
            DataType::Int | DataType::Long | DataType::Double => "number",
            DataType::String => "string",
            DataType::Object | DataType::List => "unknown",
        }
        .to_string(),
        TypeRef::Named(name) => name.clone(),
        TypeRef::List(item) => format!("{}[]", script_type(item)),
    }
}

impl Renderer for TypeScript {
    fn render_type(&self, ty: &TypeRef) -> String {
        script_type(ty)
    }

    fn render_declaration(&self, decl: &Declaration, indent: &str) -> String {
        let mut out = format!("export type {} = {{\n", decl.name);
        for field in &decl.fields {
            out.push_str(&format!(
                "{indent}{}{}: {};\n",
                script_key(&field.key),
                if field.nullable { "?" } else { "" },
                self.render_type(&field.ty),
            ));
        }
        out.push_str("};\n");
        out
    }
}
