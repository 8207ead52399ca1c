use crate::codegen::typescript::script_type;
use crate::codegen::{script_key, Renderer};
use crate::ir::{Declaration, TypeRef};

/// JSDoc `@typedef` blocks; same type mapping as TypeScript.
pub struct JsDoc;

impl Renderer for JsDoc {
    fn render_type(&self, ty: &TypeRef) -> String {
        script_type(ty)
    }

    // doc comments have their own gutter, so `indent` is unused
    fn render_declaration(&self, decl: &Declaration, _indent: &str) -> String {
        let mut out = format!("/**\n * @typedef {{Object}} {}\n", decl.name);
        for field in &decl.fields {
            let key = script_key(&field.key);
            let key = if field.nullable { format!("[{key}]") } else { key };
            out.push_str(&format!(
                " * @property {{{}}} {}\n",
                self.render_type(&field.ty),
                key
            ));
        }
        out.push_str(" */\n");
        out
    }
}
