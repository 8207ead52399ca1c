use crate::codegen::{string_literal, Renderer};
use crate::ir::{Declaration, TypeRef};
use crate::schema::DataType;

/// C# classes with System.Text.Json wire-name attributes.
pub struct CSharp;

fn scalar(data_type: DataType) -> &'static str {
    match data_type {
        DataType::String => "string",
        DataType::DateTime => "DateTime",
        DataType::Bool => "bool",
        DataType::Int => "int",
        DataType::Long => "long",
        DataType::Double => "double",
        // containers always arrive as Named/List
        DataType::Object | DataType::List => "object",
    }
}

impl Renderer for CSharp {
    fn preamble(&self) -> Option<&'static str> {
        Some("using System;\nusing System.Collections.Generic;\nusing System.Text.Json.Serialization;\n")
    }

    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Scalar(data_type) => scalar(*data_type).to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::List(item) => format!("List<{}>", self.render_type(item)),
        }
    }

    fn render_declaration(&self, decl: &Declaration, indent: &str) -> String {
        let mut out = format!("{} class {}\n{{\n", decl.access.as_str(), decl.name);
        for (i, field) in decl.fields.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "{indent}[JsonPropertyName({})]\n",
                string_literal(&field.key)
            ));
            // members may not share the enclosing type's name (CS0542)
            let property = if field.property == decl.name {
                format!("{}Value", field.property)
            } else {
                field.property.clone()
            };
            out.push_str(&format!(
                "{indent}{} {}{} {property} {{ get; set; }}\n",
                field.access.as_str(),
                self.render_type(&field.ty),
                if field.nullable { "?" } else { "" },
            ));
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::codegen::{generate, EmitOptions, TargetLanguage};
    use crate::schema::build_member;
    use serde_json::json;

    fn cs(v: serde_json::Value, root: &str) -> String {
        generate(&build_member(root, &v), TargetLanguage::CSharp, &EmitOptions::default())
    }

    #[test]
    fn class_with_attributes() {
        let out = cs(json!({"user_id": 5, "name": "Ann", "nick": null}), "person");
        let expected = "\
using System;
using System.Collections.Generic;
using System.Text.Json.Serialization;

public class Person
{
    [JsonPropertyName(\"user_id\")]
    public int UserId { get; set; }

    [JsonPropertyName(\"name\")]
    public string Name { get; set; }

    [JsonPropertyName(\"nick\")]
    public string? Nick { get; set; }
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn scalar_mapping() {
        let out = cs(json!({
            "big": 2147483648i64,
            "ratio": 0.5,
            "ok": false,
            "at": "2024-03-07",
        }), "root");
        assert!(out.contains("public long Big { get; set; }"));
        assert!(out.contains("public double Ratio { get; set; }"));
        assert!(out.contains("public bool Ok { get; set; }"));
        assert!(out.contains("public DateTime At { get; set; }"));
    }

    #[test]
    fn nested_and_list_types() {
        let out = cs(json!({
            "address": {"city": "Oslo"},
            "orders": [{"id": 1}],
            "tags": ["x"],
        }), "customer");
        assert!(out.contains("public Address Address { get; set; }"));
        assert!(out.contains("public List<Orders> Orders { get; set; }"));
        assert!(out.contains("public List<string> Tags { get; set; }"));
        let customer = out.find("public class Customer").unwrap();
        let address = out.find("public class Address").unwrap();
        let orders = out.find("public class Orders").unwrap();
        assert!(customer < address && address < orders);
    }

    #[test]
    fn wire_names_are_escaped() {
        let out = cs(json!({"say \"hi\"": 1}), "root");
        assert!(out.contains(r#"[JsonPropertyName("say \"hi\"")]"#), "{out}");
        assert!(out.contains("public int SayHi { get; set; }"), "{out}");
    }

    #[test]
    fn property_named_like_its_class_is_suffixed() {
        let out = cs(json!({"tags": [{"tags": "x"}]}), "root");
        assert!(out.contains("public List<Tags> Tags { get; set; }"), "{out}");
        let class = &out[out.find("public class Tags").unwrap()..];
        assert!(class.contains(r#"[JsonPropertyName("tags")]"#), "{out}");
        assert!(class.contains("public string TagsValue { get; set; }"), "{out}");
    }
}
