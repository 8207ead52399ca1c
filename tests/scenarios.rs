use json_scaffold::codegen::{generate, generate_code, EmitOptions, TargetLanguage};
use json_scaffold::naming::format_name;
use json_scaffold::{build_member, DataType, ObjectMember};
use serde_json::{json, Value};

fn emit(value: Value, root: &str, target: TargetLanguage) -> String {
    generate(&build_member(root, &value), target, &EmitOptions::default())
}

fn member<'a>(root: &'a ObjectMember, name: &str) -> &'a ObjectMember {
    root.members().iter().find(|m| m.name == name).expect("member present")
}

/// Field keys of the first TypeScript alias in `src`, quotes stripped.
fn first_alias_keys(src: &str) -> Vec<String> {
    src.lines()
        .skip(1)
        .take_while(|line| *line != "};")
        .map(|line| {
            let key = line.trim().split(':').next().unwrap_or_default();
            let key = key.strip_suffix('?').unwrap_or(key);
            serde_json::from_str::<String>(key).unwrap_or_else(|_| key.to_string())
        })
        .collect()
}

#[test]
fn person_as_structural_alias() {
    let out = emit(json!({"user_id": 5, "name": "Ann"}), "person", TargetLanguage::TypeScript);
    assert!(out.starts_with("export type Person = {\n"));
    assert!(out.contains("    user_id: number;\n"));
    assert!(out.contains("    name: string;\n"));
}

#[test]
fn ids_past_int32_are_long() {
    let root = build_member("root", &json!({"id": 2147483648u64}));
    assert_eq!(member(&root, "id").data_type, DataType::Long);
    let out = emit(json!({"id": 2147483648u64}), "root", TargetLanguage::CSharp);
    assert!(out.contains("public long Id { get; set; }"));
}

#[test]
fn empty_array_yields_empty_element_declaration() {
    let root = build_member("root", &json!({"tags": []}));
    let tags = member(&root, "tags");
    assert_eq!(tags.data_type, DataType::List);
    assert!(tags.members().is_empty());

    let out = emit(json!({"tags": []}), "root", TargetLanguage::CSharp);
    assert!(out.contains("public List<Tags> Tags { get; set; }"));
    assert!(out.contains("public class Tags\n{\n}\n"));
}

#[test]
fn null_field_is_nullable_string() {
    let root = build_member("root", &json!({"a": null}));
    let a = member(&root, "a");
    assert_eq!(a.data_type, DataType::String);
    assert!(a.nullable);
    let out = emit(json!({"a": null}), "root", TargetLanguage::TypeScript);
    assert!(out.contains("    a?: string;\n"));
}

#[test]
fn empty_object_siblings_declared_once_referenced_twice() {
    for target in TargetLanguage::ALL {
        let out = emit(json!({"left": {}, "right": {}}), "root", target);
        let declared = match target {
            TargetLanguage::CSharp => out.matches("public class Left").count(),
            TargetLanguage::TypeScript => out.matches("export type Left =").count(),
            TargetLanguage::JsDoc => out.matches("@typedef {Object} Left").count(),
        };
        assert_eq!(declared, 1, "{target}: {out}");
        assert!(!out.contains("Right ="), "{target}: {out}");
        assert!(!out.contains("class Right"), "{target}: {out}");
        assert!(!out.contains("{Object} Right"), "{target}: {out}");
    }
    let ts = emit(json!({"left": {}, "right": {}}), "root", TargetLanguage::TypeScript);
    assert!(ts.contains("    left: Left;\n    right: Left;\n"));
}

#[test]
fn reordered_siblings_are_not_merged() {
    let out = emit(
        json!({"a": {"x": 1, "y": 2}, "b": {"y": 3, "x": 4}}),
        "root",
        TargetLanguage::TypeScript,
    );
    assert!(out.contains("export type A = {"));
    assert!(out.contains("export type B = {"));
}

#[test]
fn rendered_keys_match_members_in_order() {
    let sample = json!({
        "zeta": 1,
        "content-type": "json",
        "alpha": null,
        "nested": {"k": true},
        "list": [1],
    });
    let root = build_member("root", &sample);
    let expected: Vec<String> = root.members().iter().map(|m| m.name.clone()).collect();
    let out = generate(&root, TargetLanguage::TypeScript, &EmitOptions::default());
    assert_eq!(first_alias_keys(&out), expected);
}

#[test]
fn format_name_idempotent_over_sample_keys() {
    for key in ["user_id", "CreatedAt", "__meta__", "x", "a_b_c"] {
        let once = format_name(key);
        assert_eq!(format_name(&once), once);
    }
}

#[test]
fn unsupported_target_is_reported_not_raised() {
    let root = build_member("root", &json!({"a": 1}));
    let out = generate_code(&root, "fortran", &EmitOptions::default());
    assert_eq!(out, "// Unsupported target language: fortran");
}

#[test]
fn root_array_declares_element_shape_under_root_name() {
    let out = emit(json!([{"id": 1}, {"id": 2, "extra": true}]), "rows", TargetLanguage::TypeScript);
    assert_eq!(out, "export type Rows = {\n    id: number;\n};\n");
}
