use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codegen::EmitOptions;
use crate::ir::{Declaration, FieldDecl, TypeRef};
use crate::naming::type_name;
use crate::schema::{DataType, ObjectMember};

/// When two sibling shapes count as the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// Same field names at the same positions.
    #[default]
    NamesOnly,
    /// Same field names and inferred types at the same positions.
    NamesAndTypes,
}

impl DedupPolicy {
    /// Positional comparison; reordered fields are a different shape.
    pub fn equivalent(self, a: &ObjectMember, b: &ObjectMember) -> bool {
        let (a, b) = (a.members(), b.members());
        if a.is_empty() && b.is_empty() {
            return true;
        }
        a.len() == b.len()
            && a.iter().zip(b).all(|(x, y)| {
                x.name == y.name
                    && (self == DedupPolicy::NamesOnly || x.data_type == y.data_type)
            })
    }
}

/// Lower a member tree to declarations: the root first, each container's
/// children trailing it depth-first.
///
/// A root without members (scalar sample) lowers to nothing.
pub fn lower_to_decls(root: &ObjectMember, options: &EmitOptions) -> Vec<Declaration> {
    let mut out = Vec::new();
    lower_member(root, options, &mut out);
    for name in duplicate_names(&out) {
        warn!(name, "type name declared more than once; dedup only merges siblings");
    }
    out
}

/// Type names declared more than once, in first-repeat order.
///
/// Dedup is scoped to one parent, so the same key under unrelated branches
/// yields separate declarations sharing a name.
pub fn duplicate_names(decls: &[Declaration]) -> Vec<&str> {
    let mut repeated: Vec<&str> = Vec::new();
    for (i, decl) in decls.iter().enumerate() {
        let name = decl.name.as_str();
        if decls[..i].iter().any(|d| d.name == name) && !repeated.contains(&name) {
            repeated.push(name);
        }
    }
    repeated
}

fn lower_member(member: &ObjectMember, options: &EmitOptions, out: &mut Vec<Declaration>) {
    let Some(members) = member.members.as_deref() else {
        return;
    };

    // reserve the slot so the container precedes its children
    let slot = out.len();
    out.push(Declaration {
        name: type_name(&member.name),
        access: member.access_modifier,
        fields: Vec::new(),
    });

    // dedup scope: this container's direct children only
    let mut seen: Vec<&ObjectMember> = Vec::new();
    let mut fields = Vec::with_capacity(members.len());

    for child in members {
        let ty = match (child.data_type, child.element) {
            (DataType::List, Some(element)) => TypeRef::List(Box::new(TypeRef::Scalar(element))),
            (DataType::Object | DataType::List, None) => {
                let name = match seen.iter().find(|prev| options.dedup.equivalent(prev, child)) {
                    Some(prev) => {
                        let reused = type_name(&prev.name);
                        debug!(field = %child.name, reused = %reused, "reusing structurally equivalent type");
                        reused
                    }
                    None => {
                        seen.push(child);
                        lower_member(child, options, out);
                        type_name(&child.name)
                    }
                };
                if child.data_type == DataType::List {
                    TypeRef::List(Box::new(TypeRef::Named(name)))
                } else {
                    TypeRef::Named(name)
                }
            }
            (scalar, _) => TypeRef::Scalar(scalar),
        };
        fields.push(FieldDecl {
            key: child.name.clone(),
            property: type_name(&child.name),
            ty,
            nullable: child.nullable,
            access: child.access_modifier,
        });
    }

    out[slot].fields = fields;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build_member;
    use serde_json::json;

    fn lower(v: serde_json::Value) -> Vec<Declaration> {
        lower_to_decls(&build_member("root", &v), &EmitOptions::default())
    }

    fn names(decls: &[Declaration]) -> Vec<&str> {
        decls.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn scalar_root_lowers_to_nothing() {
        assert!(lower(json!(42)).is_empty());
        assert!(lower(json!(null)).is_empty());
    }

    #[test]
    fn children_trail_their_container() {
        let decls = lower(json!({
            "a": {"x": {"deep": 1}},
            "b": {"y": 2},
        }));
        assert_eq!(names(&decls), ["Root", "A", "X", "B"]);
    }

    #[test]
    fn empty_object_siblings_share_one_declaration() {
        let decls = lower(json!({"first": {}, "second": {}}));
        assert_eq!(names(&decls), ["Root", "First"]);
        let root = &decls[0];
        assert_eq!(root.fields[0].ty, TypeRef::Named("First".into()));
        assert_eq!(root.fields[1].ty, TypeRef::Named("First".into()));
    }

    #[test]
    fn reordered_fields_are_not_merged() {
        let decls = lower(json!({
            "home": {"street": "a", "city": "b"},
            "work": {"city": "c", "street": "d"},
        }));
        assert_eq!(names(&decls), ["Root", "Home", "Work"]);
    }

    #[test]
    fn same_names_merge_regardless_of_types_by_default() {
        let v = json!({
            "min": {"value": 1},
            "max": {"value": "high"},
        });
        let decls = lower(v.clone());
        assert_eq!(names(&decls), ["Root", "Min"]);

        let strict = EmitOptions { dedup: DedupPolicy::NamesAndTypes, ..EmitOptions::default() };
        let decls = lower_to_decls(&build_member("root", &v), &strict);
        assert_eq!(names(&decls), ["Root", "Min", "Max"]);
    }

    #[test]
    fn dedup_scope_is_per_parent() {
        let decls = lower(json!({
            "left": {"point": {"x": 1, "y": 2}},
            "right": {"point": {"x": 3, "y": 4}},
        }));
        // both have the shape {point}, so `right` reuses `Left`
        assert_eq!(names(&decls), ["Root", "Left", "Point"]);

        let decls = lower(json!({
            "left": {"point": {"x": 1, "y": 2}},
            "right": {"other": 0, "point": {"x": 3, "y": 4}},
        }));
        assert_eq!(names(&decls), ["Root", "Left", "Point", "Right", "Point"]);
        assert_eq!(duplicate_names(&decls), ["Point"]);
    }

    #[test]
    fn unrelated_branches_repeat_a_name_with_different_shapes() {
        let decls = lower(json!({"a": {"item": {"x": 1}}, "b": {"item": {"y": 1}}}));
        assert_eq!(names(&decls), ["Root", "A", "Item", "B", "Item"]);
        assert_eq!(decls[2].keys().collect::<Vec<_>>(), ["x"]);
        assert_eq!(decls[4].keys().collect::<Vec<_>>(), ["y"]);
        assert_eq!(duplicate_names(&decls), ["Item"]);

        let decls = lower(json!({"first": {}, "second": {}}));
        assert!(duplicate_names(&decls).is_empty());
    }

    #[test]
    fn lists_of_objects_reference_element_type() {
        let decls = lower(json!({"line_items": [{"sku": "a", "qty": 1}]}));
        assert_eq!(names(&decls), ["Root", "LineItems"]);
        assert_eq!(
            decls[0].fields[0].ty,
            TypeRef::List(Box::new(TypeRef::Named("LineItems".into())))
        );
        assert_eq!(decls[1].keys().collect::<Vec<_>>(), ["sku", "qty"]);
    }

    #[test]
    fn scalar_lists_declare_nothing() {
        let decls = lower(json!({"tags": ["a"], "scores": [1.5]}));
        assert_eq!(names(&decls), ["Root"]);
        assert_eq!(
            decls[0].fields[0].ty,
            TypeRef::List(Box::new(TypeRef::Scalar(DataType::String)))
        );
        assert_eq!(
            decls[0].fields[1].ty,
            TypeRef::List(Box::new(TypeRef::Scalar(DataType::Double)))
        );
    }

    #[test]
    fn empty_array_gets_empty_element_declaration() {
        let decls = lower(json!({"tags": []}));
        assert_eq!(names(&decls), ["Root", "Tags"]);
        assert!(decls[1].fields.is_empty());
    }

    #[test]
    fn properties_and_keys() {
        let decls = lower(json!({"user_id": 5, "first-name": "Ann", "nick": null}));
        let f = &decls[0].fields;
        assert_eq!(f[0].key, "user_id");
        assert_eq!(f[0].property, "UserId");
        assert_eq!(f[1].property, "FirstName");
        assert!(f[2].nullable);
        assert_eq!(f[2].ty, TypeRef::Scalar(DataType::String));
    }
}
