//! Schema builder: one JSON sample in, one `ObjectMember` tree out.
//!
//! Policy:
//! - Scalars are classified from their text: numbers first, then dates,
//!   then strings. Quoted numbers (`"42"`) count as numbers.
//! - `null` and `""` widen to `string` and mark the member nullable.
//! - Arrays are typed from their first element only.
//! - Never fails on a well-formed `serde_json::Value`.
pub mod date;
pub mod number;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

/// `i32::MAX`; integers at or beyond this magnitude are `long`.
pub const MAX_INT32: i64 = 0x7fff_ffff;

// ------------------------------- Types ----------------------------------- //

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataType {
    #[serde(rename = "string")]
    String,
    DateTime,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "list")]
    List,
}

impl DataType {
    pub fn is_container(self) -> bool {
        matches!(self, DataType::Object | DataType::List)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::DateTime => "DateTime",
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Double => "double",
            DataType::Object => "object",
            DataType::List => "list",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    #[default]
    Public,
    Private,
}

impl AccessModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
        }
    }
}

/// One node of the inferred schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMember {
    /// Source key, the root name, or the owning key for list elements.
    pub name: String,
    pub data_type: DataType,
    /// `Some` iff `data_type` is a container. For lists: the first element's fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ObjectMember>>,
    /// Scalar element type of a list whose first element is a scalar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<DataType>,
    pub nullable: bool,
    pub access_modifier: AccessModifier,
    /// Nesting depth. Advisory only.
    pub indent: usize,
}

impl ObjectMember {
    pub fn scalar(name: &str, data_type: DataType, nullable: bool, indent: usize) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            members: None,
            element: None,
            nullable,
            access_modifier: AccessModifier::Public,
            indent,
        }
    }

    pub fn container(
        name: &str,
        data_type: DataType,
        members: Vec<ObjectMember>,
        element: Option<DataType>,
        indent: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            members: Some(members),
            element,
            nullable: false,
            access_modifier: AccessModifier::Public,
            indent,
        }
    }

    /// Sub-members, empty for leaves.
    pub fn members(&self) -> &[ObjectMember] {
        self.members.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.members.is_none()
    }

    /// Objects and lists of objects get a declaration of their own; scalar
    /// lists do not.
    pub fn declares_type(&self) -> bool {
        match self.data_type {
            DataType::Object => true,
            DataType::List => self.element.is_none(),
            _ => false,
        }
    }
}

// ----------------------------- Inference --------------------------------- //

/// Classify scalar text. `None` stands for `null`.
///
/// Order matters: numeric coercion wins over dates, dates over strings.
/// Booleans are tagged by the caller and never reach this function.
pub fn check_data_type(text: Option<&str>) -> DataType {
    let Some(text) = text else {
        return DataType::String;
    };
    if text.trim().is_empty() {
        return DataType::String;
    }
    if let Some(n) = number::coerce(text) {
        return if text.contains('.') {
            DataType::Double
        } else if n.abs() >= MAX_INT32 as f64 {
            DataType::Long
        } else {
            DataType::Int
        };
    }
    if date::coerce(text).is_some() {
        return DataType::DateTime;
    }
    DataType::String
}

/// Build the member tree for one JSON sample.
pub fn build_member(name: &str, value: &Value) -> ObjectMember {
    build_at(name, value, 0)
}

fn build_at(name: &str, value: &Value, indent: usize) -> ObjectMember {
    trace!(name, indent, "building member");
    match value {
        Value::Null => ObjectMember::scalar(name, check_data_type(None), true, indent),
        Value::Bool(_) => ObjectMember::scalar(name, DataType::Bool, false, indent),
        Value::Number(n) => {
            // the source literal, kept verbatim by `arbitrary_precision`
            let text = n.to_string();
            ObjectMember::scalar(name, check_data_type(Some(&text)), false, indent)
        }
        Value::String(s) => {
            ObjectMember::scalar(name, check_data_type(Some(s)), s.is_empty(), indent)
        }
        Value::Object(map) => build_object(name, map, indent),
        Value::Array(xs) => build_list(name, xs, indent),
    }
}

fn build_object(name: &str, map: &Map<String, Value>, indent: usize) -> ObjectMember {
    let members = map
        .iter()
        .map(|(key, value)| build_at(key, value, indent + 1))
        .collect();
    ObjectMember::container(name, DataType::Object, members, None, indent)
}

fn build_list(name: &str, xs: &[Value], indent: usize) -> ObjectMember {
    let (members, element) = match xs.first() {
        Some(first) => element_shape(name, first, indent),
        None => (Vec::new(), None),
    };
    ObjectMember::container(name, DataType::List, members, element, indent)
}

/// Shape of a list element: its fields, or its scalar type.
/// Nested arrays flatten into the outer list.
fn element_shape(name: &str, first: &Value, indent: usize) -> (Vec<ObjectMember>, Option<DataType>) {
    match first {
        Value::Array(inner) => match inner.first() {
            Some(v) => element_shape(name, v, indent),
            None => (Vec::new(), None),
        },
        other => {
            let element = build_at(name, other, indent);
            match element.members {
                Some(members) => (members, None),
                None => (Vec::new(), Some(element.data_type)),
            }
        }
    }
}

// ------------------------------- Tests ----------------------------------- //
