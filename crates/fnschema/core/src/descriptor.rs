//! Type descriptors: the language-independent handle for a parameter's declared type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declared type of a parameter or record field.
///
/// Descriptors are plain data so that callers can build them from whatever
/// reflection facility they have (or from a manifest file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Unconstrained; resolves to the empty schema.
    Any,
    Integer,
    Float,
    String,
    Boolean,
    /// The explicit null type.
    Null,
    /// The absence of a value.
    NoneValue,
    /// Binary data. Never representable as an array.
    Bytes,
    /// Ordered or unordered collection. Empty `args` is a bare generic.
    Sequence {
        collection: Collection,
        #[serde(default)]
        args: Vec<TypeDescriptor>,
    },
    /// Key/value association, `args` is `[key, value]`. Empty `args` is a bare generic.
    Mapping {
        #[serde(default)]
        args: Vec<TypeDescriptor>,
    },
    /// Fixed-shape keyed structure.
    Record(RecordType),
    /// A fixed set of literal values.
    Literal { values: Vec<Value> },
    /// One of several types.
    Union { members: Vec<TypeDescriptor> },
    /// A type only known to handlers registered at run time.
    Custom {
        name: String,
        #[serde(default)]
        args: Vec<TypeDescriptor>,
    },
}

/// Collection flavour of a [`TypeDescriptor::Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    List,
    Tuple,
    Set,
    FrozenSet,
    Deque,
    Range,
}

/// A record type with named fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<RecordField>,
}

/// A single record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Optional fields are left out of the record's `required` list.
    #[serde(default)]
    pub optional: bool,
}

impl TypeDescriptor {
    /// `list[item]`
    pub fn list_of(item: Self) -> Self {
        Self::Sequence {
            collection: Collection::List,
            args: vec![item],
        }
    }

    /// A collection without element type.
    pub fn bare(collection: Collection) -> Self {
        Self::Sequence {
            collection,
            args: Vec::new(),
        }
    }

    /// `dict[key, value]`
    pub fn map_of(key: Self, value: Self) -> Self {
        Self::Mapping {
            args: vec![key, value],
        }
    }

    /// `Union[members...]`
    pub fn union_of(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Union {
            members: members.into_iter().collect(),
        }
    }

    /// `Optional[inner]`, i.e. `Union[inner, None]`.
    pub fn optional(inner: Self) -> Self {
        Self::union_of([inner, Self::NoneValue])
    }

    /// `Literal[values...]`
    pub fn literal<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Literal {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A custom descriptor without arguments.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

impl RecordType {
    /// Create an empty record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            ty,
            optional: false,
        });
        self
    }

    /// Add a field that may be omitted.
    pub fn optional_field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            ty,
            optional: true,
        });
        self
    }
}

impl From<RecordType> for TypeDescriptor {
    fn from(record: RecordType) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
            Self::FrozenSet => "frozenset",
            Self::Deque => "deque",
            Self::Range => "range",
        };
        f.write_str(name)
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[TypeDescriptor]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("[")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str("]")
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Integer => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("str"),
            Self::Boolean => f.write_str("bool"),
            Self::Null | Self::NoneValue => f.write_str("None"),
            Self::Bytes => f.write_str("bytes"),
            Self::Sequence { collection, args } => {
                write!(f, "{collection}")?;
                write_args(f, args)
            }
            Self::Mapping { args } => {
                f.write_str("dict")?;
                write_args(f, args)
            }
            Self::Record(record) => f.write_str(&record.name),
            Self::Literal { values } => {
                let rendered: Vec<String> = values.iter().map(Value::to_string).collect();
                write!(f, "Literal[{}]", rendered.join(", "))
            }
            Self::Union { members } => {
                f.write_str("Union")?;
                write_args(f, members)
            }
            Self::Custom { name, args } => {
                f.write_str(name)?;
                write_args(f, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_nested_generics() {
        let ty = TypeDescriptor::map_of(
            TypeDescriptor::String,
            TypeDescriptor::list_of(TypeDescriptor::optional(TypeDescriptor::Integer)),
        );
        assert_eq!(ty.to_string(), "dict[str, list[Union[int, None]]]");
        assert_eq!(TypeDescriptor::bare(Collection::FrozenSet).to_string(), "frozenset");
    }

    #[test]
    fn test_deserialize_tagged_descriptor() {
        let ty: TypeDescriptor = serde_json::from_value(json!({
            "kind": "sequence",
            "collection": "list",
            "args": [{"kind": "integer"}]
        }))
        .unwrap();
        assert_eq!(ty, TypeDescriptor::list_of(TypeDescriptor::Integer));

        let bare: TypeDescriptor =
            serde_json::from_value(json!({"kind": "mapping"})).unwrap();
        assert_eq!(bare, TypeDescriptor::Mapping { args: vec![] });
    }

    #[test]
    fn test_record_builder_keeps_field_order() {
        let record = RecordType::new("Point")
            .field("x", TypeDescriptor::Float)
            .optional_field("label", TypeDescriptor::String);
        let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "label"]);
        assert!(record.fields[1].optional);
    }
}
